use std::fmt::Write as _;

use time::Date;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 320.0;
const PAD: f64 = 48.0;

/// Render a close series as a standalone SVG line chart.
///
/// An empty series yields an empty frame rather than an error so the page
/// layout stays stable.
pub fn price_chart_svg(series: &[(Date, f64)]) -> String {
    let mut svg = String::with_capacity(512 + series.len() * 16);
    let _ = write!(
        svg,
        r#"<svg viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="Close price chart">"#
    );

    // axes
    let _ = write!(
        svg,
        r##"<line x1="{PAD}" y1="{y}" x2="{x}" y2="{y}" stroke="#9ca3af" stroke-width="1"/>"##,
        x = WIDTH - PAD,
        y = HEIGHT - PAD,
    );
    let _ = write!(
        svg,
        r##"<line x1="{PAD}" y1="{PAD}" x2="{PAD}" y2="{y}" stroke="#9ca3af" stroke-width="1"/>"##,
        y = HEIGHT - PAD,
    );

    if !series.is_empty() {
        let min = series.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
        let max = series
            .iter()
            .map(|(_, v)| *v)
            .fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;

        let mut points = String::with_capacity(series.len() * 14);
        for (index, (_, value)) in series.iter().enumerate() {
            let x = if series.len() == 1 {
                WIDTH / 2.0
            } else {
                PAD + index as f64 * (WIDTH - 2.0 * PAD) / (series.len() - 1) as f64
            };
            let y = if span == 0.0 {
                HEIGHT / 2.0
            } else {
                HEIGHT - PAD - (value - min) / span * (HEIGHT - 2.0 * PAD)
            };
            let _ = write!(points, "{x:.1},{y:.1} ");
        }

        let _ = write!(
            svg,
            r##"<polyline fill="none" stroke="#2563eb" stroke-width="1.5" points="{}"/>"##,
            points.trim_end(),
        );

        // scale labels
        let _ = write!(
            svg,
            r#"<text x="4" y="{y}" font-size="12">{max:.2}</text>"#,
            y = PAD + 4.0,
        );
        let _ = write!(
            svg,
            r#"<text x="4" y="{y}" font-size="12">{min:.2}</text>"#,
            y = HEIGHT - PAD,
        );
        let _ = write!(
            svg,
            r#"<text x="{PAD}" y="{y}" font-size="12">{}</text>"#,
            series[0].0,
            y = HEIGHT - PAD + 16.0,
        );
        let _ = write!(
            svg,
            r#"<text x="{x}" y="{y}" font-size="12" text-anchor="end">{}</text>"#,
            series[series.len() - 1].0,
            x = WIDTH - PAD,
            y = HEIGHT - PAD + 16.0,
        );
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickdeck_core::parse_iso_date;

    fn series(values: &[f64]) -> Vec<(Date, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let day = format!("2024-01-{:02}", index + 2);
                (parse_iso_date(&day).expect("valid date"), *value)
            })
            .collect()
    }

    fn point_count(svg: &str) -> usize {
        svg.split(r#"points=""#)
            .nth(1)
            .and_then(|tail| tail.split('"').next())
            .map(|points| points.split_whitespace().count())
            .unwrap_or(0)
    }

    #[test]
    fn plots_one_point_per_close() {
        let svg = price_chart_svg(&series(&[100.0, 104.0, 98.5]));

        assert!(svg.contains("<polyline"));
        assert_eq!(point_count(&svg), 3);
    }

    #[test]
    fn labels_carry_the_date_span() {
        let svg = price_chart_svg(&series(&[100.0, 104.0, 98.5]));

        assert!(svg.contains("2024-01-02"));
        assert!(svg.contains("2024-01-04"));
    }

    #[test]
    fn flat_series_keeps_coordinates_finite() {
        let svg = price_chart_svg(&series(&[100.0, 100.0, 100.0]));

        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
        assert_eq!(point_count(&svg), 3);
    }

    #[test]
    fn single_point_renders_centered() {
        let svg = price_chart_svg(&series(&[42.0]));

        assert!(!svg.contains("NaN"));
        assert_eq!(point_count(&svg), 1);
        assert!(svg.contains("400.0,160.0"));
    }

    #[test]
    fn empty_series_renders_an_empty_frame() {
        let svg = price_chart_svg(&[]);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains("<polyline"));
    }
}
