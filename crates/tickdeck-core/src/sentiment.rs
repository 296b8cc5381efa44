//! Headline sentiment scoring.
//!
//! The news adapter attaches a polarity score to every title and summary it
//! ingests. Scoring is lexicon-based: signed cue-word counts squashed into
//! the open interval (-1, 1), with zero for text carrying no cues.

/// Positive cue words, sorted for binary search.
const POSITIVE: &[&str] = &[
    "accelerate",
    "advance",
    "advances",
    "beat",
    "beats",
    "boom",
    "boost",
    "boosted",
    "bullish",
    "climb",
    "climbed",
    "climbs",
    "exceed",
    "exceeded",
    "exceeds",
    "expand",
    "expands",
    "gain",
    "gained",
    "gains",
    "grew",
    "grow",
    "growth",
    "improve",
    "improved",
    "improves",
    "jump",
    "jumped",
    "jumps",
    "optimistic",
    "outperform",
    "outperformed",
    "positive",
    "profit",
    "profitable",
    "profits",
    "rallied",
    "rallies",
    "rally",
    "rebound",
    "record",
    "recover",
    "recovered",
    "recovery",
    "rise",
    "rises",
    "rose",
    "soar",
    "soared",
    "soars",
    "strength",
    "strong",
    "surge",
    "surged",
    "surges",
    "top",
    "topped",
    "tops",
    "upbeat",
    "upgrade",
    "upgraded",
    "win",
    "wins",
];

/// Negative cue words, sorted for binary search.
const NEGATIVE: &[&str] = &[
    "bankrupt",
    "bankruptcy",
    "bearish",
    "collapse",
    "collapsed",
    "crash",
    "crashed",
    "crisis",
    "cut",
    "cuts",
    "decline",
    "declined",
    "declines",
    "deficit",
    "downgrade",
    "downgraded",
    "drop",
    "dropped",
    "drops",
    "fall",
    "falls",
    "fear",
    "fears",
    "fell",
    "fined",
    "fraud",
    "lawsuit",
    "layoff",
    "layoffs",
    "loss",
    "losses",
    "lost",
    "miss",
    "missed",
    "misses",
    "plunge",
    "plunged",
    "plunges",
    "probe",
    "recall",
    "recession",
    "risk",
    "risks",
    "sank",
    "shortfall",
    "sink",
    "slide",
    "slides",
    "slip",
    "slipped",
    "slips",
    "slump",
    "slumped",
    "slumps",
    "struggle",
    "struggled",
    "struggles",
    "sued",
    "tumble",
    "tumbled",
    "tumbles",
    "warn",
    "warned",
    "warning",
    "warns",
    "weak",
    "weakness",
    "worries",
    "worry",
    "worse",
    "worst",
];

/// Tokens that invert the cue that follows them.
const NEGATIONS: &[&str] = &["never", "no", "not", "without"];

const DAMPING: f64 = 15.0;

/// Score a headline or summary into [-1, 1].
///
/// Text without any cue words scores exactly 0.
pub fn polarity(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();

    let mut raw = 0_i64;
    for (index, token) in tokens.iter().enumerate() {
        let cue = if POSITIVE.binary_search(token).is_ok() {
            1
        } else if NEGATIVE.binary_search(token).is_ok() {
            -1
        } else {
            continue;
        };

        let negated = index
            .checked_sub(1)
            .map(|prev| NEGATIONS.binary_search(&tokens[prev]).is_ok())
            .unwrap_or(false);

        raw += if negated { -cue } else { cue };
    }

    if raw == 0 {
        return 0.0;
    }

    let raw = raw as f64;
    raw / (raw * raw + DAMPING).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_headline_scores_positive() {
        let score = polarity("Shares surge as profits beat expectations");
        assert!(score > 0.0);
        assert!(score < 1.0);
    }

    #[test]
    fn negative_headline_scores_negative() {
        let score = polarity("Stock plunges after earnings miss and layoffs");
        assert!(score < 0.0);
        assert!(score > -1.0);
    }

    #[test]
    fn single_cue_has_known_magnitude() {
        let expected = 1.0 / 16.0_f64.sqrt();
        assert!((polarity("revenue gains") - expected).abs() < 1e-12);
        assert!((polarity("revenue drops") + expected).abs() < 1e-12);
    }

    #[test]
    fn negation_flips_the_following_cue() {
        assert!(polarity("no growth this quarter") < 0.0);
        assert!(polarity("not weak at all") > 0.0);
    }

    #[test]
    fn text_without_cues_scores_exactly_zero() {
        assert_eq!(polarity(""), 0.0);
        assert_eq!(polarity("Quarterly report scheduled for Tuesday"), 0.0);
    }

    #[test]
    fn case_and_punctuation_do_not_matter() {
        assert_eq!(polarity("GAINS!!!"), polarity("gains"));
    }

    #[test]
    fn score_stays_inside_the_open_interval() {
        let piled_on = "surge gains rally record profits beat tops climbs jumps soared";
        let score = polarity(piled_on);
        assert!(score > 0.9);
        assert!(score < 1.0);
    }

    #[test]
    fn cue_lists_are_sorted_for_binary_search() {
        for list in [POSITIVE, NEGATIVE, NEGATIONS] {
            for pair in list.windows(2) {
                assert!(pair[0] < pair[1], "{} must sort before {}", pair[0], pair[1]);
            }
        }
    }
}
