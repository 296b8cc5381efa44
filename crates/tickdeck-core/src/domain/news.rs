use serde::{Deserialize, Serialize};

use crate::{Symbol, UtcDateTime, ValidationError};

/// One headline from the news provider with sentiment pre-attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub published: Option<UtcDateTime>,
    pub title: String,
    pub summary: String,
    pub link: Option<String>,
    pub sentiment_title: f64,
    pub sentiment_summary: f64,
}

impl NewsItem {
    pub fn new(
        published: Option<UtcDateTime>,
        title: impl Into<String>,
        summary: impl Into<String>,
        link: Option<String>,
        sentiment_title: f64,
        sentiment_summary: f64,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyNewsTitle);
        }
        validate_score("sentiment_title", sentiment_title)?;
        validate_score("sentiment_summary", sentiment_summary)?;

        Ok(Self {
            published,
            title,
            summary: summary.into(),
            link,
            sentiment_title,
            sentiment_summary,
        })
    }
}

/// Provider-ordered news feed for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsFeed {
    pub symbol: Symbol,
    pub items: Vec<NewsItem>,
}

impl NewsFeed {
    pub fn new(symbol: Symbol, items: Vec<NewsItem>) -> Self {
        Self { symbol, items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate_score(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
        return Err(ValidationError::SentimentOutOfRange { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_item_with_scores_in_range() {
        let item = NewsItem::new(
            None,
            "Apple tops quarterly revenue expectations",
            "Strong iPhone demand lifted results.",
            Some(String::from("https://example.test/apple")),
            0.42,
            0.18,
        )
        .expect("item should build");
        assert_eq!(item.sentiment_title, 0.42);
    }

    #[test]
    fn rejects_blank_title() {
        let err = NewsItem::new(None, "  ", "", None, 0.0, 0.0).expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptyNewsTitle));
    }

    #[test]
    fn rejects_score_outside_range() {
        let err = NewsItem::new(None, "Headline", "", None, 1.5, 0.0).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::SentimentOutOfRange { field: "sentiment_title" }
        ));
    }

    #[test]
    fn rejects_non_finite_score() {
        let err = NewsItem::new(None, "Headline", "", None, 0.0, f64::NAN).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::SentimentOutOfRange { field: "sentiment_summary" }
        ));
    }

    #[test]
    fn feed_reports_empty_state() {
        let feed = NewsFeed::new(Symbol::parse("AAPL").expect("valid ticker"), Vec::new());
        assert!(feed.is_empty());
    }
}
