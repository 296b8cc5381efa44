use tickdeck_core::{NewsFeed, NewsItem};

/// Cap on rendered headlines.
pub const MAX_HEADLINES: usize = 10;

/// The news section content: at most [`MAX_HEADLINES`] items in feed
/// order, sentiment scores carried verbatim from the source.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsSummary {
    pub ticker: String,
    pub items: Vec<NewsItem>,
}

impl NewsSummary {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Trim a feed to the headline cap without reordering or rescoring.
pub fn summarize(feed: &NewsFeed) -> NewsSummary {
    let take = feed.items.len().min(MAX_HEADLINES);
    NewsSummary {
        ticker: feed.symbol.to_string(),
        items: feed.items[..take].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickdeck_core::Symbol;

    fn feed_with(count: usize) -> NewsFeed {
        let items = (0..count)
            .map(|index| {
                NewsItem::new(
                    None,
                    format!("Headline {index}"),
                    format!("Summary {index}"),
                    None,
                    0.25,
                    -0.5,
                )
                .expect("valid item")
            })
            .collect();
        NewsFeed::new(Symbol::parse("AAPL").expect("valid symbol"), items)
    }

    #[test]
    fn long_feeds_are_capped_at_ten() {
        let summary = summarize(&feed_with(15));

        assert_eq!(summary.items.len(), 10);
        assert_eq!(summary.items[0].title, "Headline 0");
        assert_eq!(summary.items[9].title, "Headline 9");
    }

    #[test]
    fn short_feeds_pass_through_whole() {
        let summary = summarize(&feed_with(3));
        assert_eq!(summary.items.len(), 3);
    }

    #[test]
    fn empty_feeds_summarize_empty() {
        let summary = summarize(&feed_with(0));

        assert!(summary.is_empty());
        assert_eq!(summary.ticker, "AAPL");
    }

    #[test]
    fn sentiment_scores_are_carried_verbatim() {
        let summary = summarize(&feed_with(1));

        assert_eq!(summary.items[0].sentiment_title, 0.25);
        assert_eq!(summary.items[0].sentiment_summary, -0.5);
    }
}
