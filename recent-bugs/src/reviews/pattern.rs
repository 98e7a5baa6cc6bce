//! Review reference extraction.

use super::ReviewError;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Review host linked from bug comments unless configured otherwise.
pub const DEFAULT_REVIEW_HOST: &str = "review.openstack.org";

/// Matches links to changes on one review host.
#[derive(Debug, Clone)]
pub struct ReviewPattern {
    host: String,
    regex: Regex,
}

impl ReviewPattern {
    /// Builds a matcher for `https://<host>/<number>` links.
    ///
    /// Also accepts `http://`, an explicit port and the `/#/c/<number>`
    /// form of the same link.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Pattern`] if the resulting pattern is too large
    /// to compile.
    pub fn new(host: &str) -> Result<Self, ReviewError> {
        let pattern = format!(
            r"https?://{}(?::\d+)?/(?:#/c/)?(\d+)\b",
            regex::escape(host)
        );
        Ok(Self {
            host: host.to_string(),
            regex: Regex::new(&pattern)?,
        })
    }

    /// Returns the host this pattern matches.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the distinct review numbers linked from `text`.
    #[must_use]
    pub fn extract(&self, text: &str) -> BTreeSet<u64> {
        self.regex
            .captures_iter(text)
            .filter_map(|captures| captures.get(1))
            .filter_map(|number| number.as_str().parse().ok())
            .collect()
    }

    /// Returns the browser link of `review` on this host.
    #[must_use]
    pub fn link(&self, review: u64) -> String {
        format!("https://{}/{review}", self.host)
    }
}

/// Returns the distinct review numbers linked from `discussion` on
/// [`DEFAULT_REVIEW_HOST`].
#[must_use]
pub fn extract_reviews(discussion: &str) -> BTreeSet<u64> {
    static PATTERN: OnceLock<Option<ReviewPattern>> = OnceLock::new();
    PATTERN
        .get_or_init(|| ReviewPattern::new(DEFAULT_REVIEW_HOST).ok())
        .as_ref()
        .map(|pattern| pattern.extract(discussion))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_duplicate_links() {
        let text = "Fix proposed: https://review.openstack.org/31542\n\
                    Reviewed: https://review.openstack.org/31542";

        let reviews = extract_reviews(text);
        assert_eq!(reviews.len(), 1);
        assert!(reviews.contains(&31542));
    }

    #[test]
    fn no_links_is_empty() {
        assert!(extract_reviews("Confirmed on trunk, see the traceback above.").is_empty());
        assert!(extract_reviews("").is_empty());
    }

    #[test]
    fn collects_every_distinct_review() {
        let text = "https://review.openstack.org/2 then https://review.openstack.org/10 \
                    and https://review.openstack.org:443/#/c/7";

        let reviews: Vec<u64> = extract_reviews(text).into_iter().collect();
        assert_eq!(reviews, vec![2, 7, 10]);
    }

    #[test]
    fn ignores_other_hosts_and_lookalikes() {
        let text = "https://review.example.org/123 https://reviewXopenstack.org/456 \
                    https://review.openstack.org/abc";

        assert!(extract_reviews(text).is_empty());
    }

    #[test]
    fn custom_host() {
        let pattern = ReviewPattern::new("review.opendev.org").unwrap();

        assert_eq!(
            pattern.extract("https://review.opendev.org/#/c/700123/"),
            BTreeSet::from([700_123])
        );
        assert_eq!(pattern.link(5), "https://review.opendev.org/5");
    }
}
