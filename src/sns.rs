//! Boundary to the social network the influencers post to.
//!
//! Two capabilities are consumed by the core: [`Publish`], which turns a post
//! into the URL followers are pointed at, and [`OpenContent`], which followers
//! use to open that URL. Neither has an error path.

use log::debug;

use crate::Article;

/// Default service prefix used to build post URLs.
pub const DEFAULT_BASE_URL: &str = "https://www.twitttter.com";

/// Publishes an article on behalf of an influencer and returns its URL.
pub trait Publish: Send + Sync {
    fn post(&self, influencer: &str, article: &Article) -> String;
}

/// Opens published content, e.g. by launching a viewer app.
pub trait OpenContent: Send + Sync {
    fn open(&self, url: &str);
}

/// The social network service.
///
/// Posting is a pure string composition of the service prefix, the
/// influencer's name and the article title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnsService {
    base_url: String,
}

impl SnsService {
    /// Creates a service rooted at `base_url`. A trailing `/` is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        SnsService { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of `article` posted by `influencer`.
    pub fn url_for(&self, influencer: &str, article: &Article) -> String {
        format!("{}/{}/{}", self.base_url, influencer, article.title())
    }
}

impl Default for SnsService {
    fn default() -> Self {
        SnsService::new(DEFAULT_BASE_URL)
    }
}

impl Publish for SnsService {
    fn post(&self, influencer: &str, article: &Article) -> String {
        self.url_for(influencer, article)
    }
}

/// Stand-in for launching the viewer app on the user's device.
#[derive(Debug, Default, Clone, Copy)]
pub struct LaunchApp;

impl OpenContent for LaunchApp {
    fn open(&self, url: &str) {
        debug!("opening {}", url);
    }
}

#[cfg(test)]
mod test {
    use super::{Publish, SnsService, DEFAULT_BASE_URL};
    use crate::Article;

    #[test]
    fn url_joins_prefix_name_and_title() {
        let sns = SnsService::default();
        let url = sns.post("Maezawa", &Article::new("moon_trip"));

        assert_eq!(sns.base_url(), DEFAULT_BASE_URL);
        assert_eq!(url, "https://www.twitttter.com/Maezawa/moon_trip");
    }

    #[test]
    fn url_is_pure() {
        let sns = SnsService::default();
        let article = Article::new("x");

        let first = sns.post("P", &article);
        sns.post("Q", &Article::new("y"));
        let second = sns.post("P", &Article::new("x"));

        assert_eq!(first, second);
        assert_ne!(first, sns.post("Q", &article));
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let sns = SnsService::new("http://localhost:8080//");

        assert_eq!(sns.base_url(), "http://localhost:8080");
        assert_eq!(
            sns.url_for("P", &Article::new("x")),
            "http://localhost:8080/P/x"
        );
    }
}
