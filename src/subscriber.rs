use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

use log::info;

use crate::{
    influencer::{Article, Follower, Influencer},
    listener::Listener,
    sns::{LaunchApp, OpenContent},
};

/// A follower that opens every post it is told about.
pub struct Subscriber {
    name: String,
    opener: Arc<dyn OpenContent>,
    opened: Mutex<Vec<String>>,
}

impl Subscriber {
    /// Creates a subscriber that opens posts with [`LaunchApp`].
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_opener(name, Arc::new(LaunchApp))
    }

    pub fn with_opener(name: impl Into<String>, opener: Arc<dyn OpenContent>) -> Self {
        Subscriber {
            name: name.into(),
            opener,
            opened: Mutex::new(Vec::new()),
        }
    }

    /// URLs this subscriber has opened, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Listener for Subscriber {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Follower for Subscriber {
    fn did_update(&self, influencer: &Influencer, article: &Article, url: &str) {
        info!(
            "  -> {}: must watch {}'s \"{}\"!",
            self.name,
            influencer.name(),
            article.title()
        );

        self.opened
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());
        self.opener.open(url);
    }
}

impl fmt::Debug for Subscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use super::Subscriber;
    use crate::{
        influencer::{Article, Follower, Influencer},
        sns::OpenContent,
    };

    #[derive(Default)]
    struct Opener(Mutex<Vec<String>>);

    impl OpenContent for Opener {
        fn open(&self, url: &str) {
            self.0.lock().unwrap().push(url.to_string());
        }
    }

    #[test]
    fn did_update_opens_url() {
        let opener = Arc::new(Opener::default());
        let tanaka = Subscriber::with_opener("Tanaka", opener.clone());
        let p = Influencer::new("P");

        tanaka.did_update(&p, &Article::new("x"), "https://example.com/P/x");
        tanaka.did_update(&p, &Article::new("y"), "https://example.com/P/y");

        assert_eq!(
            *opener.0.lock().unwrap(),
            ["https://example.com/P/x", "https://example.com/P/y"]
        );
        assert_eq!(tanaka.opened(), *opener.0.lock().unwrap());
    }
}
