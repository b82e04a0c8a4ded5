use std::sync::{Arc, Mutex};

use influencer::{Article, Follower, Influencer, Listener, ListenerHandle};

/// One received notification: (listener, influencer, title, url).
pub type Notification = (String, String, String, String);

pub type Notifications = Arc<Mutex<Vec<Notification>>>;

pub struct Recorder {
    name: String,
    notifications: Notifications,
}

impl Listener for Recorder {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Follower for Recorder {
    fn did_update(&self, influencer: &Influencer, article: &Article, url: &str) {
        // Track did_update() calls.
        self.notifications.lock().unwrap().push((
            self.name.clone(),
            influencer.name().to_string(),
            article.title().to_string(),
            url.to_string(),
        ));
    }
}

/// Returns a factory for recording listeners that all share one log.
pub fn register_notifications_listener() -> (
    impl Fn(&str) -> ListenerHandle<Recorder>,
    Notifications,
) {
    let notifications: Notifications = Arc::new(Mutex::new(Vec::with_capacity(16)));
    let notifications_c = Arc::clone(&notifications);

    let make_listener = move |name: &str| {
        ListenerHandle::new(Recorder {
            name: name.to_string(),
            notifications: Arc::clone(&notifications_c),
        })
    };
    (make_listener, notifications)
}

/// Names of the listeners notified so far, in order.
pub fn notified(notifications: &Notifications) -> Vec<String> {
    notifications
        .lock()
        .unwrap()
        .iter()
        .map(|n| n.0.clone())
        .collect()
}
