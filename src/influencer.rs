use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use log::{debug, info};

use crate::{
    listener::{Listener, ListenerHandle},
    sns::{Publish, SnsService},
    subjects::Subject,
};

/// Something posted by an [`Influencer`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Article {
    title: String,
}

impl Article {
    pub fn new(title: impl Into<String>) -> Self {
        Article {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// A listener that follows influencers.
///
/// `did_update` is called synchronously from [`Influencer::post`], once per
/// registry entry. The influencer's registry is not locked while the hook
/// runs, so a follower may follow or unfollow from inside it; the change is
/// seen by the next post.
pub trait Follower: Listener + Send + Sync {
    fn did_update(&self, influencer: &Influencer, article: &Article, url: &str);
}

/// Handle type stored in an influencer's registry.
pub type FollowerHandle = ListenerHandle<dyn Follower>;

impl<L: Follower + 'static> From<ListenerHandle<L>> for FollowerHandle {
    fn from(value: ListenerHandle<L>) -> Self {
        let (id, inner) = value.into_parts();
        let inner: Arc<dyn Follower> = inner;
        ListenerHandle::from_parts(id, inner)
    }
}

struct Core {
    name: String,
    sns: Arc<dyn Publish>,
    followers: Mutex<Subject<dyn Follower>>,
}

/// A publisher with a name and an ordered list of followers.
///
/// `Influencer` is a shared handle: cloning it is shallow and every clone
/// posts to, and manages, the same set of followers.
///
/// # Examples
///
///```
/// use influencer::{Article, Influencer, ListenerHandle, Subscriber};
///
/// let maezawa = Influencer::new("Maezawa");
///
/// let tanaka = ListenerHandle::new(Subscriber::new("Tanaka"));
/// let suzuki = ListenerHandle::new(Subscriber::new("Suzuki"));
///
/// maezawa.add_listener(tanaka.clone());
/// maezawa.add_listener(suzuki.clone());
///
/// maezawa.post(Article::new("moon_trip"));
///
/// maezawa.remove_listener(&tanaka);
/// maezawa.post(Article::new("giveaway"));
///
/// assert_eq!(tanaka.opened().len(), 1);
/// assert_eq!(suzuki.opened().len(), 2);
/// assert_eq!(suzuki.opened()[1], "https://www.twitttter.com/Maezawa/giveaway");
///```
#[derive(Clone)]
pub struct Influencer(Arc<Core>);

impl Influencer {
    /// Creates an influencer posting to the default [`SnsService`].
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_service(name, Arc::new(SnsService::default()))
    }

    /// Creates an influencer posting through `sns`.
    pub fn with_service(name: impl Into<String>, sns: Arc<dyn Publish>) -> Self {
        Influencer(Arc::new(Core {
            name: name.into(),
            sns,
            followers: Mutex::new(Subject::new()),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Registers a follower at the end of the list.
    ///
    /// The same follower may be registered more than once and is then
    /// notified once per registration.
    pub fn add_listener(&self, listener: impl Into<FollowerHandle>) {
        let listener = listener.into();
        debug!("{}: {} ({}) follows", self.name(), listener.name(), listener.id());
        self.followers().add_listener(listener);
    }

    /// Removes the first registration of `listener`; does nothing if it is
    /// not registered.
    pub fn remove_listener<L: ?Sized>(&self, listener: &ListenerHandle<L>) {
        if self.followers().remove_id(listener.id()) {
            debug!("{}: {} unfollowed", self.name(), listener.id());
        }
    }

    /// Current followers, in registration order.
    pub fn listeners(&self) -> Vec<FollowerHandle> {
        self.followers().snapshot()
    }

    /// Returns the number of registrations.
    pub fn len(&self) -> usize {
        self.followers().len()
    }

    /// Returns `true` if nobody follows this influencer.
    pub fn is_empty(&self) -> bool {
        self.followers().is_empty()
    }

    /// Publishes `article` and notifies every follower registered right now.
    pub fn post(&self, article: Article) {
        let url = self.0.sns.post(self.name(), &article);
        self.notify_update(&article, &url);
    }

    /// Notifies the followers registered at the time of the call, in
    /// registration order.
    pub fn notify_update(&self, article: &Article, url: &str) {
        info!("{}: posted to {}", self.name(), url);

        // Snapshot first so hooks run without the registry locked.
        let followers = self.followers().snapshot();
        for follower in &followers {
            follower.did_update(self, article, url);
        }
    }

    fn followers(&self) -> MutexGuard<'_, Subject<dyn Follower>> {
        // Registry operations never leave the list half-updated, so the
        // contents are still valid after a poison.
        self.0.followers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Influencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Influencer")
            .field("name", &self.name())
            .field("followers", &self.len())
            .finish()
    }
}
