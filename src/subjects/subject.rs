use crate::listener::{ListenerHandle, ListenerId};

/// An ordered registry of listeners.
///
/// `Subject` only keeps track of who is interested; it does not know how to
/// notify anybody. Publishers such as [`Influencer`] own a `Subject`, take a
/// [`snapshot`] of it and call whatever hook their listener type exposes.
///
/// Order always reflects registration order. The same handle may be added more
/// than once, in which case it occupies (and is notified through) several
/// entries. Removal takes out the first matching entry only and is a no-op for
/// handles that are not registered.
///
/// [`Influencer`]: crate::Influencer
/// [`snapshot`]: Subject::snapshot
///
/// # Examples
///
///```
/// use influencer::{subjects::Subject, Listener, ListenerHandle};
///
/// struct Follower(&'static str);
///
/// impl Listener for Follower {
///     fn name(&self) -> &str {
///         self.0
///     }
/// }
///
/// let a = ListenerHandle::new(Follower("a"));
/// let b = ListenerHandle::new(Follower("b"));
///
/// let mut subject = Subject::new();
/// subject.add_listener(a.clone());
/// subject.add_listener(b.clone());
/// subject.add_listener(a.clone());
///
/// // Only the first `a` goes away.
/// subject.remove_listener(&a);
///
/// let names: Vec<_> = subject.listeners().iter().map(|l| l.name()).collect();
/// assert_eq!(names, ["b", "a"]);
///```
pub struct Subject<L: ?Sized> {
    listeners: Vec<ListenerHandle<L>>,
}

impl<L: ?Sized> Subject<L> {
    pub fn new() -> Self {
        Subject {
            listeners: Vec::with_capacity(16),
        }
    }

    /// Appends `listener` to the end of the registry.
    pub fn add_listener(&mut self, listener: ListenerHandle<L>) {
        self.listeners.push(listener);
    }

    /// Removes the first entry with the same identity as `listener`.
    ///
    /// Returns `true` if an entry was removed. Removing a listener that was
    /// never added leaves the registry untouched.
    pub fn remove_listener(&mut self, listener: &ListenerHandle<L>) -> bool {
        self.remove_id(listener.id())
    }

    pub(crate) fn remove_id(&mut self, id: ListenerId) -> bool {
        match self.listeners.iter().position(|l| l.id() == id) {
            Some(index) => {
                // `Vec::remove` shifts the tail, keeping registration order.
                self.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    /// Registered listeners, in registration order.
    pub fn listeners(&self) -> &[ListenerHandle<L>] {
        &self.listeners
    }

    /// Owned copy of the current listeners.
    ///
    /// Iterating a snapshot leaves the registry free to change while listeners
    /// are being notified; those changes are seen by the next snapshot.
    pub fn snapshot(&self) -> Vec<ListenerHandle<L>> {
        self.listeners.clone()
    }

    /// Returns `true` if at least one entry has the identity of `listener`.
    pub fn contains(&self, listener: &ListenerHandle<L>) -> bool {
        self.listeners.iter().any(|l| l == listener)
    }

    /// Returns the number of entries, counting duplicates.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if no listeners are registered, `false` otherwise.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<L: ?Sized> Default for Subject<L> {
    fn default() -> Self {
        Self::new()
    }
}
