//! Listener identity and the handle type stored in a [`Subject`].
//!
//! A listener is anything that can be told about an update. The registry never
//! owns listeners: it keeps a [`ListenerHandle`], a cheap clone of an `Arc` tagged
//! with a [`ListenerId`]. Removing a handle from a registry drops only the
//! registry's reference; the listener lives as long as its creator keeps it.
//!
//! [`Subject`]: crate::subjects::Subject

use std::{
    fmt,
    ops::Deref,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

/// Anything that has a display name and can be registered in a [`Subject`].
///
/// [`Subject`]: crate::subjects::Subject
pub trait Listener {
    fn name(&self) -> &str;
}

/// Opaque identity of a registered listener.
///
/// Ids are assigned once, when a [`ListenerHandle`] is created, and are shared
/// by every clone of that handle. No two handles created in one process get
/// the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl ListenerId {
    pub(crate) fn next() -> Self {
        ListenerId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:016x}", self.0)
    }
}

/// Shared, identity-carrying reference to a listener.
///
/// Equality is by [`ListenerId`] only, so two handles created from equal
/// listener values are still distinct entries in a registry.
pub struct ListenerHandle<L: ?Sized> {
    id: ListenerId,
    inner: Arc<L>,
}

impl<L> ListenerHandle<L> {
    /// Wraps `listener` and assigns it a fresh id.
    ///
    /// The handle takes the listener by value, so a listener gets exactly one
    /// id; clone the handle to share it.
    pub fn new(listener: L) -> Self {
        ListenerHandle {
            id: ListenerId::next(),
            inner: Arc::new(listener),
        }
    }
}

impl<L: ?Sized> ListenerHandle<L> {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Returns the underlying shared listener.
    pub fn as_arc(&self) -> &Arc<L> {
        &self.inner
    }

    pub(crate) fn into_parts(self) -> (ListenerId, Arc<L>) {
        (self.id, self.inner)
    }

    // Used to re-type a handle (e.g. to a trait object) without changing its identity.
    pub(crate) fn from_parts(id: ListenerId, inner: Arc<L>) -> Self {
        ListenerHandle { id, inner }
    }
}

impl<L: ?Sized> Clone for ListenerHandle<L> {
    fn clone(&self) -> Self {
        ListenerHandle {
            id: self.id,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: ?Sized> Deref for ListenerHandle<L> {
    type Target = L;

    fn deref(&self) -> &L {
        &self.inner
    }
}

impl<L: ?Sized> PartialEq for ListenerHandle<L> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<L: ?Sized> Eq for ListenerHandle<L> {}

impl<L: Listener + ?Sized> fmt::Debug for ListenerHandle<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("id", &self.id)
            .field("name", &self.inner.name())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::{Listener, ListenerHandle, ListenerId};

    struct Named(&'static str);

    impl Listener for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn clones_share_identity() {
        let a = ListenerHandle::new(Named("a"));
        let a2 = a.clone();

        assert_eq!(a, a2);
        assert_eq!(a.id(), a2.id());
        assert_eq!(a2.name(), "a");
    }

    #[test]
    fn equal_values_are_distinct_listeners() {
        let a = ListenerHandle::new(Named("same"));
        let b = ListenerHandle::new(Named("same"));

        assert_ne!(a, b);
    }

    #[test]
    fn clone_is_the_only_alias() {
        let a = ListenerHandle::new(Named("a"));
        let alias = a.clone();

        assert!(std::sync::Arc::ptr_eq(a.as_arc(), alias.as_arc()));
        assert_eq!(a, alias);

        // A handle equal to `a` always points at the same listener.
        let b = ListenerHandle::new(Named("a"));
        assert_ne!(a, b);
        assert!(!std::sync::Arc::ptr_eq(a.as_arc(), b.as_arc()));
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<ListenerId> = (0..1000).map(|_| ListenerId::next()).collect();

        assert_eq!(ids.len(), 1000);
    }
}
