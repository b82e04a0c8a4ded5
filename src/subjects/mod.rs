//! The `subjects` module provides the listener registry that publishers are built on.
//!
//! A [`Subject`] is an ordered list of [`ListenerHandle`]s. It is generic over the
//! kind of listener it stores and has no notification logic of its own: the
//! publisher that owns it decides what "notify" means for its listener type.
//!
//! [`ListenerHandle`]: crate::ListenerHandle

mod subject;

pub use subject::*;
