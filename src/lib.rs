//! Synchronous publisher/follower notifications.
//!
//! An [`Influencer`] keeps an ordered [`Subject`] of followers. When it posts an
//! [`Article`], it asks its publish service for the post URL and then calls every
//! follower registered at that moment, in the order they were registered.
//!
//! Followers are registered through a [`ListenerHandle`], whose [`ListenerId`] is
//! what identifies them for removal. The registry holds handles, not listeners:
//! unfollowing never drops a listener that someone else still holds.
//!
//! # Examples
//!
//!```
//! use influencer::{Article, Influencer, ListenerHandle, Subscriber};
//!
//! let horiemon = Influencer::new("Horiemon");
//! let yamada = ListenerHandle::new(Subscriber::new("Yamada"));
//!
//! // Following twice means being notified twice.
//! horiemon.add_listener(yamada.clone());
//! horiemon.add_listener(yamada.clone());
//! horiemon.post(Article::new("livedoor"));
//! assert_eq!(yamada.opened().len(), 2);
//!
//! // Unfollowing removes one registration at a time.
//! horiemon.remove_listener(&yamada);
//! horiemon.post(Article::new("yakiniku"));
//! assert_eq!(yamada.opened().len(), 3);
//!```
//!
//! [`Subject`]: subjects::Subject

mod errors;
mod influencer;
mod listener;
mod subscriber;

pub mod config;
pub mod scenario;
pub mod sns;
pub mod subjects;

pub use errors::*;
pub use influencer::*;
pub use listener::*;
pub use subscriber::*;
