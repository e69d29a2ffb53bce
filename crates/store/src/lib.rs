//! `forum-store` — the collaborator store the auth core reads through.
//!
//! In-memory maps behind `RwLock` for users, posts, comments and likes.
//! This crate owns all writes (registration included); the auth core only
//! ever reads users via the `UserDirectory` trait it defines.

pub mod posts;
pub mod users;

pub use posts::{Comment, Post, PostStore, PostView};
pub use users::{NewUser, UserStore};
