//! `forum-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no transport or storage
//! concerns): strongly-typed identifiers and the recoverable error taxonomy
//! shared by the store and the HTTP layer.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{CommentId, PostId, UserId};
