//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `flashcard_db` (or to
//! the [`FileStore`](crate::files::FileStore)) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod cards;
pub mod meta;
pub mod upload;
