//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod card_repo;
pub mod meta_repo;

pub use card_repo::CardRepo;
pub use meta_repo::MetaRepo;
