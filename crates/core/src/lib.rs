//! Domain types and pure logic shared by the storage and HTTP layers.

pub mod card;
pub mod error;
pub mod meta;
pub mod types;
pub mod upload;
