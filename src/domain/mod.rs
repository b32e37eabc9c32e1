//! Domain logic - pure business rules independent of any data source

pub mod commit;
pub mod tag;

pub use commit::Commit;
pub use tag::{Tag, TagIndex};
