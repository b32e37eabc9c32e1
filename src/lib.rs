pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod renderer;
pub mod resolver;
pub mod source;
pub mod ui;

pub use error::{ChangelogError, Result};
