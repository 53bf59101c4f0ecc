pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod mutator;
pub mod parser;
pub mod ui;

pub use domain::{Part, Version};
pub use error::{Result, SemverError};
