pub mod changelog;
pub mod config;
pub mod error;
pub mod git_ops;
pub mod github;
pub mod manifest;
pub mod ui;
pub mod version;
pub mod warnings;

pub use error::{Result, ShipitError};
