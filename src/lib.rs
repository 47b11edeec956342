pub mod cli;
pub mod config;
pub mod error;
pub mod wizard;

pub use error::{Result, SetupError};
