// src/lib.rs
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod setup;
pub mod test_utils;

pub use crate::config::Settings;
pub use crate::error::{ComputationFailure, FireSourceError};
