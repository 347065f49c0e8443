pub mod models;
pub mod store;
pub mod services;
pub mod session;
pub mod cli;
pub mod utils;

pub use anyhow::{Error, Result};
