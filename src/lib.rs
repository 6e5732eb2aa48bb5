pub mod core;

pub use crate::core::error::{Error, Result};
