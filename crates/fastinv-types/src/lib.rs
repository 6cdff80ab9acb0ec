#![forbid(unsafe_code)]
#![doc = "Common error types for the fastinv modular arithmetic engine."]

pub mod error;

pub use error::*;
