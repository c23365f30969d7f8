//! HTTP handlers

mod advisory;
mod health;
mod location;
pub mod query;

pub use advisory::*;
pub use health::*;
pub use location::*;
