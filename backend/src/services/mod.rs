//! Business logic services for the Crop Advisory server

pub mod advisory;
pub mod location;

pub use advisory::AdvisoryService;
pub use location::LocationService;
