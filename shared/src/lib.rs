//! Shared types and core logic for the Crop Advisory service
//!
//! Everything in this crate is pure computation over weather documents that
//! were already fetched: unit normalization, 48-hour window aggregation,
//! daily bucketing, the advisory rule engine and payload assembly. It is
//! used by the backend server and, through WASM, by browser clients.

pub mod aggregation;
pub mod daily;
pub mod document;
pub mod models;
pub mod payload;
pub mod rules;
pub mod types;
pub mod units;
pub mod validation;

pub use aggregation::{summarize_window, WindowSummary, WINDOW_SECONDS};
pub use daily::{chart_series, daily_series, DEFAULT_DAYS};
pub use models::*;
pub use payload::{build_forecast_chart, generate_advisory_payload, generate_advisory_payload_at};
pub use rules::{evaluate_advisories, fingerprint};
pub use types::*;
pub use units::{coerce_number, to_celsius, KELVIN_THRESHOLD};
pub use validation::*;
