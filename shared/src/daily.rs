//! Daily forecast series bucketed by local calendar day
//!
//! Day boundaries use the location's fixed UTC offset as reported by the
//! provider. Daylight-saving transitions are not modelled.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

use crate::aggregation::{fold_max, fold_min};
use crate::models::{DailyBucket, ForecastSample};
use crate::units::round_to;

/// Number of days returned by default
pub const DEFAULT_DAYS: usize = 5;

#[derive(Debug)]
struct DayAccumulator {
    first_dt: i64,
    t_min: Option<f64>,
    t_max: Option<f64>,
    rain_mm: f64,
    pop_max: f64,
}

impl DayAccumulator {
    fn new(dt: i64) -> Self {
        Self {
            first_dt: dt,
            t_min: None,
            t_max: None,
            rain_mm: 0.0,
            pop_max: 0.0,
        }
    }

    fn add(&mut self, sample: &ForecastSample) {
        if let Some(t) = sample.temperature_celsius {
            self.t_min = fold_min(self.t_min, t);
            self.t_max = fold_max(self.t_max, t);
        }
        self.rain_mm += sample.precipitation_mm();
        self.pop_max = self.pop_max.max(sample.pop);
        self.first_dt = self.first_dt.min(sample.dt);
    }

    fn finish(self) -> DailyBucket {
        DailyBucket {
            dt: self.first_dt,
            t_min: self.t_min,
            t_max: self.t_max,
            rain_mm: round_to(self.rain_mm, 2),
            pop: round_to(self.pop_max, 2),
        }
    }
}

/// Offset for the location; out-of-range offsets fall back to UTC
fn location_offset(utc_offset_seconds: i64) -> FixedOffset {
    i32::try_from(utc_offset_seconds)
        .ok()
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}

/// Local calendar date of an epoch timestamp
pub fn local_date(dt: i64, offset: FixedOffset) -> Option<NaiveDate> {
    DateTime::from_timestamp(dt, 0).map(|utc| utc.with_timezone(&offset).date_naive())
}

/// Group samples into at most `max_days` ascending local-day buckets
pub fn daily_series(samples: &[ForecastSample], utc_offset_seconds: i64, max_days: usize) -> Vec<DailyBucket> {
    let offset = location_offset(utc_offset_seconds);
    let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();

    for sample in samples {
        let Some(date) = local_date(sample.dt, offset) else {
            continue;
        };
        days.entry(date)
            .or_insert_with(|| DayAccumulator::new(sample.dt))
            .add(sample);
    }

    days.into_values()
        .take(max_days)
        .map(DayAccumulator::finish)
        .collect()
}

/// Daily series for charting, with temperatures rounded to one decimal
pub fn chart_series(samples: &[ForecastSample], utc_offset_seconds: i64, max_days: usize) -> Vec<DailyBucket> {
    daily_series(samples, utc_offset_seconds, max_days)
        .into_iter()
        .map(|bucket| DailyBucket {
            t_min: bucket.t_min.map(|t| round_to(t, 1)),
            t_max: bucket.t_max.map(|t| round_to(t, 1)),
            ..bucket
        })
        .collect()
}
