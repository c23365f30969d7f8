//! Advisory engine tests
//!
//! Tests for the forecast aggregation and advisory rules including:
//! - Unit normalization
//! - 48-hour window aggregation
//! - Daily bucketing by local calendar day
//! - Rule severity tiers and fingerprint determinism
//! - End-to-end payload assembly

use proptest::prelude::*;
use serde_json::{json, Value};
use shared::{
    daily_series, evaluate_advisories, generate_advisory_payload_at, summarize_window, to_celsius,
    AdvisoryType, CurrentConditions, ForecastDocument, ForecastSample, Severity, WindowSummary,
    WINDOW_SECONDS,
};

// 2024-06-01T00:00:00Z
const NOW: i64 = 1_717_200_000;
const HOUR: i64 = 3600;

fn current(humidity: i32) -> CurrentConditions {
    CurrentConditions {
        temperature_celsius: Some(20.0),
        humidity_percent: humidity,
        wind_speed_mps: 0.0,
        rain_1h_mm: 0.0,
    }
}

fn window(t_max: Option<f64>, t_min: Option<f64>, wind_max: f64, rain_total: f64, pop_max: f64) -> WindowSummary {
    WindowSummary {
        t_max,
        t_min,
        wind_max,
        rain_total,
        pop_max,
    }
}

fn severity_of(advisories: &[shared::Advisory], kind: AdvisoryType) -> Option<Severity> {
    advisories
        .iter()
        .find(|a| a.advisory_type == kind)
        .map(|a| a.severity)
}

fn forecast_item(dt: i64, temp: f64, wind: f64, pop: f64, rain_3h: f64) -> Value {
    json!({
        "dt": dt,
        "main": {"temp": temp, "humidity": 60},
        "wind": {"speed": wind},
        "pop": pop,
        "rain": {"3h": rain_3h}
    })
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_irrigation_high() {
        let advisories = evaluate_advisories(&current(35), &window(Some(32.0), Some(20.0), 0.0, 0.0, 0.1), "corn");
        assert_eq!(severity_of(&advisories, AdvisoryType::Irrigation), Some(Severity::High));
    }

    #[test]
    fn test_irrigation_medium() {
        let advisories = evaluate_advisories(&current(60), &window(Some(29.0), Some(18.0), 0.0, 0.5, 0.2), "corn");
        assert_eq!(severity_of(&advisories, AdvisoryType::Irrigation), Some(Severity::Medium));
    }

    #[test]
    fn test_irrigation_hot_but_humid_is_medium() {
        let advisories = evaluate_advisories(&current(41), &window(Some(34.0), None, 0.0, 0.0, 0.0), "corn");
        assert_eq!(severity_of(&advisories, AdvisoryType::Irrigation), Some(Severity::Medium));
    }

    #[test]
    fn test_fungal_high() {
        let advisories = evaluate_advisories(&current(90), &window(None, None, 0.0, 12.0, 0.9), "rice");
        assert_eq!(severity_of(&advisories, AdvisoryType::FungalRisk), Some(Severity::High));
    }

    #[test]
    fn test_fungal_medium_from_probability() {
        let advisories = evaluate_advisories(&current(85), &window(None, None, 0.0, 0.0, 0.8), "rice");
        assert_eq!(severity_of(&advisories, AdvisoryType::FungalRisk), Some(Severity::Medium));
    }

    #[test]
    fn test_wind_tiers() {
        let medium = evaluate_advisories(&current(50), &window(None, None, 6.0, 0.0, 0.0), "corn");
        assert_eq!(severity_of(&medium, AdvisoryType::WindCaution), Some(Severity::Medium));

        let high = evaluate_advisories(&current(50), &window(None, None, 7.5, 0.0, 0.0), "corn");
        assert_eq!(severity_of(&high, AdvisoryType::WindCaution), Some(Severity::High));

        let calm = evaluate_advisories(&current(50), &window(None, None, 4.9, 0.0, 0.0), "corn");
        assert_eq!(severity_of(&calm, AdvisoryType::WindCaution), None);
    }

    #[test]
    fn test_frost_tiers() {
        let high = evaluate_advisories(&current(50), &window(Some(5.0), Some(-1.0), 0.0, 0.0, 0.0), "wheat");
        assert_eq!(severity_of(&high, AdvisoryType::FrostRisk), Some(Severity::High));

        let medium = evaluate_advisories(&current(50), &window(Some(5.0), Some(1.5), 0.0, 0.0, 0.0), "wheat");
        assert_eq!(severity_of(&medium, AdvisoryType::FrostRisk), Some(Severity::Medium));
    }

    #[test]
    fn test_fingerprints_are_deterministic() {
        let current = current(30);
        let window = window(Some(36.0), Some(-2.0), 8.0, 0.0, 0.0);
        let first: Vec<_> = evaluate_advisories(&current, &window, "corn").into_iter().map(|a| a.id).collect();
        let second: Vec<_> = evaluate_advisories(&current, &window, "corn").into_iter().map(|a| a.id).collect();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_fingerprints_follow_drivers() {
        let a = evaluate_advisories(&current(50), &window(None, None, 6.0, 0.0, 0.0), "corn");
        let b = evaluate_advisories(&current(50), &window(None, None, 6.5, 0.0, 0.0), "corn");
        assert_ne!(a[0].id, b[0].id);
        assert_eq!(a[0].id.len(), 8);
    }

    #[test]
    fn test_samples_beyond_window_ignored() {
        let samples: Vec<_> = (1..=4)
            .map(|i| ForecastSample {
                dt: NOW + WINDOW_SECONDS + i * HOUR,
                temperature_celsius: Some(40.0),
                humidity_percent: None,
                wind_speed_mps: 15.0,
                pop: 1.0,
                rain_3h_mm: 20.0,
                rain_1h_mm: 0.0,
            })
            .collect();
        let summary = summarize_window(&samples, NOW);
        assert_eq!(summary.rain_total, 0.0);
        assert_eq!(summary.wind_max, 0.0);
        assert_eq!(summary.pop_max, 0.0);
        assert!(summary.t_max.is_none());
        assert!(summary.t_min.is_none());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating Celsius readings
    fn celsius_strategy() -> impl Strategy<Value = f64> {
        (-600i64..=2000i64).prop_map(|n| n as f64 / 10.0) // -60.0 to 200.0°C
    }

    /// Strategy for generating UTC offsets (whole quarter hours, -12h..+14h)
    fn offset_strategy() -> impl Strategy<Value = i64> {
        (-48i64..=56i64).prop_map(|q| q * 900)
    }

    /// Strategy for generating sample timestamps over ten days
    fn timestamps_strategy() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(0i64..(10 * 24 * HOUR), 0..60)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Re-normalizing a Celsius reading is a no-op
        #[test]
        fn prop_celsius_normalization_idempotent(t in celsius_strategy()) {
            let once = to_celsius(Some(t));
            prop_assert_eq!(once, Some(t));
            prop_assert_eq!(to_celsius(once), once);
        }

        /// Kelvin readings land back on their Celsius value
        #[test]
        fn prop_kelvin_converted(t in -600i64..=600i64) {
            let celsius = t as f64 / 10.0;
            let kelvin = celsius + 273.15;
            let converted = to_celsius(Some(kelvin)).unwrap();
            prop_assert!((converted - celsius).abs() < 1e-9);
        }

        /// Daily series never exceeds five days or the distinct local days present
        #[test]
        fn prop_daily_length_bounded(offsets in timestamps_strategy(), tz in offset_strategy()) {
            let samples: Vec<_> = offsets
                .iter()
                .map(|o| ForecastSample {
                    dt: NOW + o,
                    temperature_celsius: Some(15.0),
                    humidity_percent: None,
                    wind_speed_mps: 1.0,
                    pop: 0.1,
                    rain_3h_mm: 0.0,
                    rain_1h_mm: 0.0,
                })
                .collect();

            let distinct_days: std::collections::BTreeSet<_> = offsets
                .iter()
                .map(|o| (NOW + o + tz).div_euclid(24 * HOUR))
                .collect();

            let series = daily_series(&samples, tz, 5);
            prop_assert!(series.len() <= distinct_days.len().min(5));
            prop_assert!(series.windows(2).all(|w| w[0].dt < w[1].dt));
        }

        /// Temperature-driven rules stay silent without temperatures
        #[test]
        fn prop_undefined_temperatures_never_fire(
            wind in 0.0f64..20.0,
            rain in 0.0f64..50.0,
            pop in 0.0f64..=1.0,
            humidity in 0i32..=100
        ) {
            let advisories = evaluate_advisories(&current(humidity), &window(None, None, wind, rain, pop), "corn");
            for advisory in &advisories {
                prop_assert!(matches!(
                    advisory.advisory_type,
                    AdvisoryType::FungalRisk | AdvisoryType::WindCaution
                ));
            }
        }

        /// Wind caution fires exactly from 5 m/s
        #[test]
        fn prop_wind_threshold(wind in 0.0f64..20.0) {
            let advisories = evaluate_advisories(&current(50), &window(None, None, wind, 0.0, 0.0), "corn");
            let fired = severity_of(&advisories, AdvisoryType::WindCaution);
            if wind >= 5.0 {
                prop_assert!(fired.is_some());
            } else {
                prop_assert!(fired.is_none());
            }
        }

        /// Identical inputs always produce identical advisories
        #[test]
        fn prop_rules_deterministic(
            t_max in -20.0f64..45.0,
            spread in 0.0f64..25.0,
            wind in 0.0f64..20.0,
            rain in 0.0f64..50.0,
            pop in 0.0f64..=1.0,
            humidity in 0i32..=100
        ) {
            let w = window(Some(t_max), Some(t_max - spread), wind, rain, pop);
            prop_assert_eq!(
                evaluate_advisories(&current(humidity), &w, "corn"),
                evaluate_advisories(&current(humidity), &w, "corn")
            );
        }
    }
}

// ============================================================================
// Payload Assembly Tests
// ============================================================================

#[cfg(test)]
mod payload_tests {
    use super::*;

    fn current_doc() -> Value {
        json!({
            "main": {"temp": 306.15, "humidity": 35},
            "wind": {"speed": 3.2},
            "rain": {"1h": 0.2}
        })
    }

    #[test]
    fn test_empty_forecast_produces_empty_output() {
        let forecast = json!({"list": [], "city": {"timezone": 0}});
        let payload = generate_advisory_payload_at(42.0, -93.6, "corn", &current_doc(), &forecast, None, NOW);
        assert!(payload.weather.daily.is_empty());
        assert!(payload.advisories.is_empty());
    }

    #[test]
    fn test_missing_documents_are_degenerate_not_errors() {
        let payload = generate_advisory_payload_at(0.0, 0.0, "corn", &Value::Null, &json!("oops"), Some(""), NOW);
        assert_eq!(payload.location.label, "0.0000, 0.0000");
        assert_eq!(payload.weather.current_temp, None);
        assert_eq!(payload.weather.current_humidity, 0);
        assert!(payload.advisories.is_empty());
    }

    #[test]
    fn test_current_snapshot_normalized() {
        let forecast = json!({"list": []});
        let payload = generate_advisory_payload_at(42.0, -93.6, "corn", &current_doc(), &forecast, Some("Ames, Iowa, US"), NOW);
        let temp = payload.weather.current_temp.unwrap();
        assert!((temp - 33.0).abs() < 1e-9);
        assert_eq!(payload.weather.current_humidity, 35);
        assert_eq!(payload.weather.current_wind, 3.2);
        assert_eq!(payload.weather.current_rain_mm_1h, 0.2);
        assert_eq!(payload.location.label, "Ames, Iowa, US");
        assert_eq!(payload.crop, "corn");
    }

    #[test]
    fn test_hot_dry_forecast_end_to_end() {
        let list: Vec<Value> = (0..16)
            .map(|i| forecast_item(NOW + i * 3 * HOUR, if i % 8 == 4 { 307.15 } else { 295.15 }, 2.0, 0.05, 0.0))
            .collect();
        let forecast = json!({"list": list, "city": {"name": "Ames", "timezone": -18000}});

        let payload = generate_advisory_payload_at(42.0, -93.6, "soybeans", &current_doc(), &forecast, None, NOW);

        let kinds: Vec<_> = payload.advisories.iter().map(|a| a.advisory_type).collect();
        assert_eq!(kinds, vec![AdvisoryType::Irrigation, AdvisoryType::HeatStress]);
        assert_eq!(payload.advisories[0].severity, Severity::High);
        assert_eq!(payload.advisories[1].severity, Severity::Medium);
        assert_eq!(payload.location.label, "42.0000, -93.6000");

        // 48 hours of samples in UTC-5 span three local days
        assert_eq!(payload.weather.daily.len(), 3);
        assert_eq!(payload.weather.daily[0].dt, NOW);
    }

    #[test]
    fn test_payload_json_shape() {
        let forecast = json!({"list": [forecast_item(NOW + HOUR, 10.0, 8.0, 0.5, 1.0)], "city": {"timezone": 0}});
        let payload = generate_advisory_payload_at(1.0, 2.0, "rice", &current_doc(), &forecast, None, NOW);
        let body = serde_json::to_value(&payload).unwrap();

        assert!(body["location"]["label"].is_string());
        assert!(body["weather"]["currentRainMm1h"].is_number());
        let day = &body["weather"]["daily"][0];
        for key in ["dt", "tMin", "tMax", "rainMm", "pop"] {
            assert!(day.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(body["advisories"][0]["type"], "wind_caution");
        assert_eq!(body["advisories"][0]["severity"], "high");
    }

    #[test]
    fn test_forecast_document_round_trip_through_core() {
        let forecast = json!({"list": [forecast_item(NOW, 280.0, 1.0, 0.0, 0.0)], "city": {"timezone": 3600}});
        let parsed = ForecastDocument::from_document(&forecast);
        assert_eq!(parsed.timezone_offset_seconds, 3600);
        let t = parsed.samples[0].temperature_celsius.unwrap();
        assert!((t - 6.85).abs() < 1e-9);
    }
}
