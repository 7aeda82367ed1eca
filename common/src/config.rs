// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use serde::Deserialize;

use crate::increments::Span;
use crate::sensor::SensorReadings;

/// The spans the "increase" actions draw their increments from.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Increments {
    pub temperature: Span,
    pub light_intensity: Span,
    pub moisture: Span,
}

/// Startup configuration of the greenhouse, compiled into the binary.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct GreenhouseConfig {
    pub initial_readings: SensorReadings,
    pub increments: Increments,
    /// Pause between two clock updates.
    pub clock_interval_ms: u64,
}

impl GreenhouseConfig {
    /// Loads the configuration embedded from `greenhouse.json`.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        let json_data = std::include_str!("./greenhouse.json");

        Self::from_json(json_data)
    }

    /// Parses a configuration. Empty increment spans are rejected.
    pub fn from_json(json_data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json_data)
    }

    pub fn clock_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.clock_interval_ms)
    }
}

#[test]
fn test_embedded_config() {
    let config = GreenhouseConfig::embedded().unwrap();

    assert_eq!(config.initial_readings.temperature, 17.4);
    assert_eq!(config.initial_readings.humidity, 40.0);
    assert_eq!(config.initial_readings.moisture, 47.4);
    assert_eq!(config.initial_readings.light_intensity, 45.0);
    assert_eq!(config.initial_readings.crop_growth, 1.3);

    assert_eq!(config.increments.temperature, Span::new(0.5, 1.5).unwrap());
    assert_eq!(config.increments.light_intensity, Span::new(5.0, 10.0).unwrap());
    assert_eq!(config.increments.moisture, Span::new(2.0, 5.0).unwrap());

    assert_eq!(config.clock_interval(), std::time::Duration::from_secs(1));
}

#[test]
fn test_missing_field_is_rejected() {
    let result = GreenhouseConfig::from_json(r#"{ "clock_interval_ms": 1000 }"#);

    assert!(result.is_err());
}

#[test]
fn test_reversed_span_is_rejected() {
    let json_data = std::include_str!("./greenhouse.json").replace(
        r#""moisture": { "low": 2.0, "high": 5.0 }"#,
        r#""moisture": { "low": 5.0, "high": 2.0 }"#,
    );
    assert_ne!(json_data, std::include_str!("./greenhouse.json"));

    let error = GreenhouseConfig::from_json(&json_data).unwrap_err();

    assert!(error.to_string().contains("empty increment span [5, 2)"), "{error}");
}
