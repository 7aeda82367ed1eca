// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use serde::Deserialize;

/// The names of the readings shown in the greenhouse view, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reading {
    Temperature,
    Humidity,
    Moisture,
    LightIntensity,
    CropGrowth,
}

impl Reading {
    pub const ALL: [Reading; 5] = [
        Reading::Temperature,
        Reading::Humidity,
        Reading::Moisture,
        Reading::LightIntensity,
        Reading::CropGrowth,
    ];

    /// Human readable name used in the label.
    pub fn name(self) -> &'static str {
        match self {
            Reading::Temperature => "Temperature",
            Reading::Humidity => "Humidity",
            Reading::Moisture => "Moisture",
            Reading::LightIntensity => "Light Intensity",
            Reading::CropGrowth => "Crop Growth",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Reading::Temperature => "°C",
            _ => "%",
        }
    }
}

/// The current sensor readings of the greenhouse.
///
/// Values are kept at full precision, only the labels are rounded.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SensorReadings {
    /// Air temperature in °C.
    pub temperature: f64,
    pub humidity: f64,
    /// Soil moisture in percent.
    pub moisture: f64,
    pub light_intensity: f64,
    pub crop_growth: f64,
}

impl SensorReadings {
    pub fn get(&self, reading: Reading) -> f64 {
        match reading {
            Reading::Temperature => self.temperature,
            Reading::Humidity => self.humidity,
            Reading::Moisture => self.moisture,
            Reading::LightIntensity => self.light_intensity,
            Reading::CropGrowth => self.crop_growth,
        }
    }

    /// Formats one reading as `"<Name>: <value> <unit>"` with two decimals.
    pub fn label(&self, reading: Reading) -> String {
        format!("{}: {:.2} {}", reading.name(), self.get(reading), reading.unit())
    }

    /// All labels in display order.
    pub fn labels(&self) -> [String; 5] {
        Reading::ALL.map(|reading| self.label(reading))
    }
}

#[cfg(test)]
fn initial_readings() -> SensorReadings {
    crate::GreenhouseConfig::embedded().unwrap().initial_readings
}

#[test]
fn test_initial_labels() {
    let labels = initial_readings().labels();

    assert_eq!(
        labels,
        [
            "Temperature: 17.40 °C",
            "Humidity: 40.00 %",
            "Moisture: 47.40 %",
            "Light Intensity: 45.00 %",
            "Crop Growth: 1.30 %",
        ]
    );
}

#[test]
fn test_label_rounds_to_two_decimals() {
    let readings = SensorReadings {
        temperature: 18.456789,
        ..initial_readings()
    };

    assert_eq!(readings.label(Reading::Temperature), "Temperature: 18.46 °C");
    assert_eq!(readings.temperature, 18.456789);
}

#[test]
fn test_labels_are_idempotent() {
    let readings = initial_readings();

    assert_eq!(readings.labels(), readings.labels());
}
