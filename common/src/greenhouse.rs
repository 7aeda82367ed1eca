// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::config::{GreenhouseConfig, Increments};
use crate::increments::IncrementSource;
use crate::scene::{FanState, Fill, Tag, WindowShade};
use crate::sensor::SensorReadings;

/// The state behind the greenhouse view.
///
/// Readings only change through the three `increase_*` actions. `humidity` and `crop_growth` are
/// display only. The window and fan shapes are driven by explicit toggle states, their fill is a
/// function of that state.
pub struct Greenhouse<S> {
    readings: SensorReadings,
    increments: Increments,
    window: WindowShade,
    fan: FanState,
    source: S,
}

impl<S: IncrementSource> Greenhouse<S> {
    pub fn new(config: &GreenhouseConfig, source: S) -> Self {
        Self {
            readings: config.initial_readings,
            increments: config.increments,
            window: WindowShade::default(),
            fan: FanState::default(),
            source,
        }
    }

    pub fn readings(&self) -> &SensorReadings {
        &self.readings
    }

    /// Adds a random amount to the temperature and returns the new value.
    pub fn increase_temperature(&mut self) -> f64 {
        self.readings.temperature += self.source.draw(self.increments.temperature);
        log::debug!("Temperature increased to {}", self.readings.temperature);
        self.readings.temperature
    }

    /// Adds a random amount to the light intensity and returns the new value.
    pub fn increase_light(&mut self) -> f64 {
        self.readings.light_intensity += self.source.draw(self.increments.light_intensity);
        log::debug!("Light intensity increased to {}", self.readings.light_intensity);
        self.readings.light_intensity
    }

    /// Adds a random amount to the moisture and returns the new value.
    pub fn increase_moisture(&mut self) -> f64 {
        self.readings.moisture += self.source.draw(self.increments.moisture);
        log::debug!("Moisture increased to {}", self.readings.moisture);
        self.readings.moisture
    }

    pub fn toggle_window(&mut self) -> WindowShade {
        self.window = self.window.toggled();
        log::debug!("{} is now {}", Tag::Window.as_str(), self.window.fill().name());
        self.window
    }

    pub fn toggle_fan(&mut self) -> FanState {
        self.fan = self.fan.toggled();
        log::debug!("{} is now {}", Tag::Fan.as_str(), self.fan.fill().name());
        self.fan
    }

    /// The labels of all readings, in display order.
    pub fn labels(&self) -> [String; 5] {
        self.readings.labels()
    }

    /// The current fill of the shape tagged `tag`.
    pub fn fill(&self, tag: Tag) -> Fill {
        match tag {
            Tag::Light | Tag::TempSensor => Fill::Yellow,
            Tag::Heater => Fill::Red,
            Tag::WaterPump => Fill::Blue,
            Tag::Window => self.window.fill(),
            Tag::Fan => self.fan.fill(),
        }
    }
}

#[cfg(test)]
fn fixed_greenhouse(increment: f64) -> Greenhouse<crate::FixedIncrements> {
    let config = GreenhouseConfig::embedded().unwrap();
    Greenhouse::new(&config, crate::FixedIncrements(increment))
}

#[test]
fn test_increase_temperature_with_fixed_draw() {
    let mut greenhouse = fixed_greenhouse(1.0);

    greenhouse.increase_temperature();

    assert_eq!(greenhouse.labels()[0], "Temperature: 18.40 °C");
}

#[test]
fn test_increases_stay_in_their_spans() {
    use rand::SeedableRng;

    let config = GreenhouseConfig::embedded().unwrap();
    let source = crate::RandomIncrements::from_rng(rand::rngs::StdRng::seed_from_u64(42));
    let mut greenhouse = Greenhouse::new(&config, source);

    let within =
        |span: crate::Span, delta: f64| delta >= span.low() - 1e-9 && delta < span.high() + 1e-9;

    for _ in 0..200 {
        let before = *greenhouse.readings();

        let temperature = greenhouse.increase_temperature();
        assert!(within(config.increments.temperature, temperature - before.temperature));

        let light = greenhouse.increase_light();
        assert!(within(config.increments.light_intensity, light - before.light_intensity));

        let moisture = greenhouse.increase_moisture();
        assert!(within(config.increments.moisture, moisture - before.moisture));
    }
}

#[test]
fn test_increases_are_stored_at_full_precision() {
    let mut greenhouse = fixed_greenhouse(0.123456);

    greenhouse.increase_light();
    greenhouse.increase_light();

    assert_eq!(greenhouse.readings().light_intensity, 45.0 + 0.123456 + 0.123456);
    assert_eq!(greenhouse.labels()[3], "Light Intensity: 45.25 %");
}

#[test]
fn test_display_only_readings_never_change() {
    let mut greenhouse = fixed_greenhouse(3.0);

    greenhouse.increase_temperature();
    greenhouse.increase_light();
    greenhouse.increase_moisture();
    greenhouse.toggle_window();
    greenhouse.toggle_fan();

    let labels = greenhouse.labels();
    assert_eq!(labels[1], "Humidity: 40.00 %");
    assert_eq!(labels[4], "Crop Growth: 1.30 %");
    assert_eq!(labels[2], "Moisture: 50.40 %");
}

#[test]
fn test_toggle_window() {
    let mut greenhouse = fixed_greenhouse(1.0);
    let labels = greenhouse.labels();
    assert_eq!(greenhouse.fill(Tag::Window), Fill::Grey);

    greenhouse.toggle_window();
    assert_eq!(greenhouse.fill(Tag::Window), Fill::White);

    greenhouse.toggle_window();
    assert_eq!(greenhouse.fill(Tag::Window), Fill::Grey);

    assert_eq!(greenhouse.labels(), labels);
}

#[test]
fn test_toggle_fan() {
    let mut greenhouse = fixed_greenhouse(1.0);
    assert_eq!(greenhouse.fill(Tag::Fan), Fill::Green);

    assert_eq!(greenhouse.toggle_fan(), FanState::Black);
    assert_eq!(greenhouse.fill(Tag::Fan), Fill::Black);

    assert_eq!(greenhouse.toggle_fan(), FanState::Green);
    assert_eq!(greenhouse.fill(Tag::Fan), Fill::Green);
}

#[test]
fn test_toggles_leave_other_shapes_alone() {
    let mut greenhouse = fixed_greenhouse(1.0);

    greenhouse.toggle_fan();

    assert_eq!(greenhouse.fill(Tag::Window), Fill::Grey);
    assert_eq!(greenhouse.fill(Tag::Light), Fill::Yellow);
    assert_eq!(greenhouse.fill(Tag::Heater), Fill::Red);
    assert_eq!(greenhouse.fill(Tag::WaterPump), Fill::Blue);
    assert_eq!(greenhouse.fill(Tag::TempSensor), Fill::Yellow);
}
