// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Toolkit independent model of the smart greenhouse.
//!
//! Everything the window shows is derived from a [`Greenhouse`]: the label texts, the fill of
//! every tagged shape and the clock text. The desktop app only forwards button clicks and timer
//! ticks into it and copies the results into the UI.

mod clock;
mod config;
mod greenhouse;
mod increments;
mod scene;
mod sensor;

pub use clock::{clock_text, local_clock_text, CLOCK_FORMAT};
pub use config::{GreenhouseConfig, Increments};
pub use greenhouse::Greenhouse;
pub use increments::{FixedIncrements, IncrementSource, RandomIncrements, Span};
pub use scene::{FanState, Fill, Tag, WindowShade};
pub use sensor::{Reading, SensorReadings};
