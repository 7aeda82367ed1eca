// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// The stable tags of the shapes drawn on the greenhouse canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Light,
    Heater,
    WaterPump,
    Window,
    Fan,
    TempSensor,
}

impl Tag {
    pub const ALL: [Tag; 6] = [
        Tag::Light,
        Tag::Heater,
        Tag::WaterPump,
        Tag::Window,
        Tag::Fan,
        Tag::TempSensor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Light => "light",
            Tag::Heater => "heater",
            Tag::WaterPump => "water_pump",
            Tag::Window => "window",
            Tag::Fan => "fan",
            Tag::TempSensor => "temp_sensor",
        }
    }
}

/// Fill colors used by the tagged shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    Yellow,
    Red,
    Blue,
    Grey,
    White,
    Green,
    Black,
}

impl Fill {
    pub fn name(self) -> &'static str {
        match self {
            Fill::Yellow => "yellow",
            Fill::Red => "red",
            Fill::Blue => "blue",
            Fill::Grey => "grey",
            Fill::White => "white",
            Fill::Green => "green",
            Fill::Black => "black",
        }
    }

    /// The X11 RGB value of the named color.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Fill::Yellow => (0xff, 0xff, 0x00),
            Fill::Red => (0xff, 0x00, 0x00),
            Fill::Blue => (0x00, 0x00, 0xff),
            Fill::Grey => (0xbe, 0xbe, 0xbe),
            Fill::White => (0xff, 0xff, 0xff),
            Fill::Green => (0x00, 0xff, 0x00),
            Fill::Black => (0x00, 0x00, 0x00),
        }
    }
}

/// State of the greenhouse window shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowShade {
    #[default]
    Grey,
    White,
}

impl WindowShade {
    /// White turns grey, anything else turns white.
    pub fn toggled(self) -> Self {
        match self {
            WindowShade::White => WindowShade::Grey,
            _ => WindowShade::White,
        }
    }

    pub fn fill(self) -> Fill {
        match self {
            WindowShade::Grey => Fill::Grey,
            WindowShade::White => Fill::White,
        }
    }
}

/// State of the fan shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FanState {
    #[default]
    Green,
    Black,
}

impl FanState {
    /// Black turns green, anything else turns black.
    pub fn toggled(self) -> Self {
        match self {
            FanState::Black => FanState::Green,
            _ => FanState::Black,
        }
    }

    pub fn fill(self) -> Fill {
        match self {
            FanState::Green => Fill::Green,
            FanState::Black => Fill::Black,
        }
    }
}

#[test]
fn test_window_shade_toggle() {
    let start = WindowShade::default();
    assert_eq!(start.fill(), Fill::Grey);

    assert_eq!(start.toggled().fill(), Fill::White);
    assert_eq!(start.toggled().toggled(), start);
}

#[test]
fn test_fan_toggle() {
    let start = FanState::default();
    assert_eq!(start.fill(), Fill::Green);

    assert_eq!(start.toggled().fill(), Fill::Black);
    assert_eq!(start.toggled().toggled(), start);
}

#[test]
fn test_tag_names() {
    let names: Vec<_> = Tag::ALL.iter().map(|tag| tag.as_str()).collect();

    assert_eq!(
        names,
        ["light", "heater", "water_pump", "window", "fan", "temp_sensor"]
    );
}
