//! Physics lesson widgets: a thermometer scale converter and a fiber-optic
//! ray model. Pure math for the lessons page; nothing here touches the board.

use serde::{Deserialize, Serialize};

/// Thermometer slider range, degrees Celsius.
pub const MIN_CELSIUS: f64 = -50.0;
pub const MAX_CELSIUS: f64 = 100.0;

/// Refractive indices of the demo fiber.
pub const CORE_INDEX: f64 = 1.5;
pub const CLADDING_INDEX: f64 = 1.4;

/// One temperature on all three scales, plus how far up the drawn column the
/// liquid sits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThermometerReading {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
    /// Fill level of the thermometer column, 0 to 100.
    pub column_percent: f64,
}

/// Convert a Celsius temperature, clamping the input to the slider range.
pub fn thermometer(celsius: f64) -> ThermometerReading {
    let c = celsius.clamp(MIN_CELSIUS, MAX_CELSIUS);
    ThermometerReading {
        celsius: c,
        fahrenheit: c * 9.0 / 5.0 + 32.0,
        kelvin: c + 273.15,
        column_percent: ((c - MIN_CELSIUS) / (MAX_CELSIUS - MIN_CELSIUS) * 100.0).clamp(0.0, 100.0),
    }
}

/// A ray hitting the core-cladding boundary: does it stay in the core?
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FiberReading {
    pub incidence_deg: f64,
    pub critical_deg: f64,
    pub total_internal_reflection: bool,
}

/// Critical angle of the demo fiber, in degrees.
pub fn critical_angle_deg() -> f64 {
    (CLADDING_INDEX / CORE_INDEX).asin().to_degrees()
}

/// Evaluate a ray at the given incidence angle (clamped to 0..=90 degrees).
/// Reflection is total strictly past the critical angle.
pub fn fiber_optics(incidence_deg: f64) -> FiberReading {
    let angle = incidence_deg.clamp(0.0, 90.0);
    let critical = critical_angle_deg();
    FiberReading {
        incidence_deg: angle,
        critical_deg: critical,
        total_internal_reflection: angle > critical,
    }
}
