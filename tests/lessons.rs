//! Integration tests for the physics lesson widgets.

use sportsday_scoreboard_web::lessons::{critical_angle_deg, fiber_optics, thermometer};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn freezing_point_on_all_three_scales() {
    let r = thermometer(0.0);
    assert!(close(r.fahrenheit, 32.0));
    assert!(close(r.kelvin, 273.15));
}

#[test]
fn room_temperature_on_all_three_scales() {
    let r = thermometer(25.0);
    assert!(close(r.fahrenheit, 77.0));
    assert!(close(r.kelvin, 298.15));
    assert!(close(r.column_percent, 50.0));
}

#[test]
fn temperature_clamps_to_the_slider_range() {
    let high = thermometer(150.0);
    assert!(close(high.celsius, 100.0));
    assert!(close(high.fahrenheit, 212.0));

    let low = thermometer(-80.0);
    assert!(close(low.celsius, -50.0));
    assert!(close(low.fahrenheit, -58.0));
}

#[test]
fn column_spans_the_drawn_scale() {
    assert!(close(thermometer(-50.0).column_percent, 0.0));
    assert!(close(thermometer(100.0).column_percent, 100.0));
}

#[test]
fn critical_angle_matches_the_demo_fiber() {
    // asin(1.4 / 1.5), just shy of 69 degrees
    assert!((critical_angle_deg() - 68.96).abs() < 0.01);
}

#[test]
fn reflection_is_total_only_past_the_critical_angle() {
    assert!(fiber_optics(69.0).total_internal_reflection);
    assert!(!fiber_optics(60.0).total_internal_reflection);
    // Exactly at the critical angle the ray refracts along the boundary
    assert!(!fiber_optics(critical_angle_deg()).total_internal_reflection);
}

#[test]
fn incidence_clamps_to_a_quarter_turn() {
    let over = fiber_optics(120.0);
    assert!(close(over.incidence_deg, 90.0));
    assert!(over.total_internal_reflection);

    let under = fiber_optics(-5.0);
    assert!(close(under.incidence_deg, 0.0));
    assert!(!under.total_internal_reflection);
}
