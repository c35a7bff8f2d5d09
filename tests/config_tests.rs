// Host-side tests for configuration defaults and key/value parsing.

use swirl_core::constants::MAX_DENSITY;
use swirl_core::*;

fn text(s: &str) -> ConfigValue {
    ConfigValue::Text(s.to_string())
}

#[test]
fn defaults_match_documented_values() {
    let c = SwirlConfig::default();
    assert_eq!(c.speed, 1.0);
    assert_eq!(c.density, 7);
    assert_eq!(c.glow, 1.0);
    assert!(c.respect_reduced_motion);
    assert_eq!(c.y_bias, 0.5);
    assert!(c.fixed);
    assert_eq!(c.strategy(), SizingStrategy::Viewport);
}

#[test]
fn attribute_text_is_parsed() {
    let (c, errors) = SwirlConfig::from_entries([
        ("speed", text("1.4")),
        ("density", text(" 6 ")),
        ("glow", text("0.5")),
        ("y-bias", text("0.28")),
        ("fixed", text("false")),
        ("respect-reduced-motion", text("no")),
    ]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(c.speed, 1.4);
    assert_eq!(c.density, 6);
    assert_eq!(c.glow, 0.5);
    assert_eq!(c.y_bias, 0.28);
    assert!(!c.fixed);
    assert!(!c.respect_reduced_motion);
    assert_eq!(c.strategy(), SizingStrategy::Container);
}

#[test]
fn js_values_are_accepted_by_camel_case_key() {
    let (c, errors) = SwirlConfig::from_entries([
        ("yBias", ConfigValue::Number(0.22)),
        ("respectReducedMotion", ConfigValue::Bool(false)),
        ("density", ConfigValue::Number(9.8)),
    ]);
    assert!(errors.is_empty());
    assert_eq!(c.y_bias, 0.22);
    assert!(!c.respect_reduced_motion);
    assert_eq!(c.density, 9);
}

#[test]
fn bare_boolean_attribute_means_true() {
    let mut c = SwirlConfig {
        fixed: false,
        ..SwirlConfig::default()
    };
    c.set("fixed", text("")).unwrap();
    assert!(c.fixed);
}

#[test]
fn bad_entries_keep_defaults_and_are_reported() {
    let (c, errors) = SwirlConfig::from_entries([
        ("speed", text("fast")),
        ("glow", ConfigValue::Number(-1.0)),
        ("fixed", text("maybe")),
        ("density", ConfigValue::Bool(true)),
        ("colour", text("red")),
        ("yBias", ConfigValue::Number(f64::NAN)),
    ]);
    assert_eq!(c, SwirlConfig::default());
    assert_eq!(errors.len(), 6);
    assert!(matches!(errors[0], ConfigError::InvalidNumber { key: "speed", .. }));
    assert!(matches!(errors[1], ConfigError::OutOfRange { key: "glow", .. }));
    assert!(matches!(errors[2], ConfigError::InvalidBool { key: "fixed", .. }));
    assert!(matches!(errors[3], ConfigError::InvalidNumber { key: "density", .. }));
    assert_eq!(errors[4], ConfigError::UnknownKey("colour".into()));
    assert!(matches!(errors[5], ConfigError::OutOfRange { key: "yBias", .. }));
}

#[test]
fn density_is_capped() {
    let mut c = SwirlConfig::default();
    c.set("density", ConfigValue::Number(500.0)).unwrap();
    assert_eq!(c.density, MAX_DENSITY);
}

#[test]
fn out_of_range_y_bias_is_kept_but_clamped_on_use() {
    let mut c = SwirlConfig::default();
    c.set("yBias", ConfigValue::Number(3.0)).unwrap();
    assert_eq!(c.y_bias, 3.0);
    assert_eq!(c.y_bias_clamped(), 1.0);
    c.set("y-bias", text("-0.4")).unwrap();
    assert_eq!(c.y_bias_clamped(), 0.0);
}

#[test]
fn keys_round_trip_through_both_spellings() {
    for key in ConfigKey::ALL {
        assert_eq!(ConfigKey::parse(key.js_name()), Some(key));
        let attr = key.attr_name().strip_prefix("data-").unwrap();
        assert_eq!(ConfigKey::parse(attr), Some(key));
    }
}

#[test]
fn errors_render_readable_messages() {
    let e = ConfigError::InvalidNumber {
        key: "speed",
        value: "fast".into(),
    };
    assert_eq!(e.to_string(), "`speed` expects a number, got `fast`");
}
