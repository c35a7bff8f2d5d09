use swirl_core::{ConfigKey, ConfigValue, SwirlConfig};
use wasm_bindgen::JsValue;
use web_sys as web;

fn to_config_value(v: &JsValue) -> Option<ConfigValue> {
    if v.is_undefined() || v.is_null() {
        None
    } else if let Some(n) = v.as_f64() {
        Some(ConfigValue::Number(n))
    } else if let Some(b) = v.as_bool() {
        Some(ConfigValue::Bool(b))
    } else if let Some(s) = v.as_string() {
        Some(ConfigValue::Text(s))
    } else {
        Some(ConfigValue::Text(format!("{:?}", v)))
    }
}

fn build<'a>(entries: impl IntoIterator<Item = (&'a str, ConfigValue)>) -> SwirlConfig {
    let (cfg, errors) = SwirlConfig::from_entries(entries);
    for e in errors {
        log::warn!("[config] {}; using default", e);
    }
    cfg
}

/// Read `{ speed, density, glow, respectReducedMotion, yBias, fixed }` from a
/// JS object. `undefined`, `null` and non-objects give the defaults.
pub fn from_js(value: &JsValue) -> SwirlConfig {
    if !value.is_object() {
        return SwirlConfig::default();
    }
    build(ConfigKey::ALL.iter().filter_map(|k| {
        let v = js_sys::Reflect::get(value, &JsValue::from_str(k.js_name())).ok()?;
        to_config_value(&v).map(|cv| (k.js_name(), cv))
    }))
}

/// Read `data-speed`, `data-y-bias`, ... from an element.
pub fn from_attributes(el: &web::Element) -> SwirlConfig {
    build(ConfigKey::ALL.iter().filter_map(|k| {
        el.get_attribute(k.attr_name())
            .map(|v| (k.js_name(), ConfigValue::Text(v)))
    }))
}
