//! Per-kind coercion of raw UI overrides onto declared setting types.
//!
//! Every coercion is total: invalid input falls back to the setting's
//! declared default and emits a warning, never an error.

use serde_json::Value;
use vencfg_domain::catalog::{SettingDescriptor, SettingSpec};
use vencfg_domain::value::{HexColor, SettingValue};

/// Coerces a raw override onto the declared kind of `setting`.
pub(crate) fn coerce_override(
    plugin: &str,
    setting: &SettingDescriptor,
    raw: &Value,
) -> SettingValue {
    match &setting.spec {
        SettingSpec::Checkbox { .. } => SettingValue::Bool(truthy(raw)),
        SettingSpec::Number { default, .. } => match finite_number(raw) {
            Some(n) => SettingValue::Number(n),
            None => {
                tracing::warn!(
                    plugin = %plugin,
                    setting = %setting.name,
                    value = %raw,
                    "invalid numeric override, falling back to default"
                );
                SettingValue::Number(*default)
            }
        },
        SettingSpec::Text { default } => {
            SettingValue::Text(scalar_string(raw).unwrap_or_else(|| default.clone()))
        }
        SettingSpec::Select { default, .. } => {
            SettingValue::Choice(scalar_string(raw).unwrap_or_else(|| default.clone()))
        }
        SettingSpec::Color { default } => {
            let parsed = scalar_string(raw).and_then(|s| HexColor::parse(&s).ok());
            match parsed {
                Some(color) => SettingValue::Color(color),
                None => {
                    tracing::warn!(
                        plugin = %plugin,
                        setting = %setting.name,
                        value = %raw,
                        "invalid color override, falling back to default"
                    );
                    SettingValue::Color(default.clone())
                }
            }
        }
    }
}

/// JS-style truthiness: `false`, `0`, `""`, and `null` are falsy.
fn truthy(raw: &Value) -> bool {
    match raw {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A finite number from either a JSON number or a parseable string.
fn finite_number(raw: &Value) -> Option<f64> {
    let n = match raw {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Casts scalars to their string form; containers and null have none.
fn scalar_string(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn setting(spec: serde_json::Value) -> SettingDescriptor {
        let mut base = json!({ "name": "s", "label": "S:" });
        base.as_object_mut().unwrap().extend(spec.as_object().unwrap().clone());
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn checkbox_uses_truthiness() {
        let s = setting(json!({ "kind": "checkbox", "default": false }));
        assert_eq!(coerce_override("P", &s, &json!(1)), SettingValue::Bool(true));
        assert_eq!(coerce_override("P", &s, &json!("")), SettingValue::Bool(false));
        assert_eq!(coerce_override("P", &s, &json!("false")), SettingValue::Bool(true));
        assert_eq!(coerce_override("P", &s, &Value::Null), SettingValue::Bool(false));
    }

    #[test]
    fn number_parses_strings_and_falls_back() {
        let s = setting(json!({ "kind": "number", "default": 5.0 }));
        assert_eq!(coerce_override("P", &s, &json!("2.5")), SettingValue::Number(2.5));
        assert_eq!(coerce_override("P", &s, &json!(7)), SettingValue::Number(7.0));
        assert_eq!(
            coerce_override("P", &s, &json!("not-a-number")),
            SettingValue::Number(5.0)
        );
        assert_eq!(coerce_override("P", &s, &json!("inf")), SettingValue::Number(5.0));
    }

    #[test]
    fn color_strips_marker_and_falls_back() {
        let s = setting(json!({ "kind": "color", "default": "313338" }));
        assert_eq!(
            coerce_override("P", &s, &json!("#aabbcc")),
            SettingValue::Color(HexColor::parse("aabbcc").unwrap())
        );
        assert_eq!(
            coerce_override("P", &s, &json!("#xyz")),
            SettingValue::Color(HexColor::parse("313338").unwrap())
        );
    }

    #[test]
    fn text_and_select_cast_scalars() {
        let s = setting(json!({ "kind": "text", "default": "dflt" }));
        assert_eq!(coerce_override("P", &s, &json!(12)), SettingValue::Text("12".into()));
        assert_eq!(coerce_override("P", &s, &Value::Null), SettingValue::Text("dflt".into()));

        let s = setting(json!({
            "kind": "select", "default": "a",
            "options": [{ "value": "a", "label": "A" }, { "value": "b", "label": "B" }]
        }));
        assert_eq!(coerce_override("P", &s, &json!("b")), SettingValue::Choice("b".into()));
    }
}
