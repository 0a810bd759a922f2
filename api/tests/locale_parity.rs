use api::locale::get_locale;
use api::locale::LanguageCode;
use serde_json::Value;

/// Reduces a JSON value to its shape: object keys, list lengths and leaf kinds.
fn shape(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), shape(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(shape).collect()),
        Value::String(_) => Value::String("string".into()),
        Value::Number(_) => Value::String("number".into()),
        Value::Bool(_) => Value::String("bool".into()),
        Value::Null => Value::Null,
    }
}

fn locale_json(code: LanguageCode) -> Value {
    serde_json::to_value(get_locale(code)).expect("locale serializes")
}

#[test]
fn every_language_has_the_same_shape() {
    let reference = shape(&locale_json(LanguageCode::ALL[0]));
    for code in LanguageCode::ALL {
        assert_eq!(shape(&locale_json(code)), reference, "shape mismatch for {code}");
    }
}

#[test]
fn no_string_is_left_empty() {
    fn walk(path: &str, value: &Value) {
        match value {
            Value::Object(map) => {
                for (key, value) in map {
                    walk(&format!("{path}.{key}"), value);
                }
            }
            Value::Array(items) => {
                for (i, value) in items.iter().enumerate() {
                    walk(&format!("{path}[{i}]"), value);
                }
            }
            Value::String(s) => assert!(!s.trim().is_empty(), "empty string at {path}"),
            _ => {}
        }
    }

    for code in LanguageCode::ALL {
        walk(code.code(), &locale_json(code));
    }
}

#[test]
fn direction_field_matches_writing_direction() {
    assert_eq!(locale_json(LanguageCode::Fa)["dir"], "rtl");
    assert_eq!(locale_json(LanguageCode::En)["dir"], "ltr");
}

#[test]
fn list_sections_have_expected_lengths() {
    for code in LanguageCode::ALL {
        let locale = get_locale(code);
        assert_eq!(locale.hero.stats.len(), 3);
        assert_eq!(locale.features.items.len(), 4);
        assert_eq!(locale.process.items.len(), 3);
        assert_eq!(locale.services.items.len(), 6);
        assert_eq!(locale.projects.items.len(), 3);
        assert_eq!(locale.about.values.len(), 3);
    }
}
