use crate::checks::CheckResult;
use crate::config::{CheckerConfig, MANIFEST_FILE};
use serde_json::{Map, Number, Value};
use std::fs;

pub const NAME: &str = "package.json formatting";

/// Canonical form as npm writes it: 2-space indentation, one trailing newline,
/// array-index keys first in ascending order, then the rest in source order,
/// and whole-number floats printed as integers.
pub fn normalize(value: &Value) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(&canonicalize(value))?;
    out.push('\n');
    Ok(out)
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut index_keys: Vec<(u32, &String)> = map
                .keys()
                .filter_map(|key| array_index(key).map(|index| (index, key)))
                .collect();
            index_keys.sort_unstable_by_key(|(index, _)| *index);

            let mut ordered = Map::with_capacity(map.len());
            for (_, key) in &index_keys {
                ordered.insert((*key).clone(), canonicalize(&map[key.as_str()]));
            }
            for (key, item) in map {
                if array_index(key).is_none() {
                    ordered.insert(key.clone(), canonicalize(item));
                }
            }
            Value::Object(ordered)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        Value::Number(number) => Value::Number(integral_number(number)),
        other => other.clone(),
    }
}

/// Canonical decimal below 2^32 - 1, without leading zeros.
fn array_index(key: &str) -> Option<u32> {
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

fn integral_number(number: &Number) -> Number {
    match number.as_f64() {
        Some(f) if number.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f >= i64::MIN as f64 && f < i64::MAX as f64 {
                Number::from(f as i64)
            } else if f >= 0.0 && f < u64::MAX as f64 {
                Number::from(f as u64)
            } else {
                number.clone()
            }
        }
        _ => number.clone(),
    }
}

pub fn check(config: &CheckerConfig) -> CheckResult {
    let raw = match fs::read_to_string(&config.manifest_path) {
        Ok(raw) => raw,
        Err(error) => return read_failure(&error.to_string()),
    };
    check_text(&raw)
}

/// Check manifest text already in memory.
pub fn check_text(raw: &str) -> CheckResult {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(error) => return read_failure(&error.to_string()),
    };

    match normalize(&value) {
        Ok(normalized) if normalized == raw => {}
        Ok(_) => {
            return CheckResult::from_violations(
                NAME,
                vec![format!(
                    "{MANIFEST_FILE} is not formatted with 2-space indentation."
                )],
            )
        }
        Err(error) => return read_failure(&error.to_string()),
    }

    if !value.is_object() {
        return CheckResult::from_violations(
            NAME,
            vec![format!("{MANIFEST_FILE} did not parse into an object.")],
        );
    }

    CheckResult::clean(NAME)
}

fn read_failure(message: &str) -> CheckResult {
    CheckResult::from_violations(
        NAME,
        vec![format!("Failed to read {MANIFEST_FILE}: {message}")],
    )
}
