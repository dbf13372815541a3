//! Row Normalizer — turns one raw upstream row into a `CanonicalBusinessRecord`.
//!
//! The upstream view is not under our control: any field may be absent, null,
//! or wrong-typed, and `open_positions` arrives as an array of strings, an
//! array of objects, a comma-separated string, or nothing at all. Every branch
//! here defaults rather than errors, so normalization is total over its input.

use serde_json::Value;

use crate::directory::text::title_case;
use crate::models::business::CanonicalBusinessRecord;

/// Object keys checked (in priority order) when a position entry is an object.
const POSITION_TITLE_KEYS: [&str; 4] = ["title", "name", "position_title", "position"];

/// Normalizes one raw business row. Pure; never panics. A non-object input
/// yields the all-defaults record.
///
/// Policy note: a blank city stays blank here; the grouping engine supplies
/// the "Unknown City" fallback when it builds group keys.
pub fn normalize(raw: &Value) -> CanonicalBusinessRecord {
    let obj = match raw.as_object() {
        Some(obj) => obj,
        None => return CanonicalBusinessRecord::default(),
    };

    let is_hiring = is_truthy(obj.get("is_hiring"));

    CanonicalBusinessRecord {
        name: string_field(obj.get("business_name")),
        city: title_case(&string_field(obj.get("city"))),
        state: string_field(obj.get("state")),
        zip: {
            let zip = string_field(obj.get("zip"));
            (!zip.is_empty()).then_some(zip)
        },
        is_hiring,
        positions: extract_positions(is_hiring, obj.get("open_positions")),
    }
}

/// Coerces a JSON value to a trimmed string. Numbers stringify; everything
/// else (null, bool, arrays, objects, absent) becomes empty.
fn string_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// JS-style truthiness for the `is_hiring` flag: missing, null, `false`, `0`,
/// and `""` are false; anything else is true.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Position extraction over the four upstream shapes. Non-hiring businesses
/// get an empty list regardless of the data; the "No positions listed"
/// fallback belongs to the renderer, not the record.
fn extract_positions(is_hiring: bool, raw: Option<&Value>) -> Vec<String> {
    if !is_hiring {
        return Vec::new();
    }

    match raw {
        Some(Value::Array(items)) => items.iter().filter_map(position_name).collect(),
        Some(Value::String(csv)) => csv
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// One position entry: a plain string, or an object carrying its title under
/// one of several alternative keys.
fn position_name(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Object(map) => POSITION_TITLE_KEYS.iter().find_map(|key| {
            map.get(*key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
        }),
        _ => None,
    }
}
