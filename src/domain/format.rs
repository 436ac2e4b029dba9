// src/domain/format.rs

use serde::Serializer;

/// Whole-dollar currency with thousands separators: `1050000.0` -> `$1,050,000`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${sign}{grouped}")
}

// Largest magnitude where every integer is exact in an f64.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Serialize whole-valued numbers as JSON integers (`800000`, not `800000.0`).
pub fn serialize_whole<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() <= MAX_EXACT_INT => serializer.serialize_i64(*v as i64),
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_none(),
    }
}
