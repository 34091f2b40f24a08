//! Lenient cell parsers for the CSV exports.
//!
//! The exports are produced by dataframe tooling, so the same column can show
//! up as `True`, `1` or `1.0` depending on which tool wrote it last.

use serde::{de::Error, Deserialize, Deserializer};

fn cell<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let raw: Option<String> = Option::deserialize(d)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && !is_null_token(s)))
}

fn is_null_token(s: &str) -> bool {
    matches!(s, "NA" | "NaN" | "nan" | "null" | "None")
}

pub fn parse_flag(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" | "1.0" => Some(true),
        "false" | "f" | "no" | "n" | "0" | "0.0" => Some(false),
        _ => None,
    }
}

/// Accepts `2024` and `2024.0`; rejects fractional years.
pub fn parse_season(s: &str) -> Option<i32> {
    if let Ok(v) = s.parse::<i32>() {
        return Some(v);
    }
    let f: f64 = s.parse().ok()?;
    if f.fract() == 0.0 && f.abs() < i32::MAX as f64 {
        Some(f as i32)
    } else {
        None
    }
}

pub fn opt_bool<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    match cell(d)? {
        None => Ok(None),
        Some(s) => parse_flag(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid flag value '{}'", s))),
    }
}

pub fn opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    match cell(d)? {
        None => Ok(None),
        Some(s) => s
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid number '{}'", s))),
    }
}

pub fn opt_u8<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u8>, D::Error> {
    match cell(d)? {
        None => Ok(None),
        Some(s) => parse_season(&s)
            .and_then(|v| u8::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid period '{}'", s))),
    }
}

pub fn opt_u32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    match cell(d)? {
        None => Ok(None),
        Some(s) => parse_season(&s)
            .and_then(|v| u32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid count '{}'", s))),
    }
}

pub fn opt_season<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
    match cell(d)? {
        None => Ok(None),
        Some(s) => parse_season(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid season '{}'", s))),
    }
}

pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    cell(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_dataframe_spellings() {
        for t in ["True", "true", "1", "1.0", "YES"] {
            assert_eq!(parse_flag(t), Some(true), "{}", t);
        }
        for f in ["False", "0", "0.0", "no"] {
            assert_eq!(parse_flag(f), Some(false), "{}", f);
        }
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn seasons_accept_integral_floats() {
        assert_eq!(parse_season("2024"), Some(2024));
        assert_eq!(parse_season("2024.0"), Some(2024));
        assert_eq!(parse_season("2024.5"), None);
        assert_eq!(parse_season("spring"), None);
    }
}
