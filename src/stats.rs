//! Decoding, encoding and display of column statistics values.
//!
//! Min/max statistics are stored in the footer as raw bytes in the
//! column's physical representation: little-endian two's complement for
//! integers, IEEE-754 little-endian for floats, big-endian two's
//! complement for fixed-length decimals. Interpreting them requires both
//! the physical type and the logical type of the column.

use std::cmp::Ordering;

use crate::aggregate::LogicalType;

/// How many characters (for strings) or bytes (for hex dumps) a displayed
/// statistics value may occupy before truncation.
const DISPLAY_LIMIT: usize = 256;

/// A statistics value decoded out of its physical byte representation.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Int(i64),
    Decimal { unscaled: i128, scale: i32 },
    Float(f32),
    Double(f64),
    Bool(bool),
    /// Passthrough for types without a numeric interpretation.
    Bytes(Vec<u8>),
}

impl PartialOrd for StatValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (StatValue::Int(a), StatValue::Int(b)) => a.partial_cmp(b),
            (
                StatValue::Decimal { unscaled: a, scale: sa },
                StatValue::Decimal { unscaled: b, scale: sb },
            ) => {
                if sa == sb {
                    a.partial_cmp(b)
                } else {
                    let fa = *a as f64 * 10f64.powi(-sa);
                    let fb = *b as f64 * 10f64.powi(-sb);
                    fa.partial_cmp(&fb)
                }
            }
            (StatValue::Float(a), StatValue::Float(b)) => a.partial_cmp(b),
            (StatValue::Double(a), StatValue::Double(b)) => a.partial_cmp(b),
            (StatValue::Bool(a), StatValue::Bool(b)) => a.partial_cmp(b),
            (StatValue::Bytes(a), StatValue::Bytes(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Little-endian two's-complement integer from up to 8 bytes.
fn le_signed_i64(raw: &[u8]) -> Option<i64> {
    if raw.len() > 8 {
        return None;
    }
    if raw.is_empty() {
        return Some(0);
    }
    let fill = if raw[raw.len() - 1] & 0x80 != 0 { 0xff } else { 0x00 };
    let mut buf = [fill; 8];
    buf[..raw.len()].copy_from_slice(raw);
    Some(i64::from_le_bytes(buf))
}

/// Little-endian two's-complement integer from up to 16 bytes.
fn le_signed_i128(raw: &[u8]) -> Option<i128> {
    if raw.len() > 16 {
        return None;
    }
    if raw.is_empty() {
        return Some(0);
    }
    let fill = if raw[raw.len() - 1] & 0x80 != 0 { 0xff } else { 0x00 };
    let mut buf = [fill; 16];
    buf[..raw.len()].copy_from_slice(raw);
    Some(i128::from_le_bytes(buf))
}

/// Big-endian two's-complement integer from up to 16 bytes.
fn be_signed_i128(raw: &[u8]) -> Option<i128> {
    if raw.len() > 16 {
        return None;
    }
    if raw.is_empty() {
        return Some(0);
    }
    let fill = if raw[0] & 0x80 != 0 { 0xff } else { 0x00 };
    let mut buf = [fill; 16];
    buf[16 - raw.len()..].copy_from_slice(raw);
    Some(i128::from_be_bytes(buf))
}

/// Big-endian two's-complement encoding using the smallest byte length
/// that fits the signed value.
fn be_signed_min_bytes(value: i128) -> Vec<u8> {
    let bit_length = if value == 0 {
        1
    } else {
        128 - value.unsigned_abs().leading_zeros() as usize
    };
    let length = (bit_length / 8 + 1).min(16);
    value.to_be_bytes()[16 - length..].to_vec()
}

/// Interpret raw statistics bytes according to physical and logical type.
/// Payloads whose length does not fit the type pass through as bytes.
pub fn decode_stats_value(
    raw: &[u8],
    physical_type: &str,
    logical_type: Option<&LogicalType>,
) -> StatValue {
    if let Some(LogicalType::Decimal { scale, .. }) = logical_type {
        match physical_type {
            "FIXED_LEN_BYTE_ARRAY" => {
                if let Some(unscaled) = be_signed_i128(raw) {
                    return StatValue::Decimal {
                        unscaled,
                        scale: *scale,
                    };
                }
            }
            "INT32" | "INT64" => {
                if let Some(unscaled) = le_signed_i128(raw) {
                    return StatValue::Decimal {
                        unscaled,
                        scale: *scale,
                    };
                }
            }
            _ => {}
        }
    }
    match physical_type {
        "INT32" | "INT64" => match le_signed_i64(raw) {
            Some(value) => StatValue::Int(value),
            None => StatValue::Bytes(raw.to_vec()),
        },
        "FLOAT" => match <[u8; 4]>::try_from(raw) {
            Ok(bytes) => StatValue::Float(f32::from_le_bytes(bytes)),
            Err(_) => StatValue::Bytes(raw.to_vec()),
        },
        "DOUBLE" => match <[u8; 8]>::try_from(raw) {
            Ok(bytes) => StatValue::Double(f64::from_le_bytes(bytes)),
            Err(_) => StatValue::Bytes(raw.to_vec()),
        },
        "BOOLEAN" => StatValue::Bool(raw.first().is_some_and(|b| *b != 0)),
        _ => StatValue::Bytes(raw.to_vec()),
    }
}

/// Encode a decoded statistics value back into its physical byte
/// representation. Exact inverse of [`decode_stats_value`] for values it
/// produced.
pub fn encode_stats_value(value: &StatValue, physical_type: &str) -> Vec<u8> {
    match value {
        StatValue::Decimal { unscaled, .. } => match physical_type {
            "INT32" => (*unscaled as i32).to_le_bytes().to_vec(),
            "INT64" => (*unscaled as i64).to_le_bytes().to_vec(),
            _ => be_signed_min_bytes(*unscaled),
        },
        StatValue::Int(v) => match physical_type {
            "INT32" => (*v as i32).to_le_bytes().to_vec(),
            _ => v.to_le_bytes().to_vec(),
        },
        StatValue::Float(v) => v.to_le_bytes().to_vec(),
        StatValue::Double(v) => v.to_le_bytes().to_vec(),
        StatValue::Bool(v) => vec![u8::from(*v)],
        StatValue::Bytes(b) => b.clone(),
    }
}

/// Exact decimal rendering of an unscaled value: `12345` at scale 2 is
/// `123.45`.
fn decimal_to_string(unscaled: i128, scale: i32) -> String {
    if scale <= 0 {
        return format!("{}{}", unscaled, "0".repeat((-scale) as usize));
    }
    let scale = scale as usize;
    let sign = if unscaled < 0 { "-" } else { "" };
    let digits = unscaled.unsigned_abs().to_string();
    if digits.len() <= scale {
        format!("{}0.{}{}", sign, "0".repeat(scale - digits.len()), digits)
    } else {
        let (integral, fractional) = digits.split_at(digits.len() - scale);
        format!("{}{}.{}", sign, integral, fractional)
    }
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Human rendering of a statistics value: decoded scalars are printed
/// directly; byte values become UTF-8 text (for STRING columns) or hex,
/// truncated to 256 units with a note about the remainder.
pub fn format_stats_value(
    raw: &[u8],
    physical_type: &str,
    logical_type: Option<&LogicalType>,
) -> String {
    match decode_stats_value(raw, physical_type, logical_type) {
        StatValue::Bytes(bytes) => {
            if matches!(logical_type, Some(LogicalType::String)) {
                let text = String::from_utf8_lossy(&bytes);
                let count = text.chars().count();
                if count <= DISPLAY_LIMIT {
                    text.into_owned()
                } else {
                    let prefix: String = text.chars().take(DISPLAY_LIMIT).collect();
                    format!("{}… ({} more characters)", prefix, count - DISPLAY_LIMIT)
                }
            } else if bytes.len() <= DISPLAY_LIMIT {
                format!("0x{}", hex_string(&bytes))
            } else {
                format!(
                    "0x{}… ({} more bytes)",
                    hex_string(&bytes[..DISPLAY_LIMIT]),
                    bytes.len() - DISPLAY_LIMIT
                )
            }
        }
        StatValue::Int(v) => v.to_string(),
        StatValue::Decimal { unscaled, scale } => decimal_to_string(unscaled, scale),
        StatValue::Float(v) => {
            // Integral floats keep their decimal point: "100.0", not "100".
            if v.is_finite() && v.fract() == 0.0 {
                format!("{:.1}", v)
            } else {
                v.to_string()
            }
        }
        StatValue::Double(v) => {
            if v.is_finite() && v.fract() == 0.0 {
                format!("{:.1}", v)
            } else {
                v.to_string()
            }
        }
        StatValue::Bool(v) => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECIMAL_FIXED: LogicalType = LogicalType::Decimal {
        scale: 2,
        precision: 9,
    };

    #[test]
    fn test_int_round_trips() {
        let raw = 123456i32.to_le_bytes().to_vec();
        let decoded = decode_stats_value(&raw, "INT32", None);
        assert_eq!(decoded, StatValue::Int(123456));
        assert_eq!(encode_stats_value(&decoded, "INT32"), raw);

        let raw = (-7i64).to_le_bytes().to_vec();
        let decoded = decode_stats_value(&raw, "INT64", None);
        assert_eq!(decoded, StatValue::Int(-7));
        assert_eq!(encode_stats_value(&decoded, "INT64"), raw);
    }

    #[test]
    fn test_float_and_double_round_trips() {
        let raw = 1.5f32.to_le_bytes().to_vec();
        let decoded = decode_stats_value(&raw, "FLOAT", None);
        assert_eq!(decoded, StatValue::Float(1.5));
        assert_eq!(encode_stats_value(&decoded, "FLOAT"), raw);

        let raw = (-2.25f64).to_le_bytes().to_vec();
        let decoded = decode_stats_value(&raw, "DOUBLE", None);
        assert_eq!(decoded, StatValue::Double(-2.25));
        assert_eq!(encode_stats_value(&decoded, "DOUBLE"), raw);
    }

    #[test]
    fn test_boolean_round_trip() {
        let decoded = decode_stats_value(&[1], "BOOLEAN", None);
        assert_eq!(decoded, StatValue::Bool(true));
        assert_eq!(encode_stats_value(&decoded, "BOOLEAN"), vec![1]);
        assert_eq!(
            decode_stats_value(&[0], "BOOLEAN", None),
            StatValue::Bool(false)
        );
    }

    #[test]
    fn test_fixed_decimal_round_trip() {
        // 123.45 at scale 2, minimal big-endian form: 0x3039.
        let raw = vec![0x30, 0x39];
        let decoded = decode_stats_value(&raw, "FIXED_LEN_BYTE_ARRAY", Some(&DECIMAL_FIXED));
        assert_eq!(
            decoded,
            StatValue::Decimal {
                unscaled: 12345,
                scale: 2
            }
        );
        assert_eq!(encode_stats_value(&decoded, "FIXED_LEN_BYTE_ARRAY"), raw);

        let raw = vec![0xff];
        let decoded = decode_stats_value(&raw, "FIXED_LEN_BYTE_ARRAY", Some(&DECIMAL_FIXED));
        assert_eq!(
            decoded,
            StatValue::Decimal {
                unscaled: -1,
                scale: 2
            }
        );
        assert_eq!(encode_stats_value(&decoded, "FIXED_LEN_BYTE_ARRAY"), raw);
    }

    #[test]
    fn test_int_decimal_round_trip() {
        let raw = 12345i32.to_le_bytes().to_vec();
        let decoded = decode_stats_value(&raw, "INT32", Some(&DECIMAL_FIXED));
        assert_eq!(
            decoded,
            StatValue::Decimal {
                unscaled: 12345,
                scale: 2
            }
        );
        assert_eq!(encode_stats_value(&decoded, "INT32"), raw);
    }

    #[test]
    fn test_byte_array_passes_through() {
        let raw = b"hello".to_vec();
        let decoded = decode_stats_value(&raw, "BYTE_ARRAY", None);
        assert_eq!(decoded, StatValue::Bytes(raw.clone()));
        assert_eq!(encode_stats_value(&decoded, "BYTE_ARRAY"), raw);
    }

    #[test]
    fn test_mismatched_length_falls_back_to_bytes() {
        assert_eq!(
            decode_stats_value(&[1, 2], "FLOAT", None),
            StatValue::Bytes(vec![1, 2])
        );
        let wide = vec![0u8; 17];
        assert_eq!(
            decode_stats_value(&wide, "FIXED_LEN_BYTE_ARRAY", Some(&DECIMAL_FIXED)),
            StatValue::Bytes(wide.clone())
        );
    }

    #[test]
    fn test_minimal_big_endian_width() {
        assert_eq!(be_signed_min_bytes(0), vec![0x00]);
        assert_eq!(be_signed_min_bytes(1), vec![0x01]);
        assert_eq!(be_signed_min_bytes(-1), vec![0xff]);
        assert_eq!(be_signed_min_bytes(127), vec![0x7f]);
        // 128 needs a sign byte.
        assert_eq!(be_signed_min_bytes(128), vec![0x00, 0x80]);
        assert_eq!(be_signed_min_bytes(-256), vec![0xff, 0x00]);
    }

    #[test]
    fn test_format_string_truncation() {
        let long = "a".repeat(300);
        let formatted = format_stats_value(long.as_bytes(), "BYTE_ARRAY", Some(&LogicalType::String));
        assert!(formatted.starts_with(&"a".repeat(256)));
        assert!(formatted.ends_with("… (44 more characters)"));

        let short = format_stats_value(b"plain", "BYTE_ARRAY", Some(&LogicalType::String));
        assert_eq!(short, "plain");
    }

    #[test]
    fn test_format_binary_hex_truncation() {
        let formatted = format_stats_value(&[0xab, 0xcd], "BYTE_ARRAY", None);
        assert_eq!(formatted, "0xabcd");

        let long = vec![0x11u8; 300];
        let formatted = format_stats_value(&long, "BYTE_ARRAY", None);
        assert!(formatted.starts_with("0x1111"));
        assert!(formatted.ends_with("… (44 more bytes)"));
    }

    #[test]
    fn test_format_scalars() {
        assert_eq!(
            format_stats_value(&5i32.to_le_bytes(), "INT32", None),
            "5"
        );
        assert_eq!(
            format_stats_value(&[0x30, 0x39], "FIXED_LEN_BYTE_ARRAY", Some(&DECIMAL_FIXED)),
            "123.45"
        );
        assert_eq!(
            format_stats_value(&1.5f64.to_le_bytes(), "DOUBLE", None),
            "1.5"
        );
        assert_eq!(
            format_stats_value(&100.0f64.to_le_bytes(), "DOUBLE", None),
            "100.0"
        );
        assert_eq!(
            format_stats_value(&2.0f32.to_le_bytes(), "FLOAT", None),
            "2.0"
        );
        assert_eq!(
            format_stats_value(&(-3.0f64).to_le_bytes(), "DOUBLE", None),
            "-3.0"
        );
        assert_eq!(format_stats_value(&[1], "BOOLEAN", None), "true");
    }

    #[test]
    fn test_decimal_strings() {
        assert_eq!(decimal_to_string(12345, 2), "123.45");
        assert_eq!(decimal_to_string(5, 2), "0.05");
        assert_eq!(decimal_to_string(-5, 2), "-0.05");
        assert_eq!(decimal_to_string(0, 2), "0.00");
        assert_eq!(decimal_to_string(7, 0), "7");
        assert_eq!(decimal_to_string(7, -2), "700");
    }

    #[test]
    fn test_stat_value_ordering() {
        assert!(StatValue::Int(1) < StatValue::Int(2));
        assert!(
            StatValue::Decimal {
                unscaled: 100,
                scale: 2
            } < StatValue::Decimal {
                unscaled: 200,
                scale: 2
            }
        );
        assert!(StatValue::Bytes(b"a".to_vec()) < StatValue::Bytes(b"b".to_vec()));
        assert_eq!(
            StatValue::Int(1).partial_cmp(&StatValue::Bool(true)),
            None
        );
    }
}
