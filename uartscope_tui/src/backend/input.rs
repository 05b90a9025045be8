use std::str::FromStr;

use serde::Deserialize;

pub const RANGE_ERROR: &str = "Data must be between 0 and 255.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Hex,
    #[serde(alias = "bin")]
    Binary,
    #[serde(alias = "dec")]
    Decimal,
}

impl InputFormat {
    pub fn radix(&self) -> u32 {
        match self {
            InputFormat::Hex => 16,
            InputFormat::Binary => 2,
            InputFormat::Decimal => 10,
        }
    }

    fn prefix(&self) -> Option<&'static str> {
        match self {
            InputFormat::Hex => Some("0x"),
            InputFormat::Binary => Some("0b"),
            InputFormat::Decimal => None,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            InputFormat::Hex => InputFormat::Binary,
            InputFormat::Binary => InputFormat::Decimal,
            InputFormat::Decimal => InputFormat::Hex,
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Hex => f.write_str("Hex"),
            InputFormat::Binary => f.write_str("Binary"),
            InputFormat::Decimal => f.write_str("Decimal"),
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(InputFormat::Hex),
            "binary" | "bin" => Ok(InputFormat::Binary),
            "decimal" | "dec" => Ok(InputFormat::Decimal),
            _ => Err(format!(
                "unknown format \"{s}\" (expected hex, binary or decimal)"
            )),
        }
    }
}

/// Parses `text` in the given base. The matching `0x`/`0b` prefix, a sign and
/// `_` separators are accepted. No range check is done here.
pub fn parse_data(text: &str, format: InputFormat) -> Result<i64, String> {
    let invalid = || format!("invalid {} value \"{}\"", format, text.trim());
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = match format.prefix() {
        Some(prefix) => strip_prefix_ignore_case(unsigned, prefix),
        None => unsigned,
    };
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return Err(invalid());
    }
    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    if !digits.chars().all(|c| c.is_digit(format.radix())) {
        return Err(invalid());
    }
    let value = i64::from_str_radix(&digits, format.radix())
        .map_err(|_| format!("{} value \"{}\" is too large", format, trimmed))?;
    Ok(if negative { -value } else { value })
}

pub fn to_byte(value: i64) -> Result<u8, String> {
    u8::try_from(value).map_err(|_| RANGE_ERROR.to_string())
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> &'a str {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &s[prefix.len()..],
        _ => s,
    }
}

#[cfg(test)]
mod test {
    use super::{parse_data, to_byte, InputFormat, RANGE_ERROR};

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_data("0x41", InputFormat::Hex), Ok(65));
        assert_eq!(parse_data("0X41", InputFormat::Hex), Ok(65));
        assert_eq!(parse_data("41", InputFormat::Hex), Ok(65));
        assert_eq!(parse_data(" ff ", InputFormat::Hex), Ok(255));
        assert_eq!(parse_data("0x1_00", InputFormat::Hex), Ok(256));
    }

    #[test]
    fn test_parse_binary() {
        assert_eq!(parse_data("01000001", InputFormat::Binary), Ok(65));
        assert_eq!(parse_data("0b101", InputFormat::Binary), Ok(5));
        assert!(parse_data("0102", InputFormat::Binary).is_err());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_data("65", InputFormat::Decimal), Ok(65));
        assert_eq!(parse_data("-3", InputFormat::Decimal), Ok(-3));
        assert_eq!(parse_data("+7", InputFormat::Decimal), Ok(7));
        assert!(parse_data("0x41", InputFormat::Decimal).is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_data("zz", InputFormat::Hex),
            Err("invalid Hex value \"zz\"".to_string())
        );
        assert!(parse_data("", InputFormat::Decimal).is_err());
        assert!(parse_data("0x", InputFormat::Hex).is_err());
        assert!(parse_data("0x-5", InputFormat::Hex).is_err());
        assert!(parse_data("_1", InputFormat::Decimal).is_err());
        assert!(parse_data("99999999999999999999", InputFormat::Decimal).is_err());
    }

    #[test]
    fn test_to_byte() {
        assert_eq!(to_byte(0), Ok(0));
        assert_eq!(to_byte(255), Ok(255));
        assert_eq!(to_byte(256), Err(RANGE_ERROR.to_string()));
        assert_eq!(to_byte(-1), Err(RANGE_ERROR.to_string()));
    }

    #[test]
    fn test_format_names() {
        assert_eq!("HEX".parse::<InputFormat>(), Ok(InputFormat::Hex));
        assert_eq!("bin".parse::<InputFormat>(), Ok(InputFormat::Binary));
        assert_eq!("decimal".parse::<InputFormat>(), Ok(InputFormat::Decimal));
        assert!("octal".parse::<InputFormat>().is_err());
        assert_eq!(InputFormat::Decimal.next(), InputFormat::Hex);
        assert_eq!(InputFormat::Binary.to_string(), "Binary");
    }
}
