use serde::Deserialize;
use std::fmt;

// Integral floats beyond this print in exponent form in a browser; keep them as-is.
const MAX_INTEGRAL_DISPLAY: f64 = 1e15;

/// A product price as sent by the endpoint: either a JSON number or a
/// preformatted string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => formatter.write_str(text),
            Self::Number(number) => {
                if number.is_i64() || number.is_u64() {
                    return write!(formatter, "{number}");
                }

                match number.as_f64() {
                    Some(value) if value.fract() == 0.0 && value.abs() < MAX_INTEGRAL_DISPLAY => {
                        write!(formatter, "{value:.0}")
                    }
                    Some(value) => write!(formatter, "{value}"),
                    None => write!(formatter, "{number}"),
                }
            }
        }
    }
}

impl From<&str> for Price {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}
