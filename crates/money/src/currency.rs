//! Currency codes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MoneyError;

/// A three-letter currency code such as `USD`.
///
/// Codes are stored upper-cased. No registry lookup is performed: any
/// three ASCII letters form a valid code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency([u8; 3]);

impl Currency {
    /// United States dollar.
    pub const USD: Currency = Currency(*b"USD");

    /// Euro.
    pub const EUR: Currency = Currency(*b"EUR");

    /// Pound sterling.
    pub const GBP: Currency = Currency(*b"GBP");

    /// Parses a currency code, accepting any letter case.
    pub fn new(code: &str) -> crate::Result<Self> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(MoneyError::InvalidCurrency(code.to_string()));
        }

        Ok(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Always ASCII: every constructor validates the bytes.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for Currency {
    type Error = MoneyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.as_str().to_string()
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case() {
        let currency: Currency = "usd".parse().unwrap();
        assert_eq!(currency, Currency::USD);
        assert_eq!(currency.as_str(), "USD");
    }

    #[test]
    fn parse_rejects_bad_codes() {
        for code in ["", "US", "USDX", "U$D", "12A"] {
            assert_eq!(
                Currency::new(code),
                Err(MoneyError::InvalidCurrency(code.to_string())),
                "{code:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(Currency::EUR.to_string(), "EUR");
        assert_eq!(Currency::new("chf").unwrap().to_string(), "CHF");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Currency::GBP).unwrap();
        assert_eq!(json, "\"GBP\"");

        let parsed: Currency = serde_json::from_str("\"jpy\"").unwrap();
        assert_eq!(parsed.as_str(), "JPY");

        assert!(serde_json::from_str::<Currency>("\"dollars\"").is_err());
    }
}
