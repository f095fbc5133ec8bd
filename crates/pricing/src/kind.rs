//! Modifier classification.

use serde::{Deserialize, Serialize};

/// Tag for modifiers that add tax.
pub const TYPE_TAX: &str = "tax";

/// Tag for modifiers that reduce the price.
pub const TYPE_DISCOUNT: &str = "discount";

/// Tag for everything else, and the fallback when no type is given.
pub const TYPE_UNDEFINED: &str = "other";

/// What kind of adjustment a modifier represents.
///
/// Owners branch on the string tag, so [`ModifierType::as_str`] always
/// yields one of the stable tags or the caller's own non-empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModifierType {
    Tax,
    Discount,
    #[default]
    Other,
    /// A caller-defined classification.
    Custom(String),
}

impl ModifierType {
    /// Returns the classification tag.
    pub fn as_str(&self) -> &str {
        match self {
            ModifierType::Tax => TYPE_TAX,
            ModifierType::Discount => TYPE_DISCOUNT,
            ModifierType::Other => TYPE_UNDEFINED,
            ModifierType::Custom(s) if s.is_empty() || s == "0" => TYPE_UNDEFINED,
            ModifierType::Custom(s) => s,
        }
    }

    pub fn is_tax(&self) -> bool {
        self.as_str() == TYPE_TAX
    }

    pub fn is_discount(&self) -> bool {
        self.as_str() == TYPE_DISCOUNT
    }

    /// Returns a bounded label for metrics.
    ///
    /// Caller-defined classifications collapse to `custom`.
    pub fn metric_label(&self) -> &'static str {
        match self.as_str() {
            TYPE_TAX => TYPE_TAX,
            TYPE_DISCOUNT => TYPE_DISCOUNT,
            TYPE_UNDEFINED => TYPE_UNDEFINED,
            _ => "custom",
        }
    }
}

impl std::fmt::Display for ModifierType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ModifierType {
    fn from(s: &str) -> Self {
        match s {
            // "0" is treated as unset alongside the empty string.
            "" | "0" | TYPE_UNDEFINED => ModifierType::Other,
            TYPE_TAX => ModifierType::Tax,
            TYPE_DISCOUNT => ModifierType::Discount,
            custom => ModifierType::Custom(custom.to_string()),
        }
    }
}

impl From<String> for ModifierType {
    fn from(s: String) -> Self {
        if matches!(s.as_str(), "" | "0" | TYPE_UNDEFINED | TYPE_TAX | TYPE_DISCOUNT) {
            ModifierType::from(s.as_str())
        } else {
            ModifierType::Custom(s)
        }
    }
}

impl<T: Into<ModifierType>> From<Option<T>> for ModifierType {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl From<ModifierType> for String {
    fn from(kind: ModifierType) -> Self {
        match kind {
            ModifierType::Custom(s) if !s.is_empty() && s != "0" => s,
            other => other.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_parse_to_variants() {
        assert_eq!(ModifierType::from("tax"), ModifierType::Tax);
        assert_eq!(ModifierType::from("discount"), ModifierType::Discount);
        assert_eq!(ModifierType::from("other"), ModifierType::Other);
    }

    #[test]
    fn test_empty_and_missing_fall_back_to_other() {
        assert_eq!(ModifierType::from(""), ModifierType::Other);
        assert_eq!(ModifierType::from(String::new()), ModifierType::Other);
        assert_eq!(ModifierType::from(None::<&str>), ModifierType::Other);
        assert_eq!(ModifierType::Custom(String::new()).as_str(), "other");
    }

    #[test]
    fn test_zero_string_reads_as_other() {
        assert_eq!(ModifierType::from("0"), ModifierType::Other);
        assert_eq!(ModifierType::from("0".to_string()), ModifierType::Other);
        assert_eq!(ModifierType::Custom("0".to_string()).as_str(), "other");
        assert_eq!(ModifierType::from("00").as_str(), "00");
    }

    #[test]
    fn test_custom_with_reserved_tag_behaves_like_variant() {
        let tax = ModifierType::Custom("tax".to_string());
        assert!(tax.is_tax());
        assert_eq!(tax.metric_label(), "tax");

        let discount = ModifierType::Custom("discount".to_string());
        assert!(discount.is_discount());
        assert!(!discount.is_tax());
    }

    #[test]
    fn test_metric_label_is_bounded() {
        assert_eq!(ModifierType::Tax.metric_label(), "tax");
        assert_eq!(ModifierType::Discount.metric_label(), "discount");
        assert_eq!(ModifierType::Other.metric_label(), "other");
        assert_eq!(ModifierType::from("gift wrap").metric_label(), "custom");
        assert_eq!(ModifierType::Custom(String::new()).metric_label(), "other");
    }

    #[test]
    fn test_custom_tags_are_kept_verbatim() {
        let kind = ModifierType::from("Shipping Fee");
        assert_eq!(kind, ModifierType::Custom("Shipping Fee".to_string()));
        assert_eq!(kind.as_str(), "Shipping Fee");
        assert_eq!(kind.to_string(), "Shipping Fee");
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert_eq!(ModifierType::from("TAX"), ModifierType::Custom("TAX".to_string()));
    }

    #[test]
    fn test_serde_uses_plain_tag() {
        assert_eq!(serde_json::to_string(&ModifierType::Tax).unwrap(), "\"tax\"");

        let kind: ModifierType = serde_json::from_str("\"discount\"").unwrap();
        assert!(kind.is_discount());

        let kind: ModifierType = serde_json::from_str("\"handling\"").unwrap();
        assert_eq!(kind.as_str(), "handling");
    }
}
