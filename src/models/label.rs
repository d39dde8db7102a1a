use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Beverage category as declared on the verification form.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, EnumString, Display, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DeclaredCategory {
    Wine,
    Spirits,
    Beer,
    #[default]
    Auto,
}

/// Beverage category a label is evaluated under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, Display, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BeverageCategory {
    Wine,
    Spirits,
    Beer,
    Unknown,
}

impl DeclaredCategory {
    /// The concrete category for a declaration, or `None` for `auto`.
    pub fn explicit(self) -> Option<BeverageCategory> {
        match self {
            DeclaredCategory::Wine => Some(BeverageCategory::Wine),
            DeclaredCategory::Spirits => Some(BeverageCategory::Spirits),
            DeclaredCategory::Beer => Some(BeverageCategory::Beer),
            DeclaredCategory::Auto => None,
        }
    }
}

/// Label fields asserted by the applicant.
#[derive(Debug, Clone)]
pub struct DeclaredLabelFields {
    pub brand_name: String,
    pub product_class: String,
    /// Kept as text; a value that does not parse is a mismatch, not an error.
    pub alcohol_content: String,
    pub net_contents: Option<String>,
    pub category: DeclaredCategory,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Match,
    Mismatch,
}

/// Outcome of checking one declared field against the recognized text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMatchResult {
    pub field: String,
    pub status: MatchStatus,
    pub message: String,
}

impl FieldMatchResult {
    pub fn new(field: &str, matched: bool, message: String) -> Self {
        Self {
            field: field.to_string(),
            status: if matched {
                MatchStatus::Match
            } else {
                MatchStatus::Mismatch
            },
            message,
        }
    }

    pub fn is_match(&self) -> bool {
        self.status == MatchStatus::Match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_declared_category_parses_case_insensitively() {
        assert_eq!(DeclaredCategory::from_str("Wine").unwrap(), DeclaredCategory::Wine);
        assert_eq!(DeclaredCategory::from_str("AUTO").unwrap(), DeclaredCategory::Auto);
        assert!(DeclaredCategory::from_str("cider").is_err());
    }

    #[test]
    fn test_auto_has_no_explicit_category() {
        assert_eq!(DeclaredCategory::Auto.explicit(), None);
        assert_eq!(DeclaredCategory::Beer.explicit(), Some(BeverageCategory::Beer));
    }

    #[test]
    fn test_match_status_serializes_lowercase() {
        let result = FieldMatchResult::new("Brand Name", false, "not found".to_string());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "mismatch");
        assert_eq!(json["field"], "Brand Name");
    }
}
