//! TTB labeling reference data.
//!
//! Based on 27 CFR Part 4 (Wine), Part 5 (Distilled Spirits), Part 7 (Malt
//! Beverages) and Part 16 (Health Warning Statement). Used by the category
//! detector and the compliance rule table.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::label::BeverageCategory;

// ── Health Warning Statement (27 CFR 16.21) ─────────────────────────────

/// Mandatory warning text. Must appear verbatim on the label.
pub const GOVERNMENT_WARNING: &str = concat!(
    "GOVERNMENT WARNING: (1) According to the Surgeon General, women should not drink alcoholic beverages ",
    "during pregnancy because of the risk of birth defects. (2) Consumption of alcoholic beverages impairs your ",
    "ability to drive a car or operate machinery, and may cause health problems."
);

// ── Category Keywords ────────────────────────────────────────────────────

pub const WINE_KEYWORDS: &[&str] = &[
    "wine", "winery", "vineyard", "vintage", "muscat", "riesling", "cabernet", "pinot",
];

pub const SPIRITS_KEYWORDS: &[&str] = &[
    "whiskey",
    "bourbon",
    "vodka",
    "gin",
    "rum",
    "tequila",
    "brandy",
    "liqueur",
    "spirit",
    "distilled",
    "distillery",
];

pub const BEER_KEYWORDS: &[&str] = &["beer", "brewery", "ale", "lager", "ipa", "malt"];

/// Keyword set per category, in evaluation order. The first category with any
/// keyword present wins.
pub const CATEGORY_KEYWORDS: &[(BeverageCategory, &[&str])] = &[
    (BeverageCategory::Wine, WINE_KEYWORDS),
    (BeverageCategory::Spirits, SPIRITS_KEYWORDS),
    (BeverageCategory::Beer, BEER_KEYWORDS),
];

// ── Mandatory Label Statements ───────────────────────────────────────────

/// Words indicating a producer name on the brand line (27 CFR 5.64).
pub const BRAND_MARKERS: &[&str] = &["distillery", "winery", "estate"];

/// Wine designation stand-in (27 CFR 4.23).
pub const WINE_DESIGNATIONS: &[&str] = &["muscat"];

/// Spirits class names accepted by the class/type rule (27 CFR 5.141).
pub const SPIRITS_CLASSES: &[&str] = &["bourbon", "whiskey"];

/// Alcohol content phrasings (27 CFR 5.65), matched case-insensitively on raw text.
pub static ALCOHOL_STATEMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)alcohol\s+[\d.]+\s*%?\s*by\s+volume",
        r"(?i)alc\.?\s*/?\s*vol\.?",
        r"(?i)alc\.?\s*/?\s*vol\.?\s*[\d.]+\s*%",
        r"(?i)[\d.]+\s*%.*?(alc|vol|alcohol)",
        r"(?i)alc.*?\d+(\.\d+)?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("alcohol statement pattern is valid"))
    .collect()
});

/// A quantity followed by a volume unit (27 CFR 5.70).
pub static NET_CONTENTS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\s*(ml|l|liter|oz|fl\.?\s*oz)").expect("net contents pattern is valid")
});

/// Bottler/producer statement followed by a city and two-letter state (27 CFR 4.35, 5.36).
pub static NAME_AND_ADDRESS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(bottled|produced|vinted|winery|estate).*,\s*[A-Za-z]{2}\b")
        .expect("name and address pattern is valid")
});

/// Sulfite declaration keyword (27 CFR 4.32).
pub const SULFITE_MARKER: &str = "sulfite";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_is_single_spaced() {
        assert!(!GOVERNMENT_WARNING.contains("  "));
        assert!(GOVERNMENT_WARNING.starts_with("GOVERNMENT WARNING: (1)"));
        assert!(GOVERNMENT_WARNING.ends_with("may cause health problems."));
    }

    #[test]
    fn test_alcohol_patterns_cover_common_phrasings() {
        let hits = |text: &str| ALCOHOL_STATEMENT_PATTERNS.iter().any(|p| p.is_match(text));
        assert!(hits("Alcohol 14 by volume"));
        assert!(hits("ALC./VOL."));
        assert!(hits("alc/vol 14%"));
        assert!(hits("13.5% Alc by Vol"));
        assert!(!hits("Product of Kentucky"));
    }

    #[test]
    fn test_net_contents_units() {
        assert!(NET_CONTENTS_PATTERN.is_match("750 ml"));
        assert!(NET_CONTENTS_PATTERN.is_match("12 fl. oz"));
        assert!(NET_CONTENTS_PATTERN.is_match("1.75l"));
        assert!(!NET_CONTENTS_PATTERN.is_match("seven fifty"));
    }

    #[test]
    fn test_name_and_address_requires_state() {
        assert!(NAME_AND_ADDRESS_PATTERN.is_match("bottled by old tom distillery, bardstown, ky"));
        assert!(!NAME_AND_ADDRESS_PATTERN.is_match("bottled by old tom distillery"));
    }
}
