use crate::models::label::BeverageCategory;
use crate::services::ttb_standards::CATEGORY_KEYWORDS;

/// Classify label text by keyword presence.
///
/// Case-insensitive substring search over the keyword table; categories are
/// tried in table order (wine, spirits, beer) and the first hit wins.
pub fn detect_category(text: &str) -> BeverageCategory {
    let lower = text.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(BeverageCategory::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_category() {
        assert_eq!(detect_category("Orange MUSCAT 2021"), BeverageCategory::Wine);
        assert_eq!(detect_category("Kentucky Straight BOURBON"), BeverageCategory::Spirits);
        assert_eq!(detect_category("Double IPA"), BeverageCategory::Beer);
    }

    #[test]
    fn test_wine_wins_over_beer() {
        assert_eq!(detect_category("Barrel aged beer from our winery"), BeverageCategory::Wine);
    }

    #[test]
    fn test_spirits_wins_over_beer() {
        assert_eq!(detect_category("Malt whiskey"), BeverageCategory::Spirits);
    }

    #[test]
    fn test_no_keywords_is_unknown() {
        assert_eq!(detect_category("Sparkling water 500 mL"), BeverageCategory::Unknown);
        assert_eq!(detect_category(""), BeverageCategory::Unknown);
    }
}
