//! Per-field comparison of declared label values against recognized text.

use regex::Regex;
use tracing::debug;

use crate::models::label::{DeclaredLabelFields, FieldMatchResult};
use crate::services::fuzzy::fuzzy_match;
use crate::services::normalize::RecognizedText;

pub const BRAND_NAME_FIELD: &str = "Brand Name";
pub const PRODUCT_CLASS_FIELD: &str = "Product Class/Type";
pub const ALCOHOL_CONTENT_FIELD: &str = "Alcohol Content";
pub const NET_CONTENTS_FIELD: &str = "Net Contents";

/// Check every declared field. Net contents is only reported when supplied.
pub fn match_declared_fields(
    declared: &DeclaredLabelFields,
    text: &RecognizedText,
    threshold: f64,
) -> Vec<FieldMatchResult> {
    let observed = text.normalized();
    let mut results = Vec::with_capacity(4);

    results.push(presence_result(BRAND_NAME_FIELD, &declared.brand_name, observed, threshold));
    results.push(presence_result(
        PRODUCT_CLASS_FIELD,
        &declared.product_class,
        observed,
        threshold,
    ));

    let abv_ok = alcohol_content_matches(&declared.alcohol_content, observed);
    results.push(FieldMatchResult::new(
        ALCOHOL_CONTENT_FIELD,
        abv_ok,
        if abv_ok {
            format!("{}% Found", declared.alcohol_content)
        } else {
            "not found".to_string()
        },
    ));

    if let Some(net) = declared.net_contents.as_deref() {
        let net_ok = net_contents_matches(net, observed);
        results.push(FieldMatchResult::new(
            NET_CONTENTS_FIELD,
            net_ok,
            if net_ok {
                format!("{} Found", net)
            } else {
                "not found".to_string()
            },
        ));
    }

    results
}

fn presence_result(field: &str, expected: &str, observed: &str, threshold: f64) -> FieldMatchResult {
    let found = fuzzy_match(expected, observed, threshold);
    let message = if found {
        format!("\"{}\" Found", expected)
    } else {
        format!("\"{}\" not found", expected)
    };
    FieldMatchResult::new(field, found, message)
}

/// Search for a declared ABV in its common label phrasings.
///
/// Accepts the bare number before `%` or whitespace, twice the number as a
/// US proof statement, and the number within a few characters of `alc`,
/// `alcohol` or `vol`. The number must stand alone: `5` does not hit the
/// digits of `45%` or `750 ml`. Trailing zero decimals on the label are
/// tolerated, so a declared `5` matches `5.0%`.
pub fn alcohol_content_matches(declared: &str, observed: &str) -> bool {
    let abv = match parse_abv(declared) {
        Some(v) => v,
        None => {
            debug!(declared, "Alcohol content is not a decimal number");
            return false;
        }
    };

    let number = regex::escape(&abv.to_string());
    let proof = (abv * 2.0) as i64;
    let pattern = format!(
        r"(?i){LEAD}{number}{ZEROS}[\s%]|{LEAD}{proof}\s*proof|alc(?:ohol)?.{{0,{NEAR}}}{LEAD}{number}{TAIL}|{LEAD}{number}{TAIL}.{{0,{NEAR}}}(?:alc|vol)"
    );

    match Regex::new(&pattern) {
        Ok(re) => re.is_match(observed),
        Err(e) => {
            debug!(error = %e, "Could not build alcohol content pattern");
            false
        }
    }
}

// Boundaries that keep a declared number from matching inside a longer one.
const LEAD: &str = r"(?:^|[^\d.])";
const ZEROS: &str = r"(?:\.0+)?";
const TAIL: &str = r"(?:\.0+)?(?:$|[^\d.]|\.(?:$|\D))";

/// Widest gap between the number and an `alc`/`vol` keyword.
const NEAR: usize = 12;

/// Negative percentages are rejected along with NaN and infinities.
fn parse_abv(declared: &str) -> Option<f64> {
    declared
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Whitespace- and case-insensitive containment of the declared net contents.
pub fn net_contents_matches(declared: &str, observed: &str) -> bool {
    let needle: String = declared
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let haystack: String = observed
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    haystack.contains(&needle)
}
