use tracing::debug;

use crate::models::compliance::LabelReport;
use crate::models::label::DeclaredLabelFields;
use crate::services::category::detect_category;
use crate::services::compliance::evaluate_compliance;
use crate::services::field_match::match_declared_fields;
use crate::services::normalize::RecognizedText;

/// Verify recognized label text against the applicant's declared fields.
///
/// Performs:
/// - Fuzzy brand name and class/type matching
/// - Alcohol content matching (percent, proof and alc/vol phrasings)
/// - Net contents matching, when declared
/// - The TTB compliance rule table, under the declared category or the
///   detected one when the declaration is `auto`
///
/// Pure and synchronous; the OCR call happens before this runs.
pub fn verify_label(raw_text: &str, declared: &DeclaredLabelFields, threshold: f64) -> LabelReport {
    let text = RecognizedText::new(raw_text);

    let details = match_declared_fields(declared, &text, threshold);
    let is_match = details.iter().all(|d| d.is_match());

    let detected_category = detect_category(text.raw());
    let evaluated_category = declared.category.explicit().unwrap_or(detected_category);
    let compliance_report = evaluate_compliance(&text, evaluated_category);

    debug!(
        is_match,
        detected = %detected_category,
        evaluated = %evaluated_category,
        "Label evaluated"
    );

    LabelReport {
        is_match,
        details,
        extracted_text: text.normalized().to_string(),
        compliance_report,
        detected_category,
    }
}
