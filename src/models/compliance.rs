use serde::{Deserialize, Serialize};

use super::label::{BeverageCategory, FieldMatchResult};

/// Result of one regulatory rule check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub item: String,
    pub description: String,
    pub citation: String,
    pub compliant: bool,
    /// Empty when compliant.
    pub issue: String,
}

/// Full verdict returned for a verified label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelReport {
    pub is_match: bool,
    pub details: Vec<FieldMatchResult>,
    pub extracted_text: String,
    pub compliance_report: Vec<ComplianceItem>,
    pub detected_category: BeverageCategory,
}

impl LabelReport {
    pub fn non_compliant_count(&self) -> usize {
        self.compliance_report.iter().filter(|c| !c.compliant).count()
    }
}
