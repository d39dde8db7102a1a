//! Regulatory compliance rule table.
//!
//! Each rule is an independent record evaluated uniformly against the
//! recognized text and the category the label is judged under. Rules that
//! only apply to some categories carry an `applies` guard; the report order is
//! the table order.

use crate::models::compliance::ComplianceItem;
use crate::models::label::BeverageCategory;
use crate::services::normalize::{collapse_whitespace, RecognizedText};
use crate::services::ttb_standards::{
    ALCOHOL_STATEMENT_PATTERNS, BRAND_MARKERS, GOVERNMENT_WARNING, NAME_AND_ADDRESS_PATTERN,
    NET_CONTENTS_PATTERN, SPIRITS_CLASSES, SULFITE_MARKER, WINE_DESIGNATIONS,
};

/// Inputs shared by every rule.
pub struct RuleContext<'a> {
    pub text: &'a RecognizedText,
    pub category: BeverageCategory,
}

pub enum RuleDescription {
    Fixed(&'static str),
    /// The upper-cased category under evaluation.
    Category,
}

pub struct ComplianceRule {
    pub item: &'static str,
    pub description: RuleDescription,
    pub citation: &'static str,
    pub applies: fn(&RuleContext) -> bool,
    pub check: fn(&RuleContext) -> bool,
}

impl ComplianceRule {
    fn evaluate(&self, ctx: &RuleContext) -> ComplianceItem {
        let description = match self.description {
            RuleDescription::Fixed(text) => text.to_string(),
            RuleDescription::Category => ctx.category.to_string().to_uppercase(),
        };
        let compliant = (self.check)(ctx);
        ComplianceItem {
            item: self.item.to_string(),
            issue: if compliant {
                String::new()
            } else {
                description.clone()
            },
            description,
            citation: self.citation.to_string(),
            compliant,
        }
    }
}

pub static RULES: &[ComplianceRule] = &[
    ComplianceRule {
        item: "Detected Beverage Type",
        description: RuleDescription::Category,
        citation: "AI + User Input",
        applies: always,
        check: always,
    },
    // Spatial layout is not analysed; bounding regions are not consulted.
    ComplianceRule {
        item: "Same Field of Vision",
        description: RuleDescription::Fixed("Brand, Class/Type, ABV on one side"),
        citation: "27 CFR 5.63",
        applies: always,
        check: always,
    },
    ComplianceRule {
        item: "Brand Name Present",
        description: RuleDescription::Fixed("Name under which product is sold"),
        citation: "27 CFR 5.64",
        applies: always,
        check: has_brand_marker,
    },
    ComplianceRule {
        item: "Wine Designation",
        description: RuleDescription::Fixed("e.g., Orange Muscat"),
        citation: "27 CFR 4.23",
        applies: is_wine,
        check: has_wine_designation,
    },
    ComplianceRule {
        item: "Class/Type (Spirits)",
        description: RuleDescription::Fixed("Must be approved class"),
        citation: "27 CFR 5.141",
        applies: is_not_wine,
        check: has_spirits_class,
    },
    ComplianceRule {
        item: "Alcohol Content Statement",
        description: RuleDescription::Fixed("Any valid format"),
        citation: "27 CFR 5.65",
        applies: always,
        check: has_alcohol_statement,
    },
    ComplianceRule {
        item: "Net Contents Statement",
        description: RuleDescription::Fixed("Volume present"),
        citation: "27 CFR 5.70",
        applies: always,
        check: has_net_contents,
    },
    ComplianceRule {
        item: "Government Health Warning \u{2013} EXACT",
        description: RuleDescription::Fixed("Word-for-word match"),
        citation: "27 CFR Part 16",
        applies: always,
        check: has_exact_warning,
    },
    ComplianceRule {
        item: "Name & Address",
        description: RuleDescription::Fixed("Bottler + city + state"),
        citation: "27 CFR 4.35/5.36",
        applies: always,
        check: has_name_and_address,
    },
    ComplianceRule {
        item: "Sulfite Declaration",
        description: RuleDescription::Fixed("Required if present"),
        citation: "27 CFR 4.32",
        applies: always,
        check: has_sulfite_declaration,
    },
];

/// Run every applicable rule in table order.
pub fn evaluate_compliance(text: &RecognizedText, category: BeverageCategory) -> Vec<ComplianceItem> {
    let ctx = RuleContext { text, category };
    RULES
        .iter()
        .filter(|rule| (rule.applies)(&ctx))
        .map(|rule| rule.evaluate(&ctx))
        .collect()
}

fn always(_: &RuleContext) -> bool {
    true
}

fn is_wine(ctx: &RuleContext) -> bool {
    ctx.category == BeverageCategory::Wine
}

fn is_not_wine(ctx: &RuleContext) -> bool {
    !is_wine(ctx)
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

fn has_brand_marker(ctx: &RuleContext) -> bool {
    contains_any(ctx.text.normalized(), BRAND_MARKERS)
}

fn has_wine_designation(ctx: &RuleContext) -> bool {
    contains_any(ctx.text.normalized(), WINE_DESIGNATIONS)
}

fn has_spirits_class(ctx: &RuleContext) -> bool {
    contains_any(ctx.text.normalized(), SPIRITS_CLASSES)
}

fn has_alcohol_statement(ctx: &RuleContext) -> bool {
    ALCOHOL_STATEMENT_PATTERNS
        .iter()
        .any(|p| p.is_match(ctx.text.raw()))
}

fn has_net_contents(ctx: &RuleContext) -> bool {
    NET_CONTENTS_PATTERN.is_match(ctx.text.normalized())
}

/// Case- and punctuation-exact, only runs of whitespace are collapsed.
fn has_exact_warning(ctx: &RuleContext) -> bool {
    collapse_whitespace(ctx.text.raw()).contains(GOVERNMENT_WARNING)
}

fn has_name_and_address(ctx: &RuleContext) -> bool {
    NAME_AND_ADDRESS_PATTERN.is_match(ctx.text.normalized())
}

fn has_sulfite_declaration(ctx: &RuleContext) -> bool {
    ctx.text.normalized().contains(SULFITE_MARKER)
}
