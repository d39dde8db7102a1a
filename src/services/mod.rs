pub mod category;
pub mod compliance;
pub mod credentials;
pub mod field_match;
pub mod fuzzy;
pub mod normalize;
pub mod ocr;
pub mod ttb_standards;
pub mod validation;
