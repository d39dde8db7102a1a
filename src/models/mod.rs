pub mod compliance;
pub mod label;
pub mod verification;
