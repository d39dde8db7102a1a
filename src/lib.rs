//! TTB Label Compliance Checker
//!
//! Accepts a beverage label image with the applicant's declared fields, runs
//! Google Cloud Vision OCR on the image, and checks the recognized text
//! against the declared values and the federal label rules.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
