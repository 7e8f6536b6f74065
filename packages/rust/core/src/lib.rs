//! Document assembly, validation, and batch generation for coursemark.
//!
//! This crate ties the table store and fragment builders together into
//! end-to-end workflows: [`assembler::build_document`] for one category,
//! [`batch::run_batch`] for the whole catalog, and [`validator::validate`]
//! for advisory structural checks on assembled documents.

pub mod assembler;
pub mod batch;
pub mod validator;
