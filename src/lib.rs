//! Classify failed mobile CI build logs and suggest remediations.
//!
//! The classifier ([`core::classifier::analyze`]) and the command generator
//! ([`fixers::generate_fix_commands`]) are pure; everything else is the
//! driver around them.

pub mod catalog;
pub mod cli;
pub mod core;
pub mod fixers;
pub mod reporters;
pub mod utils;

pub use crate::core::classifier::{analyze, AnalysisResult, Classifier, DetectedIssue};
pub use crate::fixers::generate_fix_commands;
