//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Scan report model (ScanReport, Finding)
//! - Error taxonomy
//! - Bounded first-line reading
//! - Path display conventions
//! - Rendering for the supported output formats

pub mod error;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
