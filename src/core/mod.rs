//! Core module - the vCard record model and its supporting pieces
//!
//! This module provides:
//! - Line unfolding and record segmentation
//! - Property extraction (categories, display name, telephone numbers)
//! - Corpus reading with skip-and-warn semantics
//! - Rendering for the supported output formats

pub mod fields;
pub mod file_reader;
pub mod model;
pub mod render;
pub mod unfold;
