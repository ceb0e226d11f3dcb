// ABOUTME: Recipe matching and categorization engine for the Pantry platform
// ABOUTME: Allium detection, ingredient scoring, sample synthesis, and tier bucketing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

#![deny(unsafe_code)]

//! # Pantry Engine
//!
//! The decision core of the recipe search pipeline. Everything here is
//! synchronous, allocation-per-call, and free of I/O: the surrounding
//! service fetches candidate recipes (or asks this crate to synthesize
//! them from the built-in catalog) and then hands the flat list to the
//! categorizer for the final response shape.
//!
//! ## Modules
//!
//! - **allergens**: fixed allium keyword set and substring detection
//! - **matching**: relevance scoring of catalog keywords against user ingredients
//! - **catalog**: the built-in recipe templates used for sample synthesis
//! - **synthesis**: bounded, ranked sample-recipe generation
//! - **categorize**: time-tier × dietary-bucket partitioning with truncation

/// Fixed allium keyword set and case-insensitive substring detection
pub mod allergens;

/// Built-in recipe templates used when no external source is available
pub mod catalog;

/// Time-tier × dietary-bucket partitioning with per-bucket truncation
pub mod categorize;

/// Relevance scoring of recipe keywords against user ingredients
pub mod matching;

/// Bounded, ranked sample-recipe generation from the catalog
pub mod synthesis;

pub use allergens::{contains_allium, is_allium, ALLIUM_KEYWORDS};
pub use catalog::{CatalogEntry, SAMPLE_CATALOG};
pub use categorize::{categorize, MAX_PER_BUCKET};
pub use matching::{score_keywords, MatchOutcome};
pub use synthesis::{synthesize, MAX_SAMPLE_INGREDIENTS, MAX_SAMPLE_RESULTS, RETENTION_FLOOR};
