// ABOUTME: Core data models for the Pantry recipe API
// ABOUTME: Recipe, nutrition, categorized response shapes, and the user account model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! # Core Data Models
//!
//! The recipe data model shared by the engine, the HTTP layer, and
//! persistence. Wire names follow the public API contract
//! (`readyInMinutes`, `hasOnionGarlic`), so `Recipe` serializes with
//! camelCase keys while the categorized response keeps its snake_case
//! bucket names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-serving nutrition summary in kcal and grams
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeNutrition {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams (saturated fat excluded from extraction)
    pub fat: f64,
    /// Dietary fiber in grams
    pub fiber: f64,
}

/// A single recipe as returned to API clients
///
/// Values are transient: built per request from the upstream provider, the
/// LLM, or the built-in catalog, and discarded after the response. The
/// `has_onion_garlic` flag is always derived from the final ingredient text,
/// never trusted from upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Identifier, unique within a single response
    pub id: i64,
    /// Display title
    pub title: String,
    /// Image URL; empty when the upstream source has none
    pub image: String,
    /// Total preparation plus cooking time in minutes
    pub ready_in_minutes: i32,
    /// Number of servings the nutrition values refer to
    pub servings: i32,
    /// Per-serving nutrition summary
    pub nutrition: RecipeNutrition,
    /// Whether the ingredient list contains an allium (onion/garlic family)
    pub has_onion_garlic: bool,
    /// Ingredient display list, insertion order preserved
    pub ingredients: Vec<String>,
    /// Preparation steps; empty when the source provides none
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// Cooking-time tier derived from `readyInMinutes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeTier {
    /// Under 20 minutes
    Low,
    /// 20 to 45 minutes inclusive
    Medium,
    /// Over 45 minutes
    High,
}

impl TimeTier {
    /// Classify a ready-time in minutes into its tier.
    ///
    /// Boundaries: exactly 20 and exactly 45 are `Medium`, 46 is `High`.
    /// Negative values land in `Low` by the plain comparison; callers are
    /// expected to guard against them upstream.
    #[must_use]
    pub const fn classify(ready_in_minutes: i32) -> Self {
        if ready_in_minutes < 20 {
            Self::Low
        } else if ready_in_minutes <= 45 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Tier key as it appears in the response body
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Dietary bucket derived from the allium flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryBucket {
    /// Ingredient list contains an onion/garlic-family ingredient
    WithOnionGarlic,
    /// Ingredient list is allium-free
    WithoutOnionGarlic,
}

impl DietaryBucket {
    /// Bucket for a recipe with the given allium flag
    #[must_use]
    pub const fn from_flag(has_onion_garlic: bool) -> Self {
        if has_onion_garlic {
            Self::WithOnionGarlic
        } else {
            Self::WithoutOnionGarlic
        }
    }

    /// Bucket key as it appears in the response body
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WithOnionGarlic => "with_onion_garlic",
            Self::WithoutOnionGarlic => "without_onion_garlic",
        }
    }
}

/// The two dietary buckets of one time tier
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TierBuckets {
    /// Recipes containing an allium ingredient
    pub with_onion_garlic: Vec<Recipe>,
    /// Allium-free recipes
    pub without_onion_garlic: Vec<Recipe>,
}

impl TierBuckets {
    /// Mutable access to one bucket
    pub fn bucket_mut(&mut self, bucket: DietaryBucket) -> &mut Vec<Recipe> {
        match bucket {
            DietaryBucket::WithOnionGarlic => &mut self.with_onion_garlic,
            DietaryBucket::WithoutOnionGarlic => &mut self.without_onion_garlic,
        }
    }

    /// Total recipes across both buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.with_onion_garlic.len() + self.without_onion_garlic.len()
    }

    /// True when both buckets are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.with_onion_garlic.is_empty() && self.without_onion_garlic.is_empty()
    }
}

/// The final response shape: three tiers, two buckets each, all keys always
/// present even when empty
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategorizedRecipes {
    /// Under 20 minutes
    pub low: TierBuckets,
    /// 20 to 45 minutes inclusive
    pub medium: TierBuckets,
    /// Over 45 minutes
    pub high: TierBuckets,
}

impl CategorizedRecipes {
    /// Mutable access to one tier
    pub fn tier_mut(&mut self, tier: TimeTier) -> &mut TierBuckets {
        match tier {
            TimeTier::Low => &mut self.low,
            TimeTier::Medium => &mut self.medium,
            TimeTier::High => &mut self.high,
        }
    }

    /// Total recipes across all six buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.low.len() + self.medium.len() + self.high.len()
    }

    /// True when every bucket is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.low.is_empty() && self.medium.is_empty() && self.high.is_empty()
    }
}

/// A user-authored recipe, persisted rather than synthesized per request
///
/// Unlike [`Recipe`], custom recipes are owned rows: they carry the author
/// and creation time, and their id is a UUID instead of a numeric
/// provider id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRecipe {
    /// Stable identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Display title
    pub title: String,
    /// Ingredient display list
    pub ingredients: Vec<String>,
    /// Preparation steps
    pub instructions: Vec<String>,
    /// Total preparation plus cooking time in minutes
    pub ready_in_minutes: i32,
    /// Number of servings
    pub servings: i32,
    /// Per-serving nutrition, estimated or zeroed
    pub nutrition: RecipeNutrition,
    /// Derived from the ingredient list at creation time
    pub has_onion_garlic: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// A liveness ping recorded by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    /// Stable identifier
    pub id: Uuid,
    /// Free-text name the client reported
    pub client_name: String,
    /// When the check was recorded
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Create a check for a client name, stamped now
    #[must_use]
    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}

/// A registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable account identifier
    pub id: Uuid,
    /// Login email, unique across accounts
    pub email: String,
    /// Optional display name shown in the UI
    pub display_name: Option<String>,
    /// Bcrypt hash of the password; never serialized into responses
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new account value with a fresh id and creation timestamp
    #[must_use]
    pub fn new(email: String, password_hash: String, display_name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            display_name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
