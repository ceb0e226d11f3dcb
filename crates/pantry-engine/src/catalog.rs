// ABOUTME: Built-in recipe templates used for sample synthesis
// ABOUTME: Static catalog spanning all three time tiers with matching keyword sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! # Sample Recipe Catalog
//!
//! The static templates the synthesizer draws from when no external recipe
//! source is available. Entries are never returned verbatim: ingredient
//! lists are re-derived per query and the allium flag is re-checked against
//! the derived list. The `keywords` sets exist purely for matching and are
//! not part of the response shape.

use pantry_core::models::{Recipe, RecipeNutrition};

/// A static recipe template plus its matching keywords
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Stable template id, unique within the catalog
    pub id: i64,
    /// Display title
    pub title: &'static str,
    /// Image URL
    pub image: &'static str,
    /// Total time in minutes
    pub ready_in_minutes: i32,
    /// Servings the nutrition values refer to
    pub servings: i32,
    /// Per-serving nutrition summary
    pub nutrition: RecipeNutrition,
    /// Whether the canonical preparation uses onion/garlic; feeds the
    /// synthesized ingredient list, never the response flag directly
    pub has_onion_garlic: bool,
    /// Lower-case matching keywords
    pub keywords: &'static [&'static str],
}

impl CatalogEntry {
    /// Materialize a `Recipe` from this template with a synthesized
    /// ingredient list and a freshly derived allium flag.
    #[must_use]
    pub fn to_recipe(&self, ingredients: Vec<String>, has_onion_garlic: bool) -> Recipe {
        Recipe {
            id: self.id,
            title: self.title.to_owned(),
            image: self.image.to_owned(),
            ready_in_minutes: self.ready_in_minutes,
            servings: self.servings,
            nutrition: self.nutrition,
            has_onion_garlic,
            ingredients,
            instructions: Vec::new(),
        }
    }
}

/// The built-in catalog, in canonical order. Order matters: scoring ties
/// are broken by position, so reordering entries changes which samples
/// surface for a given ingredient set.
pub const SAMPLE_CATALOG: &[CatalogEntry] = &[
    // Quick recipes (low tier, under 20 min)
    CatalogEntry {
        id: 1001,
        title: "Caprese Salad with Fresh Basil",
        image: "https://images.unsplash.com/photo-1592417817098-8fd3d9eb14a5?w=400",
        ready_in_minutes: 10,
        servings: 2,
        nutrition: RecipeNutrition {
            calories: 220.0,
            protein: 12.0,
            carbs: 8.0,
            fat: 16.0,
            fiber: 2.0,
        },
        has_onion_garlic: false,
        keywords: &["tomato", "cheese", "mozzarella", "basil"],
    },
    CatalogEntry {
        id: 1002,
        title: "Asian Chicken Lettuce Wraps",
        image: "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=400",
        ready_in_minutes: 15,
        servings: 3,
        nutrition: RecipeNutrition {
            calories: 285.0,
            protein: 22.0,
            carbs: 12.0,
            fat: 8.0,
            fiber: 4.0,
        },
        has_onion_garlic: true,
        keywords: &["chicken", "lettuce", "asian"],
    },
    CatalogEntry {
        id: 1003,
        title: "Mediterranean Chickpea Bowl",
        image: "https://images.unsplash.com/photo-1546549032-9571cd6b27df?w=400",
        ready_in_minutes: 12,
        servings: 2,
        nutrition: RecipeNutrition {
            calories: 315.0,
            protein: 14.0,
            carbs: 35.0,
            fat: 12.0,
            fiber: 8.0,
        },
        has_onion_garlic: false,
        keywords: &["chickpea", "mediterranean", "olive", "feta"],
    },
    CatalogEntry {
        id: 1004,
        title: "Spicy Paneer Tikka Bites",
        image: "https://images.unsplash.com/photo-1567620905732-2d1ec7ab7445?w=400",
        ready_in_minutes: 18,
        servings: 4,
        nutrition: RecipeNutrition {
            calories: 340.0,
            protein: 18.0,
            carbs: 15.0,
            fat: 22.0,
            fiber: 3.0,
        },
        has_onion_garlic: true,
        keywords: &["paneer", "indian", "spicy", "tikka"],
    },
    CatalogEntry {
        id: 1005,
        title: "Avocado Toast Supreme",
        image: "https://images.unsplash.com/photo-1528736235302-52922df5c122?w=400",
        ready_in_minutes: 8,
        servings: 1,
        nutrition: RecipeNutrition {
            calories: 295.0,
            protein: 8.0,
            carbs: 28.0,
            fat: 18.0,
            fiber: 10.0,
        },
        has_onion_garlic: false,
        keywords: &["avocado", "toast", "bread"],
    },
    CatalogEntry {
        id: 1006,
        title: "Teriyaki Rice Bowl",
        image: "https://images.unsplash.com/photo-1604909052743-94e838986d24?w=400",
        ready_in_minutes: 16,
        servings: 2,
        nutrition: RecipeNutrition {
            calories: 380.0,
            protein: 20.0,
            carbs: 45.0,
            fat: 12.0,
            fiber: 3.0,
        },
        has_onion_garlic: true,
        keywords: &["rice", "teriyaki", "asian", "bowl"],
    },
    CatalogEntry {
        id: 1007,
        title: "Greek Yogurt Parfait",
        image: "https://images.unsplash.com/photo-1511690743698-d9d85f2fbf38?w=400",
        ready_in_minutes: 5,
        servings: 1,
        nutrition: RecipeNutrition {
            calories: 245.0,
            protein: 15.0,
            carbs: 32.0,
            fat: 6.0,
            fiber: 5.0,
        },
        has_onion_garlic: false,
        keywords: &["yogurt", "berry", "granola", "honey"],
    },
    CatalogEntry {
        id: 1008,
        title: "Soybean Edamame Hummus",
        image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        ready_in_minutes: 10,
        servings: 4,
        nutrition: RecipeNutrition {
            calories: 180.0,
            protein: 12.0,
            carbs: 18.0,
            fat: 8.0,
            fiber: 6.0,
        },
        has_onion_garlic: true,
        keywords: &["soybean", "edamame", "hummus", "dip"],
    },
    // Medium recipes (20-45 min)
    CatalogEntry {
        id: 2001,
        title: "Creamy Mushroom Risotto",
        image: "https://images.unsplash.com/photo-1476124369491-e7addf5db371?w=400",
        ready_in_minutes: 35,
        servings: 4,
        nutrition: RecipeNutrition {
            calories: 420.0,
            protein: 16.0,
            carbs: 48.0,
            fat: 18.0,
            fiber: 4.0,
        },
        has_onion_garlic: true,
        keywords: &["rice", "mushroom", "creamy", "italian"],
    },
    CatalogEntry {
        id: 2002,
        title: "Honey Garlic Chicken Thighs",
        image: "https://images.unsplash.com/photo-1567620905732-2d1ec7ab7445?w=400",
        ready_in_minutes: 40,
        servings: 4,
        nutrition: RecipeNutrition {
            calories: 485.0,
            protein: 32.0,
            carbs: 28.0,
            fat: 24.0,
            fiber: 2.0,
        },
        has_onion_garlic: true,
        keywords: &["chicken", "honey", "garlic", "thigh"],
    },
    CatalogEntry {
        id: 2003,
        title: "Stuffed Bell Peppers",
        image: "https://images.unsplash.com/photo-1606755456206-b25206449e90?w=400",
        ready_in_minutes: 45,
        servings: 4,
        nutrition: RecipeNutrition {
            calories: 365.0,
            protein: 22.0,
            carbs: 35.0,
            fat: 16.0,
            fiber: 6.0,
        },
        has_onion_garlic: true,
        keywords: &["pepper", "stuffed", "rice", "beef"],
    },
    CatalogEntry {
        id: 2004,
        title: "Lemon Herb Salmon Fillet",
        image: "https://images.unsplash.com/photo-1467003909585-2f8a72700288?w=400",
        ready_in_minutes: 25,
        servings: 2,
        nutrition: RecipeNutrition {
            calories: 425.0,
            protein: 38.0,
            carbs: 8.0,
            fat: 26.0,
            fiber: 2.0,
        },
        has_onion_garlic: false,
        keywords: &["salmon", "fish", "lemon", "herb"],
    },
    CatalogEntry {
        id: 2005,
        title: "Butter Paneer Masala",
        image: "https://images.unsplash.com/photo-1565557623262-b51c2513a641?w=400",
        ready_in_minutes: 30,
        servings: 4,
        nutrition: RecipeNutrition {
            calories: 395.0,
            protein: 18.0,
            carbs: 22.0,
            fat: 26.0,
            fiber: 4.0,
        },
        has_onion_garlic: true,
        keywords: &["paneer", "butter", "masala", "indian", "curry"],
    },
    CatalogEntry {
        id: 2006,
        title: "Vegetable Fried Rice",
        image: "https://images.unsplash.com/photo-1604909052743-94e838986d24?w=400",
        ready_in_minutes: 22,
        servings: 3,
        nutrition: RecipeNutrition {
            calories: 335.0,
            protein: 12.0,
            carbs: 52.0,
            fat: 10.0,
            fiber: 5.0,
        },
        has_onion_garlic: true,
        keywords: &["rice", "vegetable", "fried", "asian"],
    },
    CatalogEntry {
        id: 2007,
        title: "Tomato Basil Pasta",
        image: "https://images.unsplash.com/photo-1551892374-ecf8754cf8b0?w=400",
        ready_in_minutes: 28,
        servings: 4,
        nutrition: RecipeNutrition {
            calories: 385.0,
            protein: 14.0,
            carbs: 58.0,
            fat: 12.0,
            fiber: 6.0,
        },
        has_onion_garlic: true,
        keywords: &["pasta", "tomato", "basil", "italian"],
    },
    // Longer recipes (high tier, over 45 min)
    CatalogEntry {
        id: 3001,
        title: "Slow Braised Beef Short Ribs",
        image: "https://images.unsplash.com/photo-1574484284002-952d92456975?w=400",
        ready_in_minutes: 180,
        servings: 6,
        nutrition: RecipeNutrition {
            calories: 565.0,
            protein: 42.0,
            carbs: 15.0,
            fat: 36.0,
            fiber: 3.0,
        },
        has_onion_garlic: true,
        keywords: &["beef", "braised", "short ribs", "wine"],
    },
    CatalogEntry {
        id: 3002,
        title: "Traditional Chicken Biryani",
        image: "https://images.unsplash.com/photo-1563379091339-03246963d51c?w=400",
        ready_in_minutes: 90,
        servings: 8,
        nutrition: RecipeNutrition {
            calories: 485.0,
            protein: 28.0,
            carbs: 52.0,
            fat: 18.0,
            fiber: 4.0,
        },
        has_onion_garlic: true,
        keywords: &["chicken", "biryani", "rice", "indian", "spiced"],
    },
    CatalogEntry {
        id: 3003,
        title: "Moroccan Lamb Tagine",
        image: "https://images.unsplash.com/photo-1544025162-d76694265947?w=400",
        ready_in_minutes: 120,
        servings: 6,
        nutrition: RecipeNutrition {
            calories: 445.0,
            protein: 32.0,
            carbs: 28.0,
            fat: 24.0,
            fiber: 6.0,
        },
        has_onion_garlic: true,
        keywords: &["lamb", "moroccan", "tagine", "spiced"],
    },
    CatalogEntry {
        id: 3004,
        title: "Homemade Lasagna Classica",
        image: "https://images.unsplash.com/photo-1574894709920-11b28e7367e3?w=400",
        ready_in_minutes: 75,
        servings: 8,
        nutrition: RecipeNutrition {
            calories: 520.0,
            protein: 28.0,
            carbs: 38.0,
            fat: 28.0,
            fiber: 5.0,
        },
        has_onion_garlic: true,
        keywords: &["lasagna", "pasta", "beef", "cheese", "italian"],
    },
    CatalogEntry {
        id: 3005,
        title: "Roasted Whole Chicken with Herbs",
        image: "https://images.unsplash.com/photo-1574947726661-e2c5f3585e99?w=400",
        ready_in_minutes: 90,
        servings: 6,
        nutrition: RecipeNutrition {
            calories: 425.0,
            protein: 38.0,
            carbs: 8.0,
            fat: 26.0,
            fiber: 2.0,
        },
        has_onion_garlic: true,
        keywords: &["chicken", "roasted", "herbs", "whole"],
    },
    CatalogEntry {
        id: 3006,
        title: "Authentic Ramen Noodle Soup",
        image: "https://images.unsplash.com/photo-1569718212165-3a8278d5f624?w=400",
        ready_in_minutes: 60,
        servings: 4,
        nutrition: RecipeNutrition {
            calories: 385.0,
            protein: 22.0,
            carbs: 42.0,
            fat: 16.0,
            fiber: 4.0,
        },
        has_onion_garlic: true,
        keywords: &["ramen", "noodle", "soup", "japanese"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<i64> = SAMPLE_CATALOG.iter().map(|entry| entry.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SAMPLE_CATALOG.len());
    }

    #[test]
    fn catalog_spans_all_three_tiers() {
        use pantry_core::models::TimeTier;
        for tier in [TimeTier::Low, TimeTier::Medium, TimeTier::High] {
            assert!(
                SAMPLE_CATALOG
                    .iter()
                    .any(|entry| TimeTier::classify(entry.ready_in_minutes) == tier),
                "no catalog entry in tier {}",
                tier.as_str()
            );
        }
    }

    #[test]
    fn every_entry_has_keywords_and_valid_counts() {
        for entry in SAMPLE_CATALOG {
            assert!(!entry.keywords.is_empty(), "entry {} has no keywords", entry.id);
            assert!(entry.servings > 0, "entry {} has no servings", entry.id);
            assert!(entry.ready_in_minutes > 0);
        }
    }
}
