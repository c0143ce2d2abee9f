// ABOUTME: Versioned food knowledge base mapping quality tiers to curated keyword lists
// ABOUTME: Loaded once per process from built-in data or a JSON document, never mutated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Knowledge Base
//!
//! Keyword matching against this curated list is the whole "understanding"
//! mechanism of the engine: matching is case-insensitive substring
//! containment, so `"chicken"` matches inside `"grilled chicken sandwich"`.
//!
//! A keyword may belong to exactly one tier. Violations are rejected when a
//! knowledge base is loaded, never handled per call.

use crate::config::ConfigError;
use nutrition_core::QualityTier;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Environment variable naming an alternative knowledge-base JSON file
pub const KNOWLEDGE_BASE_PATH_ENV: &str = "NUTRITION_KNOWLEDGE_BASE_PATH";

/// Version stamp of the built-in keyword lists
pub const BUILTIN_VERSION: &str = "2025.1";

static KNOWLEDGE_BASE: OnceLock<KnowledgeBase> = OnceLock::new();

const EXCELLENT_KEYWORDS: &[&str] = &[
    "grilled chicken",
    "salmon",
    "fish",
    "turkey",
    "eggs",
    "vegetables",
    "veggies",
    "broccoli",
    "spinach",
    "kale",
    "salad",
    "quinoa",
    "sweet potato",
    "brown rice",
    "oatmeal",
    "greek yogurt",
    "berries",
    "avocado",
    "lentils",
    "beans",
    "fruit",
];

const GOOD_KEYWORDS: &[&str] = &[
    "chicken",
    "lean beef",
    "tuna",
    "rice",
    "pasta",
    "whole wheat",
    "bread",
    "potato",
    "milk",
    "yogurt",
    "cheese",
    "banana",
    "apple",
    "orange",
    "almonds",
    "walnuts",
    "peanut butter",
    "sandwich",
    "protein shake",
    "smoothie",
    "water",
];

const FAIR_KEYWORDS: &[&str] = &[
    "cereal",
    "juice",
    "pancakes",
    "waffles",
    "bagel",
    "crackers",
    "granola bar",
    "white bread",
    "noodles",
    "mac and cheese",
    "sports drink",
    "tortilla",
];

const POOR_KEYWORDS: &[&str] = &[
    "pizza",
    "chips",
    "soda",
    "candy",
    "fries",
    "fried chicken",
    "donut",
    "cookies",
    "cupcake",
    "pastry",
    "ice cream",
    "burger",
    "hot dog",
    "energy drink",
    "milkshake",
    "chocolate bar",
    "nachos",
    "fast food",
];

/// One quality tier with its keyword list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodCategory {
    /// Tier every keyword in this category scores as
    pub tier: QualityTier,
    /// Human-readable description of the category
    pub description: String,
    /// Lowercase keywords, in match order
    pub keywords: Vec<String>,
}

/// On-disk shape of a knowledge base document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBaseDocument {
    /// Version stamp carried into every analysis result
    pub version: String,
    /// Categories, in iteration order
    pub categories: Vec<FoodCategory>,
}

/// Immutable tier → keyword mapping
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    version: String,
    categories: Vec<FoodCategory>,
    index: HashMap<String, QualityTier>,
}

impl KnowledgeBase {
    /// Get the process-wide knowledge base
    ///
    /// Loaded on first use from `NUTRITION_KNOWLEDGE_BASE_PATH` when set,
    /// otherwise from the built-in lists. A file that fails to load is logged
    /// and the built-in lists are used instead.
    pub fn global() -> &'static Self {
        KNOWLEDGE_BASE.get_or_init(|| {
            env::var(KNOWLEDGE_BASE_PATH_ENV).map_or_else(
                |_| Self::builtin(),
                |path| {
                    Self::from_path(&path).unwrap_or_else(|e| {
                        warn!(path = %path, "Failed to load knowledge base: {}, using built-in", e);
                        Self::builtin()
                    })
                },
            )
        })
    }

    /// The curated built-in keyword lists
    #[must_use]
    pub fn builtin() -> Self {
        let categories = builtin_categories();
        let mut index = HashMap::new();
        for category in &categories {
            for keyword in &category.keywords {
                index.entry(keyword.clone()).or_insert(category.tier);
            }
        }
        Self {
            version: BUILTIN_VERSION.to_owned(),
            categories,
            index,
        }
    }

    /// Build a knowledge base, normalising keywords and rejecting duplicates
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyKeyword` for blank keywords and
    /// `ConfigError::DuplicateKeyword` when a keyword appears twice
    pub fn from_categories(
        version: impl Into<String>,
        categories: Vec<FoodCategory>,
    ) -> Result<Self, ConfigError> {
        let version = version.into();
        if version.trim().is_empty() {
            return Err(ConfigError::MissingField("version"));
        }

        let mut index = HashMap::new();
        let mut normalised = Vec::with_capacity(categories.len());

        for category in categories {
            let mut keywords = Vec::with_capacity(category.keywords.len());
            for raw in category.keywords {
                let keyword = raw.trim().to_lowercase();
                if keyword.is_empty() {
                    return Err(ConfigError::EmptyKeyword(category.tier));
                }
                if let Some(&first) = index.get(&keyword) {
                    return Err(ConfigError::DuplicateKeyword {
                        keyword,
                        first,
                        second: category.tier,
                    });
                }
                index.insert(keyword.clone(), category.tier);
                keywords.push(keyword);
            }
            normalised.push(FoodCategory {
                tier: category.tier,
                description: category.description,
                keywords,
            });
        }

        Ok(Self {
            version,
            categories: normalised,
            index,
        })
    }

    /// Parse a knowledge base from a JSON document
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the data is invalid
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let document: KnowledgeBaseDocument = serde_json::from_str(json)?;
        Self::from_categories(document.version, document.categories)
    }

    /// Load a knowledge base from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let knowledge_base = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            version = %knowledge_base.version,
            keywords = knowledge_base.index.len(),
            "Knowledge base loaded"
        );
        Ok(knowledge_base)
    }

    /// Version stamp of this knowledge base
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Categories in iteration order
    #[must_use]
    pub fn categories(&self) -> &[FoodCategory] {
        &self.categories
    }

    /// Every `(tier, keyword)` pair in iteration order
    pub fn keywords(&self) -> impl Iterator<Item = (QualityTier, &str)> {
        self.categories.iter().flat_map(|category| {
            category
                .keywords
                .iter()
                .map(move |keyword| (category.tier, keyword.as_str()))
        })
    }

    /// Tier of an exact keyword (case-insensitive)
    #[must_use]
    pub fn lookup_category(&self, keyword: &str) -> Option<QualityTier> {
        self.index.get(&keyword.trim().to_lowercase()).copied()
    }

    /// The set of all keywords
    #[must_use]
    pub fn all_keywords(&self) -> BTreeSet<&str> {
        self.index.keys().map(String::as_str).collect()
    }

    /// Keywords containing `fragment` (case-insensitive), in iteration order
    #[must_use]
    pub fn search(&self, fragment: &str) -> Vec<&str> {
        let needle = fragment.trim().to_lowercase();
        self.keywords()
            .filter(|(_, keyword)| keyword.contains(&needle))
            .map(|(_, keyword)| keyword)
            .collect()
    }

    /// Export this knowledge base in its on-disk shape
    #[must_use]
    pub fn to_document(&self) -> KnowledgeBaseDocument {
        KnowledgeBaseDocument {
            version: self.version.clone(),
            categories: self.categories.clone(),
        }
    }
}

/// Built-in categories, best tier first
#[must_use]
pub fn builtin_categories() -> Vec<FoodCategory> {
    QualityTier::ALL
        .iter()
        .map(|&tier| {
            let (description, keywords) = match tier {
                QualityTier::Excellent => (
                    "Whole foods, lean proteins, vegetables, and complex carbohydrates",
                    EXCELLENT_KEYWORDS,
                ),
                QualityTier::Good => (
                    "Nutritious staples and dairy with moderate processing",
                    GOOD_KEYWORDS,
                ),
                QualityTier::Fair => (
                    "Refined carbohydrates and convenience foods",
                    FAIR_KEYWORDS,
                ),
                QualityTier::Poor => (
                    "Fried, heavily processed, and sugary foods",
                    POOR_KEYWORDS,
                ),
            };
            FoodCategory {
                tier,
                description: description.to_owned(),
                keywords: keywords.iter().map(|&k| k.to_owned()).collect(),
            }
        })
        .collect()
}
