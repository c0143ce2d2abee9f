// ABOUTME: Quality classifier scoring a meal description against the food knowledge base
// ABOUTME: Averages tier weights over every matched keyword to produce an unadjusted base score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::knowledge_base::KnowledgeBase;
use crate::config::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Unadjusted classification of a meal description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Average tier weight of all matches, or the neutral score when nothing matched
    pub base_score: f64,
    /// Matched keywords in knowledge-base order
    pub matched_keywords: Vec<String>,
    /// Number of matched keywords
    pub match_count: usize,
}

/// Classify a meal description
///
/// Every keyword contained in the lowercased description counts, so
/// overlapping keywords such as `"grilled chicken"` and `"chicken"` both
/// contribute. A meal mixing tiers lands between them.
#[must_use]
pub fn classify(description: &str, kb: &KnowledgeBase, config: &ScoringConfig) -> Classification {
    let text = description.to_lowercase();

    let mut total_weight = 0.0;
    let mut matched_keywords = Vec::new();
    for (tier, keyword) in kb.keywords() {
        if text.contains(keyword) {
            total_weight += config.tier_weights.weight_for(tier);
            matched_keywords.push(keyword.to_owned());
        }
    }

    let match_count = matched_keywords.len();
    let base_score = if match_count == 0 {
        config.neutral_base_score
    } else {
        total_weight / match_count as f64
    };

    Classification {
        base_score,
        matched_keywords,
        match_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(description: &str) -> Classification {
        classify(
            description,
            &KnowledgeBase::builtin(),
            &ScoringConfig::default(),
        )
    }

    #[test]
    fn test_empty_description_is_neutral() {
        let result = run("");
        assert!((result.base_score - 50.0).abs() < f64::EPSILON);
        assert!(result.matched_keywords.is_empty());
        assert_eq!(result.match_count, 0);
    }

    #[test]
    fn test_overlapping_keywords_all_count() {
        let result = run("Grilled Chicken with vegetables");
        assert_eq!(
            result.matched_keywords,
            vec!["grilled chicken", "vegetables", "chicken"]
        );
        // (100 + 100 + 75) / 3
        assert!((result.base_score - 275.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_tiers_average() {
        let result = run("pizza and a salad");
        assert_eq!(result.match_count, 2);
        assert!((result.base_score - 62.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_poor_only_meal() {
        let result = run("chips and soda");
        assert!((result.base_score - 25.0).abs() < f64::EPSILON);
    }
}
