// ABOUTME: Keyword listing command for nutrition-cli
// ABOUTME: Prints knowledge-base keywords with their tiers, optionally filtered by a search term
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use junior_nutrition::intelligence::KnowledgeBase;
use junior_nutrition::AppResult;
use serde_json::json;

use crate::helpers::display::print_json;

/// List keywords, optionally only those containing `search`
pub fn run(search: Option<&str>) -> AppResult<()> {
    let kb = KnowledgeBase::global();

    let keywords: Vec<_> = match search {
        Some(fragment) => kb
            .search(fragment)
            .into_iter()
            .map(|keyword| json!({ "keyword": keyword, "tier": kb.lookup_category(keyword) }))
            .collect(),
        None => kb
            .keywords()
            .map(|(tier, keyword)| json!({ "keyword": keyword, "tier": tier }))
            .collect(),
    };

    print_json(&json!({
        "version": kb.version(),
        "count": keywords.len(),
        "keywords": keywords,
    }))
}
