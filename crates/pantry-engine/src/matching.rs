// ABOUTME: Relevance scoring of recipe keywords against a user ingredient list
// ABOUTME: Two points per full substring match, one per sub-word match, first-match-wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! # Ingredient Matching
//!
//! Scores how well a recipe's keyword set covers a user's ingredient list.
//! Each user token contributes at most once: 2 points for a full substring
//! match against some keyword (either containment direction), or 1 point
//! when only a space-separated sub-word matches. The search stops at the
//! first satisfying keyword per token; scores are intentionally not
//! cumulative across keywords, and ranking ties are resolved by the
//! caller's stable sort over catalog order.

/// Result of scoring one keyword set against the user ingredient list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Total relevance score across all user tokens
    pub score: u32,
    /// User tokens that contributed a full (2-point) match, in input order,
    /// normalized to trimmed lower case
    pub matched: Vec<String>,
}

/// Score a recipe keyword set against the user's ingredient tokens.
///
/// All tokens and keywords are trimmed and lower-cased before comparison.
/// An empty user list scores 0 for every candidate; there are no error
/// conditions.
#[must_use]
pub fn score_keywords(user_ingredients: &[String], keywords: &[&str]) -> MatchOutcome {
    let normalized_keywords: Vec<String> = keywords
        .iter()
        .map(|keyword| keyword.trim().to_lowercase())
        .collect();

    let mut outcome = MatchOutcome::default();
    for raw_token in user_ingredients {
        let token = raw_token.trim().to_lowercase();

        let full_match = normalized_keywords
            .iter()
            .any(|keyword| keyword.contains(&token) || token.contains(keyword.as_str()));
        if full_match {
            outcome.score += 2;
            outcome.matched.push(token);
            continue;
        }

        // Sub-word pass only runs when the full match failed, so a token
        // never scores 3.
        let sub_word_match = normalized_keywords.iter().any(|keyword| {
            token
                .split_whitespace()
                .any(|part| keyword.split_whitespace().any(|key_part| {
                    key_part.contains(part) || part.contains(key_part)
                }))
        });
        if sub_word_match {
            outcome.score += 1;
        }
    }

    tracing::trace!(
        score = outcome.score,
        matched = outcome.matched.len(),
        "scored keyword set"
    );
    outcome
}
