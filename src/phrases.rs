// src/phrases.rs

//! Canned affirmation phrases and the local composer.
//! This is the fallback path when remote generation is disabled or fails.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Returned for moods that have no entry in the table.
pub const DEFAULT_AFFIRMATION: &str = "I am enough. I am worthy. I am capable.";

/// Appended after the capitalized situation text.
const GROWTH_SUFFIX: &str = "is an opportunity for growth.";

/// Static mood → affirmation table, keys lowercase. Loaded once, never mutated.
static PHRASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "anxious",
            "I am calm and centered. I trust in my ability to handle whatever comes my way.",
        ),
        (
            "stressed",
            "I release tension with each breath. I am capable and resilient.",
        ),
        (
            "sad",
            "I am worthy of love and happiness. This feeling will pass, and brighter days are ahead.",
        ),
        (
            "overwhelmed",
            "I take things one step at a time. I am doing my best, and that is enough.",
        ),
        (
            "uncertain",
            "I trust the journey, even when I cannot see the path. I am exactly where I need to be.",
        ),
        (
            "excited",
            "I embrace this positive energy. I am open to all the wonderful possibilities ahead.",
        ),
        (
            "grateful",
            "I appreciate this moment and all the blessings in my life. I am abundant.",
        ),
        (
            "confident",
            "I believe in myself and my abilities. I am capable of achieving great things.",
        ),
    ])
});

/// Look up the canned phrase for a mood (case-insensitive), defaulting for
/// unknown moods, and append the situation clause when one is given.
/// Pure and infallible.
pub fn compose(mood: &str, situation: &str) -> String {
    let base = PHRASES
        .get(mood.to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_AFFIRMATION);

    let situation = situation.trim();
    if situation.is_empty() {
        return base.to_string();
    }

    format!("{} {} {}", base, capitalize(situation), GROWTH_SUFFIX)
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
