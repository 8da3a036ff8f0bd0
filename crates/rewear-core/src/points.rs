use crate::models::{Category, Condition};

/// Every listing starts from this many points before multipliers
pub const BASE_POINTS: f64 = 50.0;

/// Applied when a label has no entry in a multiplier table
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Category multipliers, keyed by label.
///
/// "Designer" is not one of the browse categories but stays in the table so
/// that free-form category labels can still earn the premium.
pub const CATEGORY_MULTIPLIERS: &[(&str, f64)] = &[
    ("Designer", 2.0),
    ("Formal", 1.5),
    ("Outerwear", 1.4),
    ("Shoes", 1.3),
    ("Bags", 1.3),
    ("Dresses", 1.2),
    ("Accessories", 1.1),
];

pub const CONDITION_MULTIPLIERS: &[(&str, f64)] = &[
    ("New with Tags", 1.5),
    ("Like New", 1.3),
    ("Excellent", 1.2),
    ("Good", 1.0),
    ("Fair", 0.8),
];

fn lookup(table: &[(&str, f64)], label: &str) -> f64 {
    table
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(DEFAULT_MULTIPLIER)
}

pub fn category_multiplier(label: &str) -> f64 {
    lookup(CATEGORY_MULTIPLIERS, label)
}

pub fn condition_multiplier(label: &str) -> f64 {
    lookup(CONDITION_MULTIPLIERS, label)
}

/// Estimate the swap value of an item from its category and condition.
///
/// Total over every input: unknown labels fall back to the neutral
/// multiplier instead of failing. The product is rounded half away from zero,
/// which for these non-negative values is the same as rounding half up.
pub fn estimate_points(category: &Category, condition: &Condition) -> u32 {
    estimate_points_for_labels(category.label(), condition.label())
}

/// Same as [`estimate_points`], for raw labels. An empty label means "not
/// picked yet" and scores neutral.
pub fn estimate_points_for_labels(category: &str, condition: &str) -> u32 {
    let raw = BASE_POINTS * category_multiplier(category) * condition_multiplier(condition);
    let points = raw.round().max(0.0) as u32;

    tracing::debug!(category, condition, points, "Estimated points");
    points
}
