//! Shopping-list aggregation and report rendering.
//!
//! Turns the raw per-cart-item rows into a compact, deterministic text
//! report: one line per distinct `(ingredient, unit)` pair with the summed
//! amount, followed by the recipes the cart contains.
//!
//! Grouping is exact string equality on both the ingredient name and the
//! unit. Nothing is trimmed, case-folded, or unit-converted: "sugar (g)"
//! and "sugar (kg)" stay separate lines.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use crate::domain::entities::{CartEntry, RecipeRef};

/// One output row of the report: the summed amount of one
/// `(ingredient, unit)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedLine {
    pub ingredient_name: String,
    pub unit: String,
    pub total_amount: i64,
}

/// Groups cart entries by exact `(ingredient_name, unit)` and sums their
/// amounts, sorted by name with the unit as tie-break.
///
/// # Panics
///
/// Panics if a summed amount overflows `i64`. Amounts are small positive
/// integers by upstream constraint, so overflow indicates corrupt data, not
/// a recoverable condition.
pub fn aggregate_entries(entries: &[CartEntry]) -> Vec<AggregatedLine> {
    let mut totals: BTreeMap<(&str, &str), i64> = BTreeMap::new();
    for entry in entries {
        let total = totals
            .entry((entry.ingredient_name.as_str(), entry.unit.as_str()))
            .or_insert(0);
        *total = total
            .checked_add(entry.amount)
            .expect("shopping-list amount overflowed i64");
    }

    totals
        .into_iter()
        .map(|((name, unit), total_amount)| AggregatedLine {
            ingredient_name: name.to_string(),
            unit: unit.to_string(),
            total_amount,
        })
        .collect()
}

/// Renders the shopping-list report for the current moment.
///
/// Pure over its inputs apart from the single read of the local clock.
/// See [`render_shopping_list_at`] for the full format contract.
pub fn render_shopping_list(entries: &[CartEntry], recipes: &[RecipeRef]) -> String {
    render_shopping_list_at(entries, recipes, Local::now())
}

/// Renders the shopping-list report with an explicit generation timestamp.
///
/// # Format
///
/// ```text
/// Shopping list
/// Date: 06.08.2026 14:30
///
/// Products:
/// 1. Egg — 2 pcs
/// 2. Flour — 500 g
///
/// Recipes:
/// 1. Pancakes (Jane Doe)
/// 2. Waffles (bob_k)
/// ```
///
/// Ingredient lines follow [`aggregate_entries`] ordering; recipe lines are
/// sorted by name. An empty cart produces the headers with no numbered
/// lines.
pub fn render_shopping_list_at(
    entries: &[CartEntry],
    recipes: &[RecipeRef],
    generated_at: DateTime<Local>,
) -> String {
    let lines = aggregate_entries(entries);

    let mut listed: Vec<&RecipeRef> = recipes.iter().collect();
    listed.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.author.cmp(&b.author)));

    let mut out = String::new();
    out.push_str("Shopping list\n");
    out.push_str(&format!(
        "Date: {}\n",
        generated_at.format("%d.%m.%Y %H:%M")
    ));

    out.push_str("\nProducts:\n");
    for (n, line) in lines.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} — {} {}\n",
            n + 1,
            capitalize_first(&line.ingredient_name),
            line.total_amount,
            line.unit
        ));
    }

    out.push_str("\nRecipes:\n");
    for (n, recipe) in listed.iter().enumerate() {
        out.push_str(&format!("{}. {} ({})\n", n + 1, recipe.name, recipe.author));
    }

    out
}

/// Uppercases the first character, leaving the rest untouched.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
