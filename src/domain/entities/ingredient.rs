//! Ingredient entity.

/// A catalog ingredient.
///
/// The pair `(name, measurement_unit)` is unique: the same product measured
/// in grams and in pieces is two distinct catalog rows, and they are never
/// merged downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
}
