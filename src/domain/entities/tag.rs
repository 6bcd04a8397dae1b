//! Tag entity.

/// A recipe tag (e.g. "breakfast", "vegan").
///
/// Tags form a fixed catalog managed outside the API; both `name` and `slug`
/// are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: String,
}
