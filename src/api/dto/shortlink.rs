//! DTO for the share-link endpoint.

use serde::Serialize;

/// Response carrying the absolute short link for a recipe.
///
/// The hyphenated key is the wire contract the frontend consumes.
#[derive(Debug, Serialize)]
pub struct ShortLinkResponse {
    #[serde(rename = "short-link")]
    pub short_link: String,
}
