//! User entity.

/// A registered user.
///
/// Passwords and token issuance are handled outside this service; the entity
/// only carries the identity fields the API returns.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Display name shown next to authored recipes.
    ///
    /// The full name when both parts are present, the login handle otherwise.
    pub fn display_name(&self) -> String {
        author_display_name(&self.first_name, &self.last_name, &self.username)
    }
}

/// Resolves the display name for an author.
///
/// `"{first} {last}"` when both name parts are non-empty, else `username`.
pub fn author_display_name(first_name: &str, last_name: &str, username: &str) -> String {
    if !first_name.is_empty() && !last_name.is_empty() {
        format!("{} {}", first_name, last_name)
    } else {
        username.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str) -> User {
        User {
            id: 1,
            email: "jane@example.com".to_string(),
            username: "jane_d".to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    #[test]
    fn test_display_name_full() {
        assert_eq!(user("Jane", "Doe").display_name(), "Jane Doe");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        assert_eq!(user("", "").display_name(), "jane_d");
        assert_eq!(user("Jane", "").display_name(), "jane_d");
        assert_eq!(user("", "Doe").display_name(), "jane_d");
    }
}
