use serde::{Deserialize, Serialize};

/// A persisted user. `id` is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// The mutable field set of a user, only obtainable through [`UserDraft::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    email: String,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
}

impl UserDraft {
    /// Both fields must be present and non-empty. Values are kept as given.
    pub fn new(name: Option<String>, email: Option<String>) -> Result<Self, ValidationError> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::MissingName)?;
        let email = email
            .filter(|e| !e.is_empty())
            .ok_or(ValidationError::MissingEmail)?;
        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_fields() {
        let draft = UserDraft::new(Some("Alice".into()), Some("alice@example.com".into())).unwrap();
        assert_eq!(draft.name(), "Alice");
        assert_eq!(draft.email(), "alice@example.com");
    }

    #[test]
    fn rejects_missing_or_empty_fields() {
        assert_eq!(
            UserDraft::new(None, Some("a@b.c".into())),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            UserDraft::new(Some("Alice".into()), None),
            Err(ValidationError::MissingEmail)
        );
        assert_eq!(
            UserDraft::new(Some(String::new()), Some("a@b.c".into())),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            UserDraft::new(Some("Alice".into()), Some(String::new())),
            Err(ValidationError::MissingEmail)
        );
    }

    #[test]
    fn does_not_trim() {
        let draft = UserDraft::new(Some(" ".into()), Some(" x ".into())).unwrap();
        assert_eq!(draft.name(), " ");
        assert_eq!(draft.email(), " x ");
    }
}
