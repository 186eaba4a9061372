use serde::Serialize;
use thiserror::Error;

/// Why a draft was rejected at the add boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("age '{0}' is not a whole number")]
    AgeNotANumber(String),
    #[error("age must be greater than zero, got {0}")]
    AgeNotPositive(i64),
    #[error("age {0} is out of range")]
    AgeOutOfRange(i64),
}

/// A record as entered at the prompt, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub age: String,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }
}

/// A validated user record. Construction goes through `TryFrom<UserDraft>`,
/// so every stored `User` has a non-empty name and a positive age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    name: String,
    age: u32,
}

impl User {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl TryFrom<UserDraft> for User {
    type Error = ValidationError;

    fn try_from(draft: UserDraft) -> Result<Self, Self::Error> {
        if draft.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let age: i64 = draft
            .age
            .trim()
            .parse()
            .map_err(|_| ValidationError::AgeNotANumber(draft.age.clone()))?;
        if age <= 0 {
            return Err(ValidationError::AgeNotPositive(age));
        }
        let age = u32::try_from(age).map_err(|_| ValidationError::AgeOutOfRange(age))?;
        Ok(User {
            name: draft.name,
            age,
        })
    }
}
