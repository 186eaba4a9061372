use super::model::{User, UserDraft, ValidationError};

/// Outcome of a removal attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(User),
    NotFound,
}

/// In-memory, insertion-ordered store of user records.
///
/// The store never prints. Every mutation reports its outcome to the
/// caller, which decides how to surface it.
#[derive(Debug, Default)]
pub struct UsersData {
    records: Vec<User>,
}

impl UsersData {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[User] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate a draft and append it. The sequence is unchanged when the
    /// draft is rejected.
    pub fn add(&mut self, draft: UserDraft) -> Result<(), ValidationError> {
        let user = User::try_from(draft)?;
        self.records.push(user);
        Ok(())
    }

    /// Remove the first record whose name matches exactly (case-sensitive).
    /// The relative order of the remaining records is preserved.
    pub fn remove(&mut self, name: &str) -> RemoveOutcome {
        match self.records.iter().position(|user| user.name() == name) {
            Some(index) => RemoveOutcome::Removed(self.records.remove(index)),
            None => RemoveOutcome::NotFound,
        }
    }
}
