use chrono::{DateTime, Utc};

use crate::validation::ValidUser;

/// A registered user. Immutable once created; only the registry mints these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    id: String,
    name: String,
    age: u32,
    email: Option<String>,
    created_at: DateTime<Utc>,
}

/// Payload for creating a new user.
///
/// `age` is signed so out-of-range input reaches validation instead of being
/// rejected by the type system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub age: i64,
    pub email: Option<String>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl UserRecord {
    /// Builds the record from an already validated payload.
    pub(crate) fn from_create(id: String, created_at: DateTime<Utc>, user: ValidUser) -> Self {
        Self {
            id,
            name: user.name,
            age: user.age,
            email: user.email,
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
