use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::RegistryConfig;
use crate::domain::{NewUser, UserRecord};
use crate::error::ValidationError;
use crate::validation;

/// Number of fresh ids requested from a custom generator before falling back
/// to a random one.
const MAX_ID_ATTEMPTS: usize = 8;

pub type IdGenerator = Box<dyn Fn() -> String + Send + Sync>;

/// Random UUID v4 ids in canonical hyphenated form.
pub fn uuid_ids() -> IdGenerator {
    Box::new(|| Uuid::new_v4().to_string())
}

/// Deterministic ids: `{prefix}_1`, `{prefix}_2`, ...
pub fn sequential_ids(prefix: impl Into<String>) -> IdGenerator {
    let prefix = prefix.into();
    let counter = Arc::new(AtomicU64::new(1));
    Box::new(move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{}_{}", prefix, id)
    })
}

/// In-process store of user records.
///
/// Records keep their insertion order. Nothing outside the registry can reach
/// the backing storage: lookups hand out shared borrows and enumeration hands
/// out owned snapshots.
pub struct UserRegistry {
    config: RegistryConfig,
    users: Vec<UserRecord>,
    index: HashMap<String, usize>,
    next_id_fn: IdGenerator,
}

impl UserRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_id_generator(config, uuid_ids())
    }

    pub fn with_id_generator(config: RegistryConfig, next_id_fn: IdGenerator) -> Self {
        debug!(connection = %config.connection(), max_users = config.max_users(), "Registry created");
        Self {
            config,
            users: Vec::new(),
            index: HashMap::new(),
            next_id_fn,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Validates the input, mints a record, stores it last and returns a copy.
    pub fn create_user(
        &mut self,
        name: &str,
        age: i64,
        email: Option<&str>,
    ) -> Result<UserRecord, ValidationError> {
        let mut user = NewUser::new(name, age);
        user.email = email.map(str::to_string);
        self.create(user)
    }

    /// Payload form of [`UserRegistry::create_user`].
    pub fn create(&mut self, user: NewUser) -> Result<UserRecord, ValidationError> {
        let valid = validation::validate(user).inspect_err(|e| {
            debug!(error = %e, "Validation failed");
        })?;

        let id = self.fresh_id();
        let record = UserRecord::from_create(id.clone(), Utc::now(), valid);

        self.index.insert(id, self.users.len());
        self.users.push(record.clone());

        info!(user_id = %record.id(), user_count = self.users.len(), "User created");
        Ok(record)
    }

    /// Returns the record with `id`, or `None` when no such record exists.
    pub fn get_user(&self, id: &str) -> Option<&UserRecord> {
        self.index.get(id).map(|&pos| &self.users[pos])
    }

    /// Snapshot of every record in insertion order.
    pub fn list_users(&self) -> Vec<UserRecord> {
        self.users.clone()
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn fresh_id(&self) -> String {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = (self.next_id_fn)();
            if !id.is_empty() && !self.index.contains_key(&id) {
                return id;
            }
            warn!(user_id = %id, "Id generator returned an unusable id, retrying");
        }

        loop {
            let id = Uuid::new_v4().to_string();
            if !self.index.contains_key(&id) {
                warn!(user_id = %id, "Falling back to a random id");
                return id;
            }
        }
    }
}

impl std::fmt::Debug for UserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRegistry")
            .field("config", &self.config)
            .field("user_count", &self.users.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn registry() -> UserRegistry {
        UserRegistry::new(RegistryConfig::new("memory"))
    }

    #[test]
    fn test_create_echoes_input() {
        let mut registry = registry();

        let start = Utc::now();
        let user = registry.create_user("Alice", 30, Some("a@x.com")).unwrap();
        let end = Utc::now();

        assert_eq!(user.name(), "Alice");
        assert_eq!(user.age(), 30);
        assert_eq!(user.email(), Some("a@x.com"));
        assert!(!user.id().is_empty());
        assert!(start <= user.created_at() && user.created_at() <= end);
    }

    #[test]
    fn test_default_ids_are_uuids() {
        let mut registry = registry();
        let user = registry.create_user("Alice", 30, None).unwrap();
        assert!(Uuid::parse_str(user.id()).is_ok());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut registry = registry();
        let ids: HashSet<String> = (0..10_000)
            .map(|i| registry.create_user(&format!("user {i}"), 40, None).unwrap().id().to_string())
            .collect();

        assert_eq!(ids.len(), 10_000);
        assert_eq!(registry.count(), 10_000);
    }

    #[test]
    fn test_get_user() {
        let mut registry = registry();
        let user = registry.create_user("Alice", 30, None).unwrap();

        assert_eq!(registry.get_user(user.id()), Some(&user));
        assert_eq!(registry.get_user("nonexistent-id"), None);
    }

    #[test]
    fn test_list_preserves_order() {
        let mut registry = registry();
        let a = registry.create_user("A", 1, None).unwrap();
        let b = registry.create_user("B", 2, None).unwrap();
        let c = registry.create_user("C", 3, None).unwrap();

        let users = registry.list_users();
        assert_eq!(users, vec![a, b, c]);
        assert_eq!(users.len(), registry.count());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut registry = registry();
        registry.create_user("A", 1, None).unwrap();

        let snapshot = registry.list_users();
        registry.create_user("B", 2, None).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name(), "A");
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn test_boundaries() {
        let mut registry = registry();

        assert_eq!(registry.create_user("A", -1, None), Err(ValidationError::InvalidAge(-1)));
        assert_eq!(registry.create_user("A", 151, None), Err(ValidationError::InvalidAge(151)));
        assert!(registry.create_user("A", 0, None).is_ok());
        assert!(registry.create_user("A", 150, None).is_ok());

        assert_eq!(registry.create_user("", 30, None), Err(ValidationError::EmptyName));
        assert_eq!(registry.create_user("   ", 30, None), Err(ValidationError::EmptyName));

        assert!(matches!(
            registry.create_user("A", 30, Some("not-an-email")),
            Err(ValidationError::InvalidEmail(_))
        ));
        assert!(matches!(
            registry.create_user("A", 30, Some("")),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_failed_create_leaves_state_untouched() {
        let mut registry = UserRegistry::with_id_generator(RegistryConfig::default(), sequential_ids("user"));
        registry.create_user("A", 1, None).unwrap();

        assert!(registry.create_user("B", 999, None).is_err());
        assert_eq!(registry.count(), 1);

        // no id was consumed by the rejected call
        let c = registry.create_user("C", 3, None).unwrap();
        assert_eq!(c.id(), "user_2");
    }

    #[test]
    fn test_sequential_ids() {
        let mut registry = UserRegistry::with_id_generator(RegistryConfig::default(), sequential_ids("user"));
        let a = registry.create_user("A", 1, None).unwrap();
        let b = registry.create_user("B", 2, None).unwrap();

        assert_eq!(a.id(), "user_1");
        assert_eq!(b.id(), "user_2");
    }

    #[test]
    fn test_colliding_generator_still_unique() {
        let mut registry =
            UserRegistry::with_id_generator(RegistryConfig::default(), Box::new(|| "same".to_string()));
        let a = registry.create_user("A", 1, None).unwrap();
        let b = registry.create_user("B", 2, None).unwrap();
        let c = registry.create_user("C", 3, None).unwrap();

        assert_eq!(a.id(), "same");
        assert_ne!(b.id(), a.id());
        assert_ne!(c.id(), b.id());
        assert_eq!(registry.get_user(b.id()), Some(&b));
    }

    #[test]
    fn test_config_is_stored() {
        let registry = UserRegistry::new(RegistryConfig::new("postgres://localhost:5432/test"));
        assert_eq!(registry.config().connection(), "postgres://localhost:5432/test");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_scenario() {
        let mut registry = registry();

        let r1 = registry.create_user("Alice", 30, Some("a@x.com")).unwrap();
        let r2 = registry.create_user("Bob", 25, None).unwrap();
        assert_eq!(r2.email(), None);

        assert_eq!(registry.list_users(), vec![r1.clone(), r2]);
        assert_eq!(registry.get_user(r1.id()), Some(&r1));
        assert_eq!(registry.get_user("zzz"), None);
        assert_eq!(registry.count(), 2);
    }
}
