//! # user-registry
//!
//! An in-process user registry. [`UserRegistry`] validates input, mints
//! immutable [`UserRecord`]s with unique ids and answers lookups and
//! enumeration in insertion order.
//!
//! For concurrent callers, [`RegistrySystem`] runs the registry inside a tokio
//! actor ([`actors::UserService`]) and hands out a cloneable
//! [`UserClient`]. Creation is serialized by the actor's message loop.
//!
//! ```rust,no_run
//! use user_registry::{RegistryConfig, UserRegistry};
//!
//! let mut registry = UserRegistry::new(RegistryConfig::new("memory"));
//! let alice = registry.create_user("Alice", 30, Some("a@x.com"))?;
//! assert_eq!(registry.get_user(alice.id()), Some(&alice));
//! # Ok::<(), user_registry::ValidationError>(())
//! ```

pub mod actors;
pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod messages;
pub mod registry;
pub mod validation;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, RegistrySystem};
pub use clients::UserClient;
pub use config::RegistryConfig;
pub use domain::{NewUser, UserRecord};
pub use error::{ConfigError, UserError, ValidationError};
pub use registry::{sequential_ids, uuid_ids, IdGenerator, UserRegistry};
