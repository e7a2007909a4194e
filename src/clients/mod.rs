//! Cloneable handles for talking to the registry actor.

#[macro_use]
mod macros;
mod user_client;

pub use user_client::*;
