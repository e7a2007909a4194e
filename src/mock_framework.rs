//! # Mock Framework
//!
//! Utilities for testing [`UserClient`] without a running service.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then helpers like [`expect_create`] to assert what the client sent
//! and reply on its behalf.

use tokio::sync::{mpsc, oneshot};
use crate::clients::UserClient;
use crate::domain::{NewUser, UserRecord};
use crate::error::UserError;
use crate::messages::RegistryRequest;

/// Creates a client wired to a channel the test controls.
pub fn create_mock_client(buffer_size: usize) -> (UserClient, mpsc::Receiver<RegistryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (UserClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(NewUser, oneshot::Sender<Result<UserRecord, UserError>>)> {
    match receiver.recv().await {
        Some(RegistryRequest::CreateUser { new_user, respond_to }) => Some((new_user, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(String, oneshot::Sender<Result<Option<UserRecord>, UserError>>)> {
    match receiver.recv().await {
        Some(RegistryRequest::GetUser { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
