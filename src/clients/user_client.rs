use tokio::sync::mpsc;
use tracing::{debug, instrument};
use crate::domain::{NewUser, UserRecord};
use crate::error::UserError;
use crate::messages::RegistryRequest;

/// Client for [`crate::actors::UserService`]. Cheap to clone; every clone
/// talks to the same registry.
#[derive(Clone)]
pub struct UserClient {
    sender: mpsc::Sender<RegistryRequest>,
}

impl UserClient {
    pub fn new(sender: mpsc::Sender<RegistryRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop. Requests already queued ahead of this one are
    /// still answered.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), UserError> {
        debug!("Sending shutdown request");
        self.sender
            .send(RegistryRequest::Shutdown)
            .await
            .map_err(|_| UserError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(UserClient => fn create_user(new_user: NewUser) -> UserRecord as RegistryRequest::CreateUser, Error = UserError);
client_method!(UserClient => fn get_user(id: String) -> Option<UserRecord> as RegistryRequest::GetUser, Error = UserError);
client_method!(UserClient => fn list_users() -> Vec<UserRecord> as RegistryRequest::ListUsers, Error = UserError);
client_method!(UserClient => fn count() -> usize as RegistryRequest::CountUsers, Error = UserError);
