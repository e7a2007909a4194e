use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use crate::domain::{NewUser, UserRecord};
use crate::error::UserError;
use crate::messages::{RegistryRequest, ServiceResponse};
use crate::clients::UserClient;
use crate::registry::UserRegistry;

// =============================================================================
// USER SERVICE
// =============================================================================

/// Actor that owns a [`UserRegistry`] and serves it to any number of clients.
///
/// Messages are handled one at a time, so each create runs validate, construct
/// and store before the next request is looked at. Reads never see a half
/// inserted record.
pub struct UserService {
    receiver: mpsc::Receiver<RegistryRequest>,
    registry: UserRegistry,
}

impl UserService {
    pub fn new(buffer_size: usize, registry: UserRegistry) -> (Self, UserClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, registry };
        let client = UserClient::new(sender);
        (service, client)
    }

    /// Runs until a `Shutdown` message arrives or every client is dropped.
    #[instrument(name = "user_service", skip(self))]
    pub async fn run(mut self) {
        info!(connection = %self.registry.config().connection(), "UserService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RegistryRequest::CreateUser { new_user, respond_to } => {
                    self.handle_create_user(new_user, respond_to);
                }
                RegistryRequest::GetUser { id, respond_to } => {
                    self.handle_get_user(id, respond_to);
                }
                RegistryRequest::ListUsers { respond_to } => {
                    self.handle_list_users(respond_to);
                }
                RegistryRequest::CountUsers { respond_to } => {
                    let _ = respond_to.send(Ok(self.registry.count()));
                }
                RegistryRequest::Shutdown => {
                    info!("UserService shutting down");
                    break;
                }
            }
        }
        info!(user_count = self.registry.count(), "UserService stopped");
    }

    #[instrument(fields(user_name = %new_user.name, user_age = new_user.age), skip(self, new_user, respond_to))]
    fn handle_create_user(&mut self, new_user: NewUser, respond_to: ServiceResponse<UserRecord, UserError>) {
        debug!("Processing create_user request");
        let result = self.registry.create(new_user).map_err(|e| {
            error!(error = %e, "Validation failed");
            UserError::from(e)
        });
        let _ = respond_to.send(result);
    }

    #[instrument(fields(user_id = %id), skip(self, respond_to))]
    fn handle_get_user(&self, id: String, respond_to: ServiceResponse<Option<UserRecord>, UserError>) {
        debug!("Processing get_user request");
        let user = self.registry.get_user(&id).cloned();
        match &user {
            Some(user) => info!(user_name = %user.name(), "User found"),
            None => debug!("User not found"),
        }
        let _ = respond_to.send(Ok(user));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_users(&self, respond_to: ServiceResponse<Vec<UserRecord>, UserError>) {
        debug!("Processing list_users request");
        let users = self.registry.list_users();
        info!(user_count = users.len(), "Listed users");
        let _ = respond_to.send(Ok(users));
    }
}
