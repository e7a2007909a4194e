use tokio::sync::oneshot;
use crate::domain::{NewUser, UserRecord};
use crate::error::UserError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Messages understood by [`crate::actors::UserService`]. Each variant carries
/// its parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum RegistryRequest {
    CreateUser {
        new_user: NewUser,
        respond_to: ServiceResponse<UserRecord, UserError>,
    },
    GetUser {
        id: String,
        respond_to: ServiceResponse<Option<UserRecord>, UserError>,
    },
    ListUsers {
        respond_to: ServiceResponse<Vec<UserRecord>, UserError>,
    },
    CountUsers {
        respond_to: ServiceResponse<usize, UserError>,
    },
    Shutdown,
}
