use tracing::{error, info};
use crate::actors::UserService;
use crate::clients::UserClient;
use crate::config::RegistryConfig;
use crate::registry::UserRegistry;

const CHANNEL_BUFFER: usize = 32;

/// Starts the registry actor and owns its task.
///
/// Must be created from inside a tokio runtime.
pub struct RegistrySystem {
    pub user_client: UserClient,
    handle: tokio::task::JoinHandle<()>,
}

impl RegistrySystem {
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_registry(UserRegistry::new(config))
    }

    /// Serves an already built registry, e.g. one with a custom id generator.
    pub fn with_registry(registry: UserRegistry) -> Self {
        info!("Starting registry system");
        let (service, user_client) = UserService::new(CHANNEL_BUFFER, registry);
        let handle = tokio::spawn(service.run());
        Self { user_client, handle }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // The actor may already be gone if every other client was dropped.
        if let Err(e) = self.user_client.shutdown().await {
            info!(error = %e, "Service already stopped");
        }
        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
