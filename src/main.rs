use tracing::{error, info, Instrument};
use user_registry::{setup_tracing, NewUser, RegistryConfig, RegistrySystem};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenv::dotenv().ok();
    setup_tracing();

    let config = RegistryConfig::from_env().map_err(|e| e.to_string())?;
    info!(connection = %config.connection(), "Starting user registry");

    let system = RegistrySystem::new(config);
    let client = system.user_client.clone();

    let span = tracing::info_span!("user_creation");
    let (alice, bob) = async {
        info!("Creating users");
        let alice = client
            .create_user(NewUser::new("Alice", 30).with_email("a@x.com"))
            .await
            .map_err(|e| e.to_string())?;
        let bob = client
            .create_user(NewUser::new("Bob", 25))
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((alice, bob))
    }
    .instrument(span)
    .await?;

    info!(user_id = %alice.id(), "Created Alice");
    info!(user_id = %bob.id(), "Created Bob");

    match client.create_user(NewUser::new("Carol", 151)).await {
        Ok(user) => error!(user_id = %user.id(), "Out-of-range age was accepted"),
        Err(e) => info!(error = %e, "Rejected invalid user as expected"),
    }

    let users = client.list_users().await.map_err(|e| e.to_string())?;
    for user in &users {
        info!(
            user_id = %user.id(),
            name = %user.name(),
            age = user.age(),
            email = user.email().unwrap_or("-"),
            created_at = %user.created_at(),
            "Listed user"
        );
    }

    let missing = client.get_user("zzz".to_string()).await.map_err(|e| e.to_string())?;
    info!(found = missing.is_some(), "Looked up unknown id");

    drop(client);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
