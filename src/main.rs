mod actor_framework;
mod app_system;
mod clients;
mod domain;
mod user_actor;

#[cfg(test)]
mod mock_framework;

use crate::app_system::{setup_tracing, ScoreSystem};
use crate::domain::User;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting score-keeping system");

    let system = ScoreSystem::new();

    // Scenario 1: Fred starts at 0 and scores once.
    let span = tracing::info_span!("fred_scenario");
    async {
        info!("Creating user Fred");
        let fred_id = system
            .user_client
            .create_user(User::new("Fred", 0))
            .await
            .map_err(|e| e.to_string())?;
        info!(user_id = %fred_id, "User created successfully");

        let score = system
            .user_client
            .increment_score(fred_id.clone())
            .await
            .map_err(|e| e.to_string())?;
        info!(user_id = %fred_id, score, "Score incremented");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Scenario 2: Ann starts at 5 and scores three times.
    let span = tracing::info_span!("ann_scenario");
    async {
        info!("Creating user Ann");
        let ann_id = system
            .user_client
            .create_user(User::new("Ann", 5))
            .await
            .map_err(|e| e.to_string())?;
        info!(user_id = %ann_id, "User created successfully");

        for _ in 0..3 {
            let score = system
                .user_client
                .increment_score(ann_id.clone())
                .await
                .map_err(|e| e.to_string())?;
            info!(user_id = %ann_id, score, "Score incremented");
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
