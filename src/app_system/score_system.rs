use crate::actor_framework::ResourceActor;
use crate::clients::UserClient;
use crate::domain::User;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{error, info};

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct ScoreSystem {
    pub user_client: UserClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ScoreSystem {
    pub fn new() -> Self {
        let user_id_counter = Arc::new(AtomicU64::new(1));
        let next_user_id = move || {
            let id = user_id_counter.fetch_add(1, Ordering::SeqCst);
            format!("user_{}", id)
        };

        let (user_actor, user_resource_client) = ResourceActor::<User>::new(32, next_user_id);
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        Self {
            user_client,
            handles: vec![user_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // ResourceActor shuts down when its channel closes, so dropping the
        // clients is the shutdown signal.
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for ScoreSystem {
    fn default() -> Self {
        Self::new()
    }
}
