use crate::actor_framework::ResourceClient;
use crate::domain::{User, UserCreate, UserPatch};
use crate::user_actor::{ScoreAction, ScoreActionResult, UserError};
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    // Custom create method as it needs specific payload conversion

    #[instrument(skip(self))]
    pub async fn create_user(&self, user: User) -> Result<String, UserError> {
        debug!("Sending request");
        // Adapter: Convert the plain User struct to UserCreate params
        let params = UserCreate {
            name: user.name,
            score: user.score,
        };
        self.inner.create(params).await.map_err(UserError::from)
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn update_user(&self, id: String, patch: UserPatch) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(UserError::from)
    }

    /// Bumps the user's score by 1 and returns the new score.
    #[instrument(skip(self))]
    pub async fn increment_score(&self, id: String) -> Result<i64, UserError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(id, ScoreAction::Increment)
            .await
            .map_err(UserError::from)?;
        let ScoreActionResult::Score(score) = result;
        Ok(score)
    }
}
