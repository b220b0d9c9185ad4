use super::actions::{ScoreAction, ScoreActionResult};
use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{User, UserCreate, UserPatch};

impl Entity for User {
    type Id = String;
    type CreateParams = UserCreate;
    type Patch = UserPatch;
    type Action = ScoreAction;
    type ActionResult = ScoreActionResult;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: UserCreate) -> Result<Self, FrameworkError> {
        Ok(Self {
            id,
            name: params.name,
            score: params.score,
        })
    }

    /// Updates the user's profile information. The score is not patchable;
    /// it only moves through [`ScoreAction::Increment`].
    fn on_update(&mut self, patch: UserPatch) -> Result<(), FrameworkError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: ScoreAction) -> Result<ScoreActionResult, FrameworkError> {
        match action {
            ScoreAction::Increment => {
                self.increment_score();
                Ok(ScoreActionResult::Score(self.score))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_accepts_any_values() {
        let user =
            User::from_create_params("user_1".into(), UserCreate { name: "".into(), score: -40 })
                .unwrap();
        assert_eq!(user.id, "user_1");
        assert_eq!(user.name, "");
        assert_eq!(user.score, -40);
    }

    #[test]
    fn increment_action_reports_new_score() {
        let mut user =
            User::from_create_params("user_1".into(), UserCreate { name: "Fred".into(), score: 0 })
                .unwrap();

        let result = user.handle_action(ScoreAction::Increment).unwrap();
        assert_eq!(result, ScoreActionResult::Score(1));
        assert_eq!(user.score, 1);
    }

    #[test]
    fn patch_renames_without_touching_score() {
        let mut user =
            User::from_create_params("user_1".into(), UserCreate { name: "Ann".into(), score: 5 })
                .unwrap();

        user.on_update(UserPatch { name: Some("Anne".into()) }).unwrap();
        assert_eq!(user.name, "Anne");
        assert_eq!(user.score, 5);
    }
}
