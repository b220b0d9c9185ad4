/// A player in the score-keeping system.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub score: i64,
}

/// Params for creating a new user. Any name and starting score are accepted;
/// nothing is validated.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub score: i64,
}

/// Params for updating an existing user.
///
/// There is deliberately no score field here: the score only ever changes by
/// +1 through [`User::increment_score`].
#[derive(Debug, Clone)]
pub struct UserPatch {
    pub name: Option<String>,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `name` - User's display name
    /// * `score` - Starting score
    ///
    /// # Notes
    /// The `id` field is initialized as an empty string and will be set by the actor system.
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            score,
        }
    }

    /// Adds 1 to this user's score. The name is never touched.
    pub fn increment_score(&mut self) {
        self.score += 1;
    }
}
