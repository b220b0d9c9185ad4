// Custom actions for User
#[derive(Debug, Clone)]
pub enum ScoreAction {
    Increment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScoreActionResult {
    /// The score after the action was applied.
    Score(i64),
}
