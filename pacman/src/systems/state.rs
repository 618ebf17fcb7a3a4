use strum_macros::AsRefStr;

/// How a round ended, if it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
pub enum Outcome {
    #[default]
    InProgress,
    /// Every item on the maze was eaten.
    Won,
    /// The player ran out of lives.
    Lost,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Per-round progress readable by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundState {
    pub pellets_remaining: u32,
    pub level_index: usize,
    pub outcome: Outcome,
}

/// A resource to track the overall stage of the game from a high-level perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
pub enum GameStage {
    /// A layout is being parsed and entities placed. Nothing ticks.
    #[default]
    Loading,
    /// The main gameplay loop is active.
    InProgress,
    /// The last level was cleared and the session is over.
    Won,
    /// The game has ended.
    Lost,
}

impl GameStage {
    pub fn is_over(self) -> bool {
        matches!(self, GameStage::Won | GameStage::Lost)
    }
}
