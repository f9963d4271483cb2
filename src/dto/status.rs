use super::level::Level;
use crate::gesture::Gesture;
use crate::round::Winner;
use serde::Deserialize;
use serde::Serialize;

/// Snapshot returned by `GET /state`.
///
/// The simple backend only sends the first five fields; everything is
/// defaulted so both shapes decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    /// absent from the simple backend, which counts down unprompted
    pub armed: Option<bool>,
    /// goes below zero for a moment while the backend locks the round
    pub countdown: i32,
    pub game_started: bool,
    pub user_choice: Option<Gesture>,
    pub computer_choice: Option<Gesture>,
    /// "You Win!", "Computer Wins!" or "Draw"
    pub winner: Option<String>,
    pub round_result: Option<RoundInfo>,
    pub game_status: GameStatus,
}

/// Best-of-N game tracked by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStatus {
    pub level: Level,
    pub round: u32,
    pub max_rounds: u32,
    pub player_score: u32,
    pub computer_score: u32,
    pub game_completed: bool,
    pub game_winner: Option<String>,
    pub round_history: Vec<RoundInfo>,
}

impl Default for GameStatus {
    fn default() -> Self {
        Self {
            level: Level::default(),
            round: 0,
            max_rounds: 3,
            player_score: 0,
            computer_score: 0,
            game_completed: false,
            game_winner: None,
            round_history: Vec::new(),
        }
    }
}

/// One finished round as the backend records it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundInfo {
    pub round: u32,
    #[serde(default)]
    pub user_choice: Option<Gesture>,
    #[serde(default)]
    pub computer_choice: Option<Gesture>,
    pub result: Winner,
    /// running score after this round, "player-computer"
    #[serde(default)]
    pub score: String,
}

impl Status {
    /// counting down on the backend, choices not yet locked
    pub fn counting(&self) -> bool {
        self.armed.unwrap_or(true) && !self.game_started
    }
}

impl std::fmt::Display for RoundInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let shown = |g: Option<Gesture>| g.map_or("-".to_string(), |g| g.to_string());
        write!(
            f,
            "#{} {} vs {} -> {} ({})",
            self.round,
            shown(self.user_choice),
            shown(self.computer_choice),
            self.result,
            self.score
        )
    }
}
