use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Game outcome/turn marker, written by the external move-validation layer.
/// This crate only classifies the current value, it never advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[serde(rename = "P1-NEXT")]
    P1Next,
    #[serde(rename = "P2-NEXT")]
    P2Next,
    #[serde(rename = "P1-WIN")]
    P1Win,
    #[serde(rename = "P2-WIN")]
    P2Win,
    #[serde(rename = "TIE")]
    Tie,
}

/// Shared game record, owned and mutated only by the external
/// synchronization layer. Read-only from this crate's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_type: String,
    #[serde(default)]
    pub player_1: Option<String>,
    #[serde(default)]
    pub player_2: Option<String>,
    pub status: GameStatus,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_time: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub last_turn_time: Option<DateTime<Utc>>,
}

impl GameRecord {
    /// Player one's identifier, treating an empty string as an unclaimed seat.
    pub fn player_one(&self) -> Option<&str> {
        self.player_1.as_deref().filter(|id| !id.is_empty())
    }

    /// Player two's identifier, treating an empty string as an unclaimed seat.
    pub fn player_two(&self) -> Option<&str> {
        self.player_2.as_deref().filter(|id| !id.is_empty())
    }

    pub fn is_fully_seated(&self) -> bool {
        self.player_one().is_some() && self.player_two().is_some()
    }
}
