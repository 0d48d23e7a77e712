use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::{
    models::{
        display_facts::{DisplayFacts, PlayerIcon},
        game_record::{GameRecord, GameStatus},
    },
    services::{
        errors::status_service_errors::StatusServiceError, identity::IdentityProvider,
        time_service::RelativeTimeFormatter,
    },
};

/// Identifier characters shown when naming the other player.
const SHORT_NAME_LEN: usize = 6;

#[derive(Clone)]
pub struct StatusService {
    formatter: Arc<dyn RelativeTimeFormatter>,
}

impl StatusService {
    pub fn new(formatter: Arc<dyn RelativeTimeFormatter>) -> Self {
        StatusService { formatter }
    }

    /// Derive viewer-relative display facts from a game record snapshot.
    /// Never mutates the record; identical inputs yield identical facts.
    pub fn project(
        &self,
        record: &GameRecord,
        viewer: &str,
        now: DateTime<Utc>,
    ) -> Result<DisplayFacts, StatusServiceError> {
        let player_1 = record.player_one();
        let player_2 = record.player_two();

        if player_1.is_none() && player_2.is_some() {
            return Err(StatusServiceError::MalformedRecord(
                "player two seated while player one seat is empty".to_string(),
            ));
        }

        let status_text = status_text(player_1, player_2, record.status, viewer);

        // Turn/outcome display is only meaningful once both seats are filled.
        let fully_seated = record.is_fully_seated();
        let player_1_active =
            fully_seated && matches!(record.status, GameStatus::P1Next | GameStatus::P1Win);
        let player_2_active =
            fully_seated && matches!(record.status, GameStatus::P2Next | GameStatus::P2Win);

        let last_move_label = match (player_1, record.last_turn_time) {
            (Some(_), Some(last_turn)) => Some(self.formatter.relative(last_turn, now)),
            (Some(_), None) => {
                return Err(StatusServiceError::MissingTimestamp(
                    "last turn time absent after the first join".to_string(),
                ))
            }
            (None, _) => None,
        };

        Ok(DisplayFacts {
            status_text,
            player_1_active,
            player_2_active,
            player_1_icon: PlayerIcon::for_active(player_1_active),
            player_2_icon: PlayerIcon::for_active(player_2_active),
            created_label: self.formatter.relative(record.created_time, now),
            last_move_label,
        })
    }

    /// Resolve the viewer through the identity store. An absent identity
    /// projects as an observer.
    pub fn project_for(
        &self,
        record: &GameRecord,
        identity: &dyn IdentityProvider,
        now: DateTime<Utc>,
    ) -> Result<DisplayFacts, StatusServiceError> {
        let viewer = identity.current_identity().unwrap_or_default();
        self.project(record, &viewer, now)
    }

    /// Like `project`, but a malformed record degrades to renderable
    /// unknown-status facts instead of failing the host's render.
    pub fn project_or_fallback(
        &self,
        record: &GameRecord,
        viewer: &str,
        now: DateTime<Utc>,
    ) -> DisplayFacts {
        match self.project(record, viewer, now) {
            Ok(facts) => facts,
            Err(err) => {
                warn!("Projecting game {} fell back to unknown status: {}", record.game_type, err);
                DisplayFacts {
                    status_text: "Unknown game status".to_string(),
                    player_1_active: false,
                    player_2_active: false,
                    player_1_icon: PlayerIcon::PersonOutline,
                    player_2_icon: PlayerIcon::PersonOutline,
                    created_label: self.formatter.relative(record.created_time, now),
                    last_move_label: None,
                }
            }
        }
    }
}

fn status_text(
    player_1: Option<&str>,
    player_2: Option<&str>,
    status: GameStatus,
    viewer: &str,
) -> String {
    let p1 = match player_1 {
        Some(id) => id,
        None => return "Take a space to join the game as X".to_string(),
    };
    let p2 = match player_2 {
        Some(id) => id,
        None => {
            return if viewer == p1 {
                "Waiting for another player".to_string()
            } else {
                "Take a space to join the game as O".to_string()
            }
        }
    };

    match status {
        GameStatus::P1Next if viewer == p1 => "Your turn".to_string(),
        GameStatus::P1Next => format!("{}'s turn", short_name(p1)),
        GameStatus::P2Next if viewer == p2 => "Your turn".to_string(),
        GameStatus::P2Next => format!("{}'s turn", short_name(p2)),
        GameStatus::P1Win if viewer == p1 => "You won".to_string(),
        GameStatus::P1Win => format!("{} won", short_name(p1)),
        GameStatus::P2Win if viewer == p2 => "You won".to_string(),
        GameStatus::P2Win => format!("{} won", short_name(p2)),
        GameStatus::Tie => "Game resulted in a draw".to_string(),
    }
}

// Identities shorter than the display length pass through whole.
fn short_name(id: &str) -> String {
    id.chars().take(SHORT_NAME_LEN).collect()
}
