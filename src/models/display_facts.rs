use serde::{Deserialize, Serialize};

/// Icon token for a player seat, derived from the active flags only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerIcon {
    #[serde(rename = "person")]
    Person,
    #[serde(rename = "person_outline")]
    PersonOutline,
}

impl PlayerIcon {
    pub fn for_active(active: bool) -> Self {
        if active {
            PlayerIcon::Person
        } else {
            PlayerIcon::PersonOutline
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerIcon::Person => "person",
            PlayerIcon::PersonOutline => "person_outline",
        }
    }
}

/// Viewer-relative facts for one render. Recomputed on every call,
/// never cached across renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFacts {
    pub status_text: String,
    pub player_1_active: bool,
    pub player_2_active: bool,
    pub player_1_icon: PlayerIcon,
    pub player_2_icon: PlayerIcon,
    pub created_label: String,
    pub last_move_label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_from_active_flag() {
        assert_eq!(PlayerIcon::for_active(true), PlayerIcon::Person);
        assert_eq!(PlayerIcon::for_active(false), PlayerIcon::PersonOutline);
    }

    #[test]
    fn test_icon_wire_names() {
        assert_eq!(
            serde_json::to_string(&PlayerIcon::Person).unwrap(),
            "\"person\""
        );
        assert_eq!(
            serde_json::to_string(&PlayerIcon::PersonOutline).unwrap(),
            "\"person_outline\""
        );
        assert_eq!(PlayerIcon::Person.as_str(), "person");
    }
}
