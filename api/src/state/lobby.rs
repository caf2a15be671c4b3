use serde::{Deserialize, Serialize};

use super::win_rate;

/// The game currently being hosted, split into its two sides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lobby {
    pub builders: Team,
    pub titans: Team,
}

impl Lobby {
    pub fn player_count(&self) -> usize {
        self.builders.players.len() + self.titans.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.player_count() == 0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub players: Vec<LobbySlot>,

    /// Aggregate rating of everyone on the team.
    pub team_rating: Rating,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LobbySlot {
    /// Lobby slot the player occupies.
    pub slot: u8,

    pub name: String,

    /// Battle.net realm the player is registered on.
    pub realm: String,

    pub rating: Rating,

    pub wins: i32,
    pub losses: i32,
    pub ties: i32,
}

impl LobbySlot {
    pub fn games(&self) -> i64 {
        i64::from(self.wins) + i64::from(self.losses) + i64::from(self.ties)
    }

    pub fn win_rate(&self) -> Option<f64> {
        win_rate(self.wins, self.losses)
    }
}

/// Rating together with what the next game may change it by.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub mean_rating: f64,
    pub potential_gain: f64,
    pub potential_loss: f64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn slot(slot: u8, name: &str) -> serde_json::Value {
        json!({
            "slot": slot,
            "name": name,
            "realm": "USEast",
            "rating": {"mean_rating": 1520.5, "potential_gain": 12.0, "potential_loss": 9.5},
            "wins": 3,
            "losses": 1,
            "ties": 0,
        })
    }

    #[test]
    fn test_decode() {
        let body = json!({
            "builders": {
                "players": [slot(1, "Alice"), slot(2, "Bob")],
                "team_rating": {"mean_rating": 1500.0, "potential_gain": 10.0, "potential_loss": 10.0},
            },
            "titans": {
                "players": [slot(11, "Titan")],
                "team_rating": {"mean_rating": 1600.0, "potential_gain": 8.0, "potential_loss": 14.0},
            },
        });
        let lobby: Lobby = serde_json::from_value(body).unwrap();
        assert_eq!(lobby.player_count(), 3);
        assert!(!lobby.is_empty());
        assert_eq!(lobby.builders.players[1].name, "Bob");
        assert_eq!(lobby.titans.players[0].slot, 11);
        assert_eq!(lobby.titans.team_rating.potential_loss, 14.0);
        assert_eq!(lobby.builders.players[0].win_rate(), Some(75.0));
        assert_eq!(lobby.builders.players[0].games(), 4);
    }

    #[test]
    fn test_extreme_counts() {
        let mut busy = slot(3, "Busy");
        busy["wins"] = json!(i32::MAX);
        busy["losses"] = json!(i32::MAX);
        busy["ties"] = json!(i32::MAX);
        let busy: LobbySlot = serde_json::from_value(busy).unwrap();
        assert_eq!(busy.games(), 3 * i64::from(i32::MAX));
        assert_eq!(busy.win_rate(), Some(50.0));

        let mut odd = slot(4, "Odd");
        odd["wins"] = json!(-1);
        let odd: LobbySlot = serde_json::from_value(odd).unwrap();
        assert_eq!(odd.wins, -1);
        assert_eq!(odd.games(), 0);
        assert_eq!(odd.win_rate(), None);
    }
}
