use serde::{Deserialize, Serialize};

use super::win_rate;

/// Rating every player starts from before their first recorded game.
pub const INITIAL_RATING: f32 = 1500.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player: PlayerName,

    /// Record when playing on the builder side.
    pub builder_stats: RoleStats,

    /// Record when playing on the titan side.
    pub titan_stats: RoleStats,
}

impl PlayerStats {
    pub fn games(&self) -> u64 {
        self.builder_stats.games() + self.titan_stats.games()
    }

    /// True when the service has nothing recorded for the player beyond the
    /// defaults it fills in for unknown names.
    pub fn is_unranked(&self) -> bool {
        self.games() == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerName {
    pub name: String,
    pub realm: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleStats {
    pub rating: f32,
    pub wins: u32,
    pub losses: u32,
}

impl RoleStats {
    pub fn games(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    pub fn win_rate(&self) -> Option<f64> {
        win_rate(self.wins, self.losses)
    }
}

impl Default for RoleStats {
    fn default() -> Self {
        Self {
            rating: INITIAL_RATING,
            wins: 0,
            losses: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode() {
        let body = json!({
            "player": {"name": "Alice", "realm": "USEast"},
            "builder_stats": {"rating": 1612.5, "wins": 7, "losses": 3},
            "titan_stats": {"rating": 1500.0, "wins": 0, "losses": 0},
        });
        let stats: PlayerStats = serde_json::from_value(body).unwrap();
        assert_eq!(stats.player.name, "Alice");
        assert_eq!(stats.games(), 10);
        assert!(!stats.is_unranked());
        assert_eq!(stats.builder_stats.win_rate(), Some(70.0));
        assert_eq!(stats.titan_stats.win_rate(), None);
    }

    #[test]
    fn test_max_counts() {
        let body = json!({
            "player": {"name": "Veteran", "realm": "USWest"},
            "builder_stats": {"rating": 2400.0, "wins": u32::MAX, "losses": 1},
            "titan_stats": {"rating": 2200.0, "wins": u32::MAX, "losses": u32::MAX},
        });
        let stats: PlayerStats = serde_json::from_value(body).unwrap();
        assert_eq!(stats.builder_stats.games(), 1 << 32);
        assert_eq!(stats.titan_stats.games(), 2 * u64::from(u32::MAX));
        assert_eq!(stats.games(), (1 << 32) + 2 * u64::from(u32::MAX));
        assert!(stats.builder_stats.win_rate().unwrap() < 100.0);
        assert_eq!(stats.titan_stats.win_rate(), Some(50.0));
        assert!(!stats.is_unranked());
    }

    #[test]
    fn test_unranked() {
        let stats = PlayerStats {
            player: PlayerName {
                name: "Newcomer".to_owned(),
                realm: "Europe".to_owned(),
            },
            builder_stats: RoleStats::default(),
            titan_stats: RoleStats::default(),
        };
        assert!(stats.is_unranked());
        assert_eq!(stats.titan_stats.rating, INITIAL_RATING);
    }
}
