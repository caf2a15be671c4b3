use serde::{Deserialize, Serialize};

use super::win_rate;

/// Standings for both sides, best first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderBoard {
    pub builders: Vec<Standing>,
    pub titans: Vec<Standing>,
}

impl LeaderBoard {
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty() && self.titans.is_empty()
    }

    /// Builder standings paired with their 1-based rank.
    pub fn ranked_builders(&self) -> impl Iterator<Item = (usize, &Standing)> {
        self.builders.iter().enumerate().map(|(i, s)| (i + 1, s))
    }

    /// Titan standings paired with their 1-based rank.
    pub fn ranked_titans(&self) -> impl Iterator<Item = (usize, &Standing)> {
        self.titans.iter().enumerate().map(|(i, s)| (i + 1, s))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub realm: String,
    pub rating: f64,
    pub wins: i32,
    pub losses: i32,
    pub ties: i32,
}

impl Standing {
    pub fn games(&self) -> i64 {
        i64::from(self.wins) + i64::from(self.losses) + i64::from(self.ties)
    }

    pub fn win_rate(&self) -> Option<f64> {
        win_rate(self.wins, self.losses)
    }
}
