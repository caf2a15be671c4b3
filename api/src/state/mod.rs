mod leaderboard;
mod lobby;
mod player;

pub use leaderboard::*;
pub use lobby::*;
pub use player::*;

/// Win share in percent, `None` when no game was decided.
///
/// Counts come straight from the service, so they are widened before summing.
pub(crate) fn win_rate(wins: impl Into<i64>, losses: impl Into<i64>) -> Option<f64> {
    let (wins, losses) = (wins.into(), losses.into());
    let decided = wins + losses;
    if decided <= 0 {
        return None;
    }
    Some(wins as f64 * 100.0 / decided as f64)
}
