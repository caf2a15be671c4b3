mod about;
mod fallback;
mod leader_board;
mod lobby;
mod privacy;

pub use about::About;
pub use fallback::Fallback;
pub use leader_board::LeaderBoard;
pub use lobby::Lobby;
pub use privacy::Privacy;
