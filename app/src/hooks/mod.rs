mod remote;
mod use_leader_board;
mod use_lobby;
mod use_player;

pub use use_leader_board::use_leader_board;
pub use use_lobby::use_lobby;
pub use use_player::use_player;
