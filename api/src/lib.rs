pub mod callback;
pub mod client;
pub mod config;
pub mod consts;
pub mod endpoint;
pub mod error;
pub mod route;
pub mod snapshot;
pub mod state;
pub mod transport;

pub mod prelude {
    pub use crate::callback::*;
    pub use crate::client::*;
    pub use crate::config::*;
    pub use crate::consts::*;
    pub use crate::endpoint::*;
    pub use crate::error::*;
    pub use crate::route::*;
    pub use crate::snapshot::*;
    pub use crate::state::*;
    pub use crate::transport::*;
}
