//! HTTP API module for the rota engine.
//!
//! A thin read-only surface over [`crate::rota::build_day_rota`] and
//! [`crate::rota::build_rota_range`].

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::RotaRangeQuery;
pub use response::{ApiError, RotaRangeResponse};
pub use state::{AppState, Clock};
