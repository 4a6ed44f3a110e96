//! Web layer for the route server.
//!
//! Provides HTTP/JSON endpoints for finding routes and summarising
//! networks.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
