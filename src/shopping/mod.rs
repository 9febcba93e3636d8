pub mod catalog;
pub mod deriver;
mod dto;
pub mod handlers;
pub mod link;
pub mod list;
pub mod pantry;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::shopping_routes()
}
