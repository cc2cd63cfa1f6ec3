//! HTTP API: routes, state, handlers, middleware and extractors.

pub mod extractors;
pub mod handlers;
pub mod middleware;
mod openapi;
mod routes;
mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
