//! HTTP layer: extractors, handlers, routes and the server builder

pub mod builder;
pub mod extract;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::{AppState, MessageResponse};
pub use router::{build_api_routes, build_health_routes};
