pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

// Re-export commonly used types
pub use domain::content;
pub use domain::user;
pub use inbound::http::router::create_router;
pub use inbound::http::router::AppState;
pub use outbound::repositories;
