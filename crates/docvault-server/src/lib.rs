pub mod openapi;
pub mod routes;
pub mod state;

// Re-export commonly used items
pub use openapi::*;
pub use state::*;
