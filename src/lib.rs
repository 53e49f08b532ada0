pub mod cache;
pub mod core;
pub mod edgar;
pub mod server;

// Re-exports
pub use cache::FreshnessCache;
pub use server::AppState;
