//! HTTP adapter for the Journey trip planner.
//!
//! Decodes requests, calls into [`journey_core`], and maps the results to
//! status codes and JSON bodies. No business rules live here.

pub mod response;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
