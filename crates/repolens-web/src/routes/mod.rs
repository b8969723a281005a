mod explain;
mod health;
mod summary;

pub use explain::{explain_routes, ExplainRequest, ExplainResponse};
pub use health::health_routes;
pub use summary::{summary_routes, SummaryRequest, SummaryResponse, SUMMARY_FALLBACK};
