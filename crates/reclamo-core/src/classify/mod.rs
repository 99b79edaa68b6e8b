pub mod engine;
pub mod satisfaction;

pub use engine::{classify_category, classify_status, classify_status_degraded};
pub use satisfaction::estimate_satisfaction;
