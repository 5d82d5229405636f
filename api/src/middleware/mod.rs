mod metrics;
mod recovery;

pub use metrics::track_metrics;
pub use recovery::handle_panic;
