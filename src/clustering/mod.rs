// Module declarations
pub mod assignment;
pub mod merging;
pub mod relatedness;
pub mod types;

pub use types::*;

pub use assignment::cluster;
pub use merging::{merge, merge_all};
pub use relatedness::{related, tokenize, STOP_WORDS};

/// Minimum connection strength for a keyword to form or join a cluster (inclusive)
pub const DEFAULT_CONNECTION_THRESHOLD: f64 = 0.3;
