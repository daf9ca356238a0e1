pub mod clustering;
pub mod environment;
pub mod keyword;
pub mod logging;
pub mod provider;
pub mod topical_map;

pub use clustering::{cluster, merge, merge_all, Cluster, TopicalMapResult};
pub use keyword::{difficulty_label, DifficultyLabel, KeywordRecord};
pub use provider::{DataForSeoClient, KeywordProvider, StaticProvider};
pub use topical_map::{generate_topical_map, MapOptions};

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_CLUSTERING: &str = "clustering";
