pub mod difficulty;
pub mod types;

pub use difficulty::{difficulty_label, DifficultyLabel};
pub use types::{KeywordRecord, SUGGESTION_CONNECTION_STRENGTH};
