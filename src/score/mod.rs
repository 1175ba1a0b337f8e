pub mod store;

pub use store::{JsonFileStore, MemoryStore, ScoreStore, HIGH_SCORE_KEY};
