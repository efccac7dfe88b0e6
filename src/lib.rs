pub mod domain;
pub mod errors;
pub mod models;
pub mod processing;
pub mod repository;

/// Minimum cosine similarity a scheme must strictly exceed to be recommended.
pub const SIMILARITY_THRESHOLD: f32 = 0.5;

/// Number of recommendations returned when the caller does not ask otherwise.
pub const DEFAULT_TOP_N: usize = 5;

/// State used in composed queries when the profile names none.
pub const DEFAULT_STATE: &str = "india";

/// Sentinel profile state meaning "see `customState`".
pub const OTHER_STATE: &str = "Other";
