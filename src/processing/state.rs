//! Resolution of free-form state names to canonical state keys.

use crate::errors::{RecommenderError, RecommenderResult};

/// Display name and canonical key of every supported state.
///
/// Order matters: an input naming two states resolves to the one listed
/// first. Matching is by substring, so an input that merely contains a
/// state's name (or key) resolves to that state.
pub const STATES: &[(&str, &str)] = &[
    ("andhra pradesh", "andhrapradesh"),
    ("arunachal pradesh", "arunachalpradesh"),
    ("assam", "assam"),
    ("bihar", "bihar"),
    ("chhattisgarh", "chhattisgarh"),
    ("goa", "goa"),
    ("gujarat", "gujarat"),
    ("haryana", "haryana"),
    ("himachal pradesh", "himachalpradesh"),
    ("jharkhand", "jharkhand"),
    ("karnataka", "karnataka"),
    ("kerala", "kerala"),
    ("madhya pradesh", "madhyapradesh"),
    ("maharashtra", "maharashtra"),
    ("manipur", "manipur"),
    ("meghalaya", "meghalaya"),
    ("mizoram", "mizoram"),
    ("nagaland", "nagaland"),
    ("odisha", "odisha"),
    ("punjab", "punjab"),
    ("rajasthan", "rajasthan"),
    ("sikkim", "sikkim"),
    ("tamil nadu", "tamilnadu"),
    ("telangana", "telangana"),
    ("tripura", "tripura"),
    ("uttar pradesh", "uttarpradesh"),
    ("uttarakhand", "uttarakhand"),
    ("west bengal", "westbengal"),
];

/// Lowercases and drops hyphens and spaces, so `"Tamil-Nadu"`,
/// `"tamil nadu"` and `"TAMILNADU"` all become `"tamilnadu"`.
pub fn normalize_state(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| *c != '-' && *c != ' ')
        .collect()
}

/// Returns the canonical key of the first state mentioned in `input`.
///
/// `None` is a regular outcome: callers decide whether it means "no state
/// filter" or a rejected request.
pub fn resolve(input: &str) -> Option<&'static str> {
    let normalized = normalize_state(input);
    if normalized.is_empty() {
        return None;
    }

    STATES
        .iter()
        .find(|(display, canonical)| {
            normalized.contains(&display.replace(' ', "")) || normalized.contains(canonical)
        })
        .map(|(_, canonical)| *canonical)
}

/// Like [`resolve`], but treats an unknown state as an error.
pub fn resolve_required(input: &str) -> RecommenderResult<&'static str> {
    resolve(input).ok_or_else(|| RecommenderError::StateNotResolved(input.to_string()))
}
