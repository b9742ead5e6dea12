//! Display math for the signup counter
//!
//! Presentation only; the store's count is the source of truth.

/// Label shown when the count is unknown
pub const UNKNOWN_SPOTS_LABEL: &str = "Limited spots available";

/// Founding spots left, never below zero
pub fn spots_remaining(capacity: u64, claimed: u64) -> u64 {
    capacity.saturating_sub(claimed)
}

/// Share of founding spots claimed, as a whole percentage capped at 100
///
/// Halves round up. A zero capacity reads as 0%.
pub fn progress_percent(capacity: u64, claimed: u64) -> u8 {
    if capacity == 0 {
        return 0;
    }
    // round(claimed / capacity * 100) in integers
    let (capacity, claimed) = (u128::from(capacity), u128::from(claimed));
    let percent = (claimed * 200 + capacity) / (capacity * 2);
    percent.min(100) as u8
}

/// Text for the spots counter
pub fn spots_label(capacity: u64, claimed: Option<u64>) -> String {
    match claimed {
        Some(claimed) => format!("Spots remaining: {}", spots_remaining(capacity, claimed)),
        None => UNKNOWN_SPOTS_LABEL.to_string(),
    }
}
