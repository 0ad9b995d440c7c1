//! Bucket token generation
//!
//! The output is always split into [`BUCKET_COUNT`] buckets named `S01`
//! through `S100`. A placemark lands in every bucket whose token appears
//! as a substring of its `<name>`; the tokens themselves are not mutually
//! exclusive (`S10` matches a name containing `S100`).

/// Number of output buckets
pub const BUCKET_COUNT: u32 = 100;

/// Format the token for a 1-based bucket index.
///
/// Indices below 10 are zero-padded: `S01`..`S09`, then `S10`..`S100`.
///
/// # Panics
///
/// Panics if `index` is outside `1..=BUCKET_COUNT`.
#[must_use]
pub fn bucket_token(index: u32) -> String {
    assert!(
        (1..=BUCKET_COUNT).contains(&index),
        "bucket index {index} out of range"
    );
    format!("S{index:02}")
}

/// Enumerate all bucket tokens in ascending bucket order.
pub fn bucket_tokens() -> impl Iterator<Item = String> {
    (1..=BUCKET_COUNT).map(bucket_token)
}
