//! Top-K selection over a prediction result.

use crate::domain::{NameTable, PredictionResult};
use crate::error::AppError;

/// A resolved class name with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub name: String,
    pub score: f32,
}

/// Highest-scoring entries, best first.
pub type TopKSelection = Vec<RankedEntry>;

/// Resolve every label, sort by score descending and keep the first `k`.
///
/// Equal scores keep their original order; `-0.0` and `0.0` count as equal.
/// Scores are compared with `f32::total_cmp`, so a NaN built directly into a
/// `PredictionResult` cannot break the sort: a positive NaN ranks first, a
/// negative NaN last. Every label is resolved before truncation, so an unknown
/// label anywhere in the result fails the call.
///
/// # Errors
/// `Lookup` for the first label missing from `table`.
pub fn rank(
    result: &PredictionResult,
    table: &NameTable,
    k: usize,
) -> Result<TopKSelection, AppError> {
    let mut resolved = result
        .entries
        .iter()
        .map(|entry| {
            Ok(RankedEntry {
                name: table.resolve(entry.label)?.to_string(),
                score: entry.score,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    // sort_by is stable
    resolved.sort_by(|a, b| sort_key(b.score).total_cmp(&sort_key(a.score)));
    resolved.truncate(k);
    Ok(resolved)
}

/// `total_cmp` orders `-0.0` below `0.0`; fold it so both tie.
fn sort_key(score: f32) -> f32 {
    if score == 0.0 { 0.0 } else { score }
}
