//! Progress rollups.
//!
//! All results are whole percentages in `[0, 100]`. Rounding is half away
//! from zero, so `62.5` becomes `63`.

use crate::status::Status;

/// Score contributed by an approved part.
pub const SCORE_APPROVED: f64 = 100.0;

/// Score contributed by a part that is still in progress.
pub const SCORE_IN_PROGRESS: f64 = 50.0;

/// Clamp a raw percentage into `[0, 100]` without rounding. NaN becomes 0.
pub fn bound_progress(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Round a raw percentage and clamp it into `[0, 100]`. NaN becomes 0.
pub fn clamp_progress(value: f64) -> u8 {
    bound_progress(value).round() as u8
}

/// Plain mean of raw child progress values, rounded once at the end.
/// Every child counts equally and each value is bounded before averaging.
///
/// Returns 0 for an empty slice.
pub fn unweighted_mean(values: &[f64]) -> u8 {
    clamp_progress(mean(values.iter().map(|v| bound_progress(*v))))
}

/// Score of a single part for weighted completion.
pub fn part_score(status: Status) -> f64 {
    match status {
        Status::Approved => SCORE_APPROVED,
        Status::InProgress => SCORE_IN_PROGRESS,
        Status::NotStarted | Status::Done => 0.0,
    }
}

/// Weighted completion of a deliverable from `(status, weight)` pairs.
///
/// Each part contributes `part_score * weight / total_weight`. When the total
/// weight is zero the result is 0 regardless of how many parts there are.
/// Negative and non-finite weights count as zero.
pub fn weighted_completion(parts: &[(Status, f64)]) -> u8 {
    let total: f64 = parts.iter().map(|(_, w)| sanitize_weight(*w)).sum();
    if total <= 0.0 {
        return 0;
    }
    let score: f64 = parts
        .iter()
        .map(|(status, w)| part_score(*status) * (sanitize_weight(*w) / total))
        .sum();
    clamp_progress(score)
}

/// Project-wide progress: the mean of the phase mean and the deliverable
/// mean, each 0 when its collection is empty.
///
/// Phases and deliverables weigh the same no matter how many of each the
/// project has. The sub-means are not rounded before combining.
pub fn overall_progress(phase_progress: &[u8], deliverable_progress: &[u8]) -> u8 {
    let phases = mean(phase_progress.iter().map(|v| f64::from(*v)));
    let deliverables = mean(deliverable_progress.iter().map(|v| f64::from(*v)));
    clamp_progress((phases + deliverables) / 2.0)
}

/// `completed / total` as a whole percentage; 0 when `total` is 0.
pub fn completion_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    clamp_progress(completed as f64 / total as f64 * 100.0)
}

/// Weight-based variant of [`completion_rate`].
pub fn weight_completion_rate(completed: f64, total: f64) -> u8 {
    if total <= 0.0 {
        return 0;
    }
    clamp_progress(completed / total * 100.0)
}

/// Weights that cannot meaningfully contribute are treated as zero.
pub fn sanitize_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
