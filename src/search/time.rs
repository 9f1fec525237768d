//! Per-move time budget computation (§4.G iterative-deepening shell, step 1).

use std::time::Duration;

const MIN_BUDGET_MS: u64 = 10;
const DEFAULT_MOVES_TO_GO: u32 = 30;
const INCREMENT_WEIGHT: f64 = 0.8;

/// Generous fallback when the driver gives no time information at all
/// (depth-only `go`, or `go infinite` callers that still want a backstop).
const FALLBACK_BUDGET_MS: u64 = 5_000;

/// The subset of `go` parameters relevant to time allocation.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeControl {
    pub movetime: Option<Duration>,
    pub remaining: Option<Duration>,
    pub increment: Duration,
    pub moves_to_go: Option<u32>,
}

/// Computes the search's time budget for one `go` (§4.G step 1).
#[must_use]
pub fn compute_budget(tc: TimeControl) -> Duration {
    if let Some(movetime) = tc.movetime {
        return movetime;
    }
    let Some(remaining) = tc.remaining else {
        return Duration::from_millis(FALLBACK_BUDGET_MS);
    };
    let moves_to_go = tc.moves_to_go.unwrap_or(DEFAULT_MOVES_TO_GO).max(1) as f64;
    let remaining_ms = remaining.as_millis() as f64;
    let inc_ms = tc.increment.as_millis() as f64;
    let allocated_ms = remaining_ms / moves_to_go + INCREMENT_WEIGHT * inc_ms;
    let max_ms = remaining_ms / 3.0;
    let clamped = allocated_ms.clamp(MIN_BUDGET_MS as f64, max_ms.max(MIN_BUDGET_MS as f64));
    Duration::from_millis(clamped as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movetime_is_used_verbatim() {
        let tc = TimeControl { movetime: Some(Duration::from_millis(250)), ..Default::default() };
        assert_eq!(compute_budget(tc), Duration::from_millis(250));
    }

    #[test]
    fn no_time_info_falls_back_to_a_generous_default() {
        assert_eq!(compute_budget(TimeControl::default()), Duration::from_millis(FALLBACK_BUDGET_MS));
    }

    #[test]
    fn budget_never_exceeds_a_third_of_remaining_time() {
        let tc = TimeControl {
            remaining: Some(Duration::from_millis(3_000)),
            increment: Duration::from_millis(0),
            moves_to_go: Some(1),
            ..Default::default()
        };
        let budget = compute_budget(tc);
        assert!(budget <= Duration::from_millis(1_000));
    }

    #[test]
    fn budget_respects_the_floor_when_time_is_nearly_gone() {
        let tc = TimeControl {
            remaining: Some(Duration::from_millis(5)),
            increment: Duration::from_millis(0),
            moves_to_go: Some(30),
            ..Default::default()
        };
        assert_eq!(compute_budget(tc), Duration::from_millis(MIN_BUDGET_MS));
    }

    #[test]
    fn increment_adds_to_the_allocation() {
        let base = TimeControl {
            remaining: Some(Duration::from_millis(30_000)),
            increment: Duration::from_millis(0),
            moves_to_go: Some(30),
            ..Default::default()
        };
        let with_inc = TimeControl { increment: Duration::from_millis(1_000), ..base };
        assert!(compute_budget(with_inc) > compute_budget(base));
    }
}
