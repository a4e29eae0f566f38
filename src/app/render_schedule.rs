//! Pure functions for calculating redraw deadlines.
//!
//! The UI layer uses the returned deadline to schedule a wake-up when no
//! input arrives.

use std::time::{Duration, Instant};

use crate::app::state::AppState;

/// Interval for the "Validating" spinner while a submission is in flight.
const SPINNER_INTERVAL: Duration = Duration::from_millis(150);

/// Returns `None` when nothing animates and the loop can wait for input.
pub fn next_animation_deadline(state: &AppState, now: Instant) -> Option<Instant> {
    let mut earliest: Option<Instant> = None;

    if state.form.is_submitting() {
        earliest = min_instant(earliest, Some(now + SPINNER_INTERVAL));
    }

    if let Some(expires_at) = state.messages.expires_at {
        earliest = min_instant(earliest, Some(expires_at));
    }

    earliest
}

fn min_instant(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
