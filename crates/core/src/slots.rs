//! # Slot Generator
//!
//! Computes the bookable start times for one day: given the day's working
//! hours, an optional lunch break, the intervals already occupied by
//! scheduled appointments, and the requested service duration, it returns
//! the ordered list of "HH:MM" start times that fit.
//!
//! ## Algorithm
//!
//! All clock values are converted to integer minutes since midnight, then a
//! single cursor sweeps the day:
//!
//! 1. Booked intervals are sorted by start time (the input may be unsorted
//!    and may even contain overlapping ranges).
//! 2. For each booked interval in order, the gap between the cursor and the
//!    interval start is offered as at most one candidate slot — the
//!    earliest-fitting one. The cursor then jumps to the end of the
//!    interval. `max` keeps the cursor monotonic, so overlapping or
//!    out-of-order bookings degrade gracefully instead of rewinding time.
//! 3. Past the last booking, candidates are proposed on a fixed 30-minute
//!    grid until the service would run past closing time.
//!
//! Every candidate is additionally checked against the lunch interval: a
//! slot may end exactly when lunch starts or begin exactly when it ends,
//! but must not overlap it.
//!
//! Gaps before a booking yield a single earliest-fit slot while the tail of
//! the day is enumerated every 30 minutes. Callers depend on this exact
//! output, so the asymmetry is kept as-is.
//!
//! The generator is total: any structurally valid input produces a (possibly
//! empty) list, never an error. Validation of the inputs — active schedule,
//! existing service, positive duration, status filtering of appointments —
//! is the caller's job.

use crate::errors::{BookingError, BookingResult};

/// Grid step for slots proposed after the last booked interval.
pub const SLOT_STEP_MINUTES: u32 = 30;

/// One day's working window in minutes since midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingHours {
    pub start: u32,
    pub end: u32,
    /// `(lunch_start, lunch_end)`, both inside the working window.
    pub lunch: Option<(u32, u32)>,
}

/// The occupied range of one scheduled appointment, in minutes since
/// midnight. `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedInterval {
    pub start: u32,
    pub end: u32,
}

/// Parses an "HH:MM" clock string into minutes since midnight.
///
/// The format contract is intentionally loose in the same way the rest of
/// the system is: the string is split on `:` and both fields are read as
/// unsigned integers, so "9:30" and "09:30" both parse to 570.
pub fn time_to_minutes(value: &str) -> BookingResult<u32> {
    let mut parts = value.splitn(2, ':');
    let hours = parts
        .next()
        .and_then(|p| p.trim().parse::<u32>().ok())
        .ok_or_else(|| BookingError::Validation(format!("Invalid time value: {value}")))?;
    let minutes = parts
        .next()
        .and_then(|p| p.trim().parse::<u32>().ok())
        .ok_or_else(|| BookingError::Validation(format!("Invalid time value: {value}")))?;

    Ok(hours * 60 + minutes)
}

/// Renders minutes since midnight back to a zero-padded "HH:MM" string.
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Returns the ordered "HH:MM" start times at which a service of
/// `duration` minutes can be booked.
pub fn generate_slots(
    hours: &WorkingHours,
    booked: &[BookedInterval],
    duration: u32,
) -> Vec<String> {
    let mut intervals = booked.to_vec();
    intervals.sort_by_key(|interval| interval.start);

    let mut slots = Vec::new();
    let mut current = hours.start;

    // Gaps before each booking: at most the earliest-fitting slot each.
    for interval in &intervals {
        if current + duration <= interval.start && clears_lunch(hours, current, duration) {
            slots.push(minutes_to_time(current));
        }
        // Never move the cursor backwards, even for overlapping bookings.
        current = current.max(interval.end);
    }

    // Tail of the day: fixed 30-minute grid until closing.
    while current + duration <= hours.end {
        if clears_lunch(hours, current, duration) {
            slots.push(minutes_to_time(current));
        }
        current += SLOT_STEP_MINUTES;
    }

    slots
}

/// A candidate `[start, start + duration)` is acceptable when lunch is
/// absent, ends by the time lunch begins, or starts once lunch is over.
fn clears_lunch(hours: &WorkingHours, start: u32, duration: u32) -> bool {
    match hours.lunch {
        Some((lunch_start, lunch_end)) => start + duration <= lunch_start || start >= lunch_end,
        None => true,
    }
}
