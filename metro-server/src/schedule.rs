//! Scheduled-wait estimation from the time of day.
//!
//! Trains run every 5 minutes during the morning and evening peaks and
//! every 15 minutes otherwise. The wait until the next departure is the
//! gap to the next slot on that cadence.

use std::fmt;

use chrono::{NaiveTime, Timelike};

/// Departure cadence during peak hours, in minutes.
pub const PEAK_FREQUENCY_MINS: u32 = 5;

/// Departure cadence outside peak hours, in minutes.
pub const OFF_PEAK_FREQUENCY_MINS: u32 = 15;

/// Crowding status, a pure function of the hour band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Peak,
    OffPeak,
}

impl ServiceStatus {
    /// Human-readable crowding label.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Peak => "crowded",
            ServiceStatus::OffPeak => "seats available",
        }
    }

    /// Departure cadence for this band.
    pub fn frequency_mins(&self) -> u32 {
        match self {
            ServiceStatus::Peak => PEAK_FREQUENCY_MINS,
            ServiceStatus::OffPeak => OFF_PEAK_FREQUENCY_MINS,
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wait estimate for the next departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitEstimate {
    /// Minutes until the next departure, in `1..=frequency`.
    pub wait_minutes: u32,

    /// Crowding status for the current hour band.
    pub status: ServiceStatus,
}

/// Peak hours are 08:00-11:59 and 17:00-20:59.
fn is_peak(hour: u32) -> bool {
    (8..=11).contains(&hour) || (17..=20).contains(&hour)
}

/// Estimate the wait for the next departure at the given time.
///
/// The next slot is the next multiple of the cadence after the current
/// minute; a minute that is itself an exact multiple waits a full cadence,
/// never zero.
pub fn estimate_wait(now: NaiveTime) -> WaitEstimate {
    let status = if is_peak(now.hour()) {
        ServiceStatus::Peak
    } else {
        ServiceStatus::OffPeak
    };

    let frequency = status.frequency_mins();
    let minute = now.minute();
    let next_slot = (minute / frequency + 1) * frequency;

    WaitEstimate {
        wait_minutes: next_slot - minute,
        status,
    }
}
