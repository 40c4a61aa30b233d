//! Client-side countdown state machine

use crate::state::TimerRecord;

/// The three states a countdown client moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Active,
    Finished,
}

/// One re-derivation of the countdown against the clock.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    pub phase: TimerPhase,
    pub remaining_ms: i64,
    pub total_ms: i64,
    /// True exactly once per run, on the tick that observes the finish
    pub fire_alarm: bool,
}

/// Tracks the last-known record and derives the countdown from it on every
/// tick. The alarm is latched per run: it fires once when the deadline is
/// first observed, including when the first observation of a run is already
/// past its deadline, and re-arms when a record with a new start appears.
#[derive(Debug, Default)]
pub struct Countdown {
    record: Option<TimerRecord>,
    alarm_fired: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb a server observation of the timer slot.
    pub fn sync(&mut self, record: Option<TimerRecord>) {
        let same_run = matches!(
            (&self.record, &record),
            (Some(old), Some(new)) if old.started_at == new.started_at
        );
        if !same_run {
            self.alarm_fired = false;
        }
        self.record = record;
    }

    /// Forget the current record, as after a cancel.
    pub fn clear(&mut self) {
        self.sync(None);
    }

    /// Re-derive phase and remaining time at the given clock reading.
    pub fn tick(&mut self, now_ms: i64) -> Tick {
        let Some(record) = self.record else {
            return Tick {
                phase: TimerPhase::Idle,
                remaining_ms: 0,
                total_ms: 0,
                fire_alarm: false,
            };
        };

        let snapshot = record.snapshot(now_ms);
        if snapshot.finished {
            let fire_alarm = !self.alarm_fired;
            self.alarm_fired = true;
            Tick {
                phase: TimerPhase::Finished,
                remaining_ms: 0,
                total_ms: record.duration_ms,
                fire_alarm,
            }
        } else {
            Tick {
                phase: TimerPhase::Active,
                remaining_ms: snapshot.remaining_ms,
                total_ms: record.duration_ms,
                fire_alarm: false,
            }
        }
    }
}

/// Format remaining milliseconds as MM:SS, rounding partial seconds up so
/// the display never shows 00:00 while time remains.
pub fn format_clock(remaining_ms: i64) -> String {
    let total_seconds = (remaining_ms.max(0) + 999) / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(started_at: i64, duration_ms: i64) -> TimerRecord {
        TimerRecord {
            started_at,
            duration_ms,
        }
    }

    #[test]
    fn starts_idle() {
        let mut countdown = Countdown::new();
        let tick = countdown.tick(1_000);
        assert_eq!(tick.phase, TimerPhase::Idle);
        assert!(!tick.fire_alarm);
    }

    #[test]
    fn alarm_fires_exactly_once_per_run() {
        let mut countdown = Countdown::new();
        countdown.sync(Some(record(0, 10_000)));

        let tick = countdown.tick(4_000);
        assert_eq!(tick.phase, TimerPhase::Active);
        assert_eq!(tick.remaining_ms, 6_000);
        assert!(!tick.fire_alarm);

        let tick = countdown.tick(10_000);
        assert_eq!(tick.phase, TimerPhase::Finished);
        assert!(tick.fire_alarm);

        let tick = countdown.tick(11_000);
        assert_eq!(tick.phase, TimerPhase::Finished);
        assert!(!tick.fire_alarm);
    }

    #[test]
    fn resync_of_the_same_run_keeps_the_latch() {
        let mut countdown = Countdown::new();
        countdown.sync(Some(record(0, 10_000)));
        assert!(countdown.tick(10_000).fire_alarm);

        // The next poll reports the same run, still finished
        countdown.sync(Some(record(0, 10_000)));
        assert!(!countdown.tick(11_000).fire_alarm);
    }

    #[test]
    fn new_run_re_arms_the_alarm() {
        let mut countdown = Countdown::new();
        countdown.sync(Some(record(0, 5_000)));
        assert!(countdown.tick(5_000).fire_alarm);

        countdown.sync(Some(record(20_000, 5_000)));
        let tick = countdown.tick(21_000);
        assert_eq!(tick.phase, TimerPhase::Active);

        assert!(countdown.tick(25_000).fire_alarm);
        assert!(!countdown.tick(26_000).fire_alarm);
    }

    #[test]
    fn run_observed_only_after_its_deadline_still_alarms_once() {
        let mut countdown = Countdown::new();
        countdown.sync(Some(record(0, 5_000)));

        let tick = countdown.tick(60_000);
        assert_eq!(tick.phase, TimerPhase::Finished);
        assert!(tick.fire_alarm);
        assert!(!countdown.tick(61_000).fire_alarm);
    }

    #[test]
    fn clearing_returns_to_idle_and_re_arms() {
        let mut countdown = Countdown::new();
        countdown.sync(Some(record(0, 5_000)));
        assert!(countdown.tick(5_000).fire_alarm);

        countdown.clear();
        assert_eq!(countdown.tick(6_000).phase, TimerPhase::Idle);

        countdown.sync(Some(record(7_000, 1_000)));
        assert!(countdown.tick(8_000).fire_alarm);
    }

    #[test]
    fn clock_formats_with_partial_seconds_rounded_up() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(500), "00:01");
        assert_eq!(format_clock(60_000), "01:00");
        assert_eq!(format_clock(61_001), "01:02");
        assert_eq!(format_clock(600_000), "10:00");
    }
}
