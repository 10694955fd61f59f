use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval};

/// Stopwatch behind the timer tab. It never reads a clock itself: the UI
/// calls `tick` once a second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudyTimer {
    pub running: bool,
    pub seconds: u64,
}

impl StudyTimer {
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    pub fn reset(&mut self) {
        *self = StudyTimer::default();
    }

    pub fn tick(&mut self) {
        if self.running {
            self.seconds += 1;
        }
    }

    pub fn display(&self) -> String {
        format_elapsed(self.seconds)
    }
}

/// One tick per second, the first a full second from now.
pub fn second_ticks() -> Interval {
    let period = Duration::from_secs(1);
    interval_at(Instant::now() + period, period)
}

/// `HH:MM:SS`, zero padded. Hours keep growing past 99.
pub fn format_elapsed(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_padding() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(59), "00:00:59");
        assert_eq!(format_elapsed(61), "00:01:01");
        assert_eq!(format_elapsed(3600 + 25 * 60 + 7), "01:25:07");
        assert_eq!(format_elapsed(100 * 3600), "100:00:00");
    }

    #[test]
    fn ticks_only_count_while_running() {
        let mut timer = StudyTimer::default();
        timer.tick();
        assert_eq!(timer.seconds, 0);

        timer.toggle();
        timer.tick();
        timer.tick();
        assert_eq!(timer.display(), "00:00:02");

        timer.toggle();
        timer.tick();
        assert_eq!(timer.seconds, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_a_full_second() {
        let started = Instant::now();
        let mut ticks = second_ticks();
        ticks.tick().await;
        assert_eq!(started.elapsed(), Duration::from_secs(1));
        ticks.tick().await;
        assert_eq!(started.elapsed(), Duration::from_secs(2));
    }

    #[test]
    fn reset_stops_and_zeroes() {
        let mut timer = StudyTimer {
            running: true,
            seconds: 90,
        };
        timer.reset();
        assert_eq!(timer, StudyTimer::default());
    }
}
