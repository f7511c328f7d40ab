use {
    chrono::{Local, Timelike},
    display::DisplayMode,
    std::time::{Duration, Instant},
};

pub const DAY_START_HOUR: u32 = 6;
pub const DAY_END_HOUR: u32 = 18;
pub const CHECK_INTERVAL: Duration = Duration::from_secs(60);

/// Day runs from 06:00 up to, not including, 18:00.
pub fn is_day_hour(hour: u32) -> bool {
    (DAY_START_HOUR..DAY_END_HOUR).contains(&hour)
}

fn local_hour() -> u32 {
    Local::now().hour()
}

/// Picks the display mode from the local clock, at most once per interval,
/// unless a mode was pinned on the command line.
#[derive(Debug, Clone)]
pub struct DayNightSchedule {
    pinned: Option<DisplayMode>,
    mode: DisplayMode,
    interval: Duration,
    last_check: Instant,
}

impl DayNightSchedule {
    pub fn new(pinned: Option<DisplayMode>, hour: u32, now: Instant) -> Self {
        let mode = pinned.unwrap_or(DisplayMode::from_day(is_day_hour(hour)));
        log::info!("schedule: starting in {} mode (hour {})", mode, hour);
        Self {
            pinned,
            mode,
            interval: CHECK_INTERVAL,
            last_check: now,
        }
    }

    /// Start from the local wall clock.
    pub fn from_clock(pinned: Option<DisplayMode>) -> Self {
        Self::new(pinned, local_hour(), Instant::now())
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_check) >= self.interval
    }

    /// Re-evaluate the mode for `hour` if a check is due. Returns the new
    /// mode when it changed.
    pub fn update(&mut self, now: Instant, hour: u32) -> Option<DisplayMode> {
        if !self.is_due(now) {
            return None;
        }
        self.last_check = now;
        let mode = self
            .pinned
            .unwrap_or(DisplayMode::from_day(is_day_hour(hour)));
        if mode == self.mode {
            return None;
        }
        log::info!("schedule: switching to {} mode at hour {}", mode, hour);
        self.mode = mode;
        Some(mode)
    }

    /// `update` against the local clock.
    pub fn poll(&mut self, now: Instant) -> Option<DisplayMode> {
        if !self.is_due(now) {
            return None;
        }
        self.update(now, local_hour())
    }
}
