use super::*;
use crate::MINUTE;
use crate::Seconds;

/// Errors from moving the clock past either end of the structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockError {
    FirstLevel,
    LastLevel,
}

impl std::fmt::Display for ClockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FirstLevel => write!(f, "already at the first level"),
            Self::LastLevel => write!(f, "already at the last level"),
        }
    }
}

impl std::error::Error for ClockError {}

/// What a tick did to the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Paused,
    Running,
    /// The level ran out and the clock paused at the start of this one.
    Advanced(Level),
    Finished,
}

/// Level clock for a running tournament.
///
/// Time only moves when [`Clock::tick`] is called, so the caller decides
/// whether a tick is a wall-clock second or a test step.
#[derive(Debug, Clone)]
pub struct Clock {
    structure: Structure,
    index: usize,
    remaining: Seconds,
    running: bool,
}

impl From<Structure> for Clock {
    fn from(structure: Structure) -> Self {
        let remaining = structure.level(0).map(Level::seconds).unwrap_or(0);
        Self {
            structure,
            index: 0,
            remaining,
            running: false,
        }
    }
}

impl Clock {
    pub fn start(&mut self) {
        if !self.finished() {
            self.running = true;
        }
    }
    pub fn pause(&mut self) {
        self.running = false;
    }
    pub fn running(&self) -> bool {
        self.running
    }
    pub fn remaining(&self) -> Seconds {
        self.remaining
    }
    pub fn structure(&self) -> &Structure {
        &self.structure
    }
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.structure.len()
    }
    /// The final level has run out.
    pub fn finished(&self) -> bool {
        self.is_last() && self.remaining == 0
    }

    pub fn tick(&mut self, seconds: Seconds) -> Tick {
        if self.finished() {
            self.running = false;
            return Tick::Finished;
        }
        if !self.running {
            return Tick::Paused;
        }
        self.remaining = self.remaining.saturating_sub(seconds);
        if self.remaining > 0 {
            return Tick::Running;
        }
        self.running = false;
        match self.is_last() {
            true => {
                log::info!("final level complete");
                Tick::Finished
            }
            false => Tick::Advanced(self.advance()),
        }
    }

    /// Put a minute back on the clock.
    pub fn rewind_minute(&mut self) {
        self.remaining += MINUTE;
    }
    /// Take a minute off the clock, rolling into the next level if that
    /// empties it. Returns the new level when it rolls.
    pub fn forward_minute(&mut self) -> Option<Level> {
        self.remaining = self.remaining.saturating_sub(MINUTE);
        match self.remaining == 0 && !self.is_last() {
            true => Some(self.advance()),
            false => None,
        }
    }

    pub fn next_level(&mut self) -> Result<Level, ClockError> {
        if self.is_last() {
            return Err(ClockError::LastLevel);
        }
        self.running = false;
        Ok(self.advance())
    }
    pub fn previous_level(&mut self) -> Result<Level, ClockError> {
        if self.index == 0 {
            return Err(ClockError::FirstLevel);
        }
        self.running = false;
        self.index -= 1;
        Ok(self.reset())
    }

    pub fn current(&self) -> Option<&Level> {
        self.structure.level(self.index)
    }
    pub fn upcoming(&self) -> Option<&Level> {
        self.structure.level(self.index + 1)
    }
    /// Current level and everything after it.
    pub fn schedule(&self) -> &[Level] {
        &self.structure.levels()[self.index.min(self.structure.len())..]
    }
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / MINUTE, self.remaining % MINUTE)
    }

    fn advance(&mut self) -> Level {
        self.index += 1;
        let level = self.reset();
        log::info!("advanced to {}", level);
        level
    }
    fn reset(&mut self) -> Level {
        let level = self.structure.levels()[self.index];
        self.remaining = level.seconds();
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(speed: Speed) -> Clock {
        Clock::from(Structure::new(1000, speed).unwrap())
    }

    #[test]
    fn starts_paused_at_first_level() {
        let clock = clock(Speed::Normal);
        assert!(!clock.running());
        assert_eq!(clock.current().unwrap().index(), 1);
        assert_eq!(clock.remaining(), 15 * 60);
        assert_eq!(clock.display(), "15:00");
    }

    #[test]
    fn paused_clock_does_not_move() {
        let mut clock = clock(Speed::Normal);
        assert_eq!(clock.tick(30), Tick::Paused);
        assert_eq!(clock.remaining(), 900);
    }

    #[test]
    fn running_clock_counts_down() {
        let mut clock = clock(Speed::Hyper);
        clock.start();
        assert_eq!(clock.tick(1), Tick::Running);
        assert_eq!(clock.display(), "05:59");
    }

    #[test]
    fn level_expiry_advances_and_pauses() {
        let mut clock = clock(Speed::Hyper);
        clock.start();
        match clock.tick(6 * 60) {
            Tick::Advanced(level) => assert_eq!(level.index(), 2),
            other => panic!("expected advance, got {:?}", other),
        }
        assert!(!clock.running());
        assert_eq!(clock.remaining(), 360);
        assert_eq!(clock.current().unwrap().small(), 2);
    }

    #[test]
    fn final_level_finishes() {
        let mut clock = clock(Speed::Turbo);
        while clock.next_level().is_ok() {}
        assert!(clock.is_last());
        assert!(clock.upcoming().is_none());
        clock.start();
        assert_eq!(clock.tick(10 * 60), Tick::Finished);
        assert!(clock.finished());
        clock.start();
        assert!(!clock.running());
        assert_eq!(clock.tick(1), Tick::Finished);
    }

    #[test]
    fn minute_controls() {
        let mut clock = clock(Speed::Normal);
        clock.rewind_minute();
        assert_eq!(clock.display(), "16:00");
        for _ in 0..15 {
            assert_eq!(clock.forward_minute(), None);
        }
        assert_eq!(clock.display(), "01:00");
        let level = clock.forward_minute().unwrap();
        assert_eq!(level.index(), 2);
        assert_eq!(clock.display(), "15:00");
    }

    #[test]
    fn forward_minute_keeps_running_state() {
        let mut clock = clock(Speed::Hyper);
        clock.start();
        for _ in 0..6 {
            clock.forward_minute();
        }
        assert!(clock.running());
        assert_eq!(clock.current().unwrap().index(), 2);
    }

    #[test]
    fn level_navigation_bounds() {
        let mut clock = clock(Speed::Normal);
        assert_eq!(clock.previous_level(), Err(ClockError::FirstLevel));
        clock.start();
        assert_eq!(clock.next_level().unwrap().index(), 2);
        assert!(!clock.running());
        assert_eq!(clock.previous_level().unwrap().index(), 1);
        for _ in 1..20 {
            clock.next_level().unwrap();
        }
        assert_eq!(clock.next_level(), Err(ClockError::LastLevel));
    }

    #[test]
    fn schedule_drops_past_levels() {
        let mut clock = clock(Speed::Normal);
        assert_eq!(clock.schedule().len(), 20);
        clock.next_level().unwrap();
        clock.next_level().unwrap();
        assert_eq!(clock.schedule().len(), 18);
        assert_eq!(clock.schedule()[0].index(), 3);
        assert_eq!(clock.upcoming().unwrap().index(), 4);
    }
}
