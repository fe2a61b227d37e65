use chrono::Local;
use inv_core::ports::ClockPort;
use inv_core::Timestamp;

/// Local wall clock; registry timestamps are written in the building's local time.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(Local::now().naive_local())
    }
}
