use chrono::Utc;
use ck_core::ports::ClockPort;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_ms_is_monotonic_enough_and_after_2024() {
        let first = SystemClock.now_ms();
        let second = SystemClock.now_ms();
        assert!(first > 1_704_067_200_000);
        assert!(second >= first);
    }
}
