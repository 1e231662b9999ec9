use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

// Mocking out time so that reminder due times can be tested
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
}

/// System clock, used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock that only moves when told to
pub struct FixedSys {
    now: AtomicI64,
}

impl FixedSys {
    pub fn new(now: i64) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: i64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl ISys for FixedSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_sys_moves_on_demand() {
        let sys = FixedSys::new(1000);
        assert_eq!(sys.get_timestamp_millis(), 1000);
        sys.advance(500);
        assert_eq!(sys.get_timestamp_millis(), 1500);
        sys.set(10);
        assert_eq!(sys.get_timestamp_millis(), 10);
    }
}
