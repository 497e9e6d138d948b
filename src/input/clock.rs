use std::sync::atomic::{AtomicU64, Ordering};

use super::TimeVal;

/// Source of the timestamps stamped onto events
pub trait Clock {
    fn now(&self) -> TimeVal;
}

/// Wall clock, read with `gettimeofday` like the kernel stamps its own events
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeVal {
        let mut tv = libc::timeval {
            tv_sec: 0,
            tv_usec: 0,
        };
        let ret = unsafe { libc::gettimeofday(&mut tv, std::ptr::null_mut()) };
        if ret != 0 {
            error!(
                "gettimeofday failed: {}",
                std::io::Error::last_os_error()
            );
            return TimeVal::default();
        }
        TimeVal::from(tv)
    }
}

/// Clock that only moves when told to. Shared between threads through `&self`.
#[derive(Debug, Default)]
pub struct ManualClock {
    micros: AtomicU64,
}

impl ManualClock {
    pub fn new(start: TimeVal) -> ManualClock {
        ManualClock {
            micros: AtomicU64::new(start.as_micros()),
        }
    }

    pub fn set(&self, time: TimeVal) {
        self.micros.store(time.as_micros(), Ordering::Relaxed);
    }

    pub fn advance_micros(&self, micros: u64) {
        self.micros.fetch_add(micros, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> TimeVal {
        TimeVal::from_micros(self.micros.load(Ordering::Relaxed))
    }
}

impl<'a, C: Clock + ?Sized> Clock for &'a C {
    fn now(&self) -> TimeVal {
        (**self).now()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now().tv_sec > 1_577_836_800);
    }

    #[test]
    fn system_clock_does_not_go_backwards() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(second >= first);
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(TimeVal::new(5, 999_999));
        clock.advance_micros(1);
        assert_eq!(clock.now(), TimeVal::new(6, 0));
        clock.set(TimeVal::new(1, 2));
        assert_eq!((&clock).now(), TimeVal::new(1, 2));
    }
}
