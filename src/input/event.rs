use std::convert::TryFrom;
use std::fmt;

use super::{Button, ButtonState, EventType, RelativeAxis, SynchronizationEvent};
use crate::error::{Error, Result};

/// Seconds and microseconds since the epoch, laid out like `struct timeval`
#[repr(C)]
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct TimeVal {
    pub tv_sec: libc::time_t,
    pub tv_usec: libc::suseconds_t,
}

impl TimeVal {
    pub fn new(tv_sec: libc::time_t, tv_usec: libc::suseconds_t) -> TimeVal {
        TimeVal { tv_sec, tv_usec }
    }

    pub fn from_micros(micros: u64) -> TimeVal {
        TimeVal {
            tv_sec: (micros / 1_000_000) as libc::time_t,
            tv_usec: (micros % 1_000_000) as libc::suseconds_t,
        }
    }

    pub fn as_micros(&self) -> u64 {
        to_micro_seconds(*self)
    }

    /// Microseconds elapsed between `earlier` and `self`, zero if `earlier` is later.
    /// This is what press durations get compared against.
    pub fn micros_since(&self, earlier: &TimeVal) -> u64 {
        self.as_micros().saturating_sub(earlier.as_micros())
    }
}

impl From<libc::timeval> for TimeVal {
    fn from(tv: libc::timeval) -> TimeVal {
        TimeVal {
            tv_sec: tv.tv_sec,
            tv_usec: tv.tv_usec,
        }
    }
}

impl From<TimeVal> for libc::timeval {
    fn from(tv: TimeVal) -> libc::timeval {
        libc::timeval {
            tv_sec: tv.tv_sec,
            tv_usec: tv.tv_usec,
        }
    }
}

/// Collapses a timestamp into a single microsecond count.
/// Negative fields count as zero instead of wrapping.
pub fn to_micro_seconds(time: TimeVal) -> u64 {
    let sec = u64::try_from(time.tv_sec).unwrap_or(0);
    let usec = u64::try_from(time.tv_usec).unwrap_or(0);
    sec.saturating_mul(1_000_000).saturating_add(usec)
}

/// One input occurrence as it travels to the kernel input layer, same layout as
/// `struct input_event`.
///
/// `type_`, `code` and `value` have to agree with each other: a `Button` code goes with
/// `EventType::Buttons` and a `ButtonState` value, a `RelativeAxis` code with
/// `EventType::RelativeAxes` and any delta, a `SynchronizationEvent` code with
/// `EventType::Synchronization` and zero. The constructors in `factory` always produce
/// such records; writing the fields by hand makes this the caller's problem.
#[repr(C)]
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub struct InputEvent {
    pub time: TimeVal,
    pub type_: u16,
    pub code: u16,
    pub value: i32,
}

/// Size of one record on the wire for the current target
pub const INPUT_EVENT_SIZE: usize = std::mem::size_of::<InputEvent>();

/// Typed view of a consistent `InputEvent`
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum EventKind {
    Button { button: Button, state: ButtonState },
    RelativeAxis { axis: RelativeAxis, delta: i32 },
    Sync(SynchronizationEvent),
}

impl InputEvent {
    /// Decodes the type/code/value triple. Fails on anything the constructors could not
    /// have produced.
    pub fn kind(&self) -> Result<EventKind> {
        match EventType::try_from(self.type_)? {
            EventType::Buttons => Ok(EventKind::Button {
                button: Button::try_from(self.code)?,
                state: ButtonState::try_from(self.value)?,
            }),
            EventType::RelativeAxes => Ok(EventKind::RelativeAxis {
                axis: RelativeAxis::try_from(self.code)?,
                delta: self.value,
            }),
            EventType::Synchronization => {
                let sync = SynchronizationEvent::try_from(self.code)?;
                if self.value != 0 {
                    return Err(Error::InvalidSyncValue(self.value));
                }
                Ok(EventKind::Sync(sync))
            }
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.kind().is_ok()
    }

    /// True for the marker that closes a frame
    pub fn is_sync_report(&self) -> bool {
        self.type_ == EventType::Synchronization.code()
            && self.code == SynchronizationEvent::Report.code()
            && self.value == 0
    }

    /// Native-endian image of the record, ready to be written to an input device node
    pub fn as_bytes(&self) -> &[u8] {
        // InputEvent is repr(C) without padding on every target libc supports
        unsafe {
            std::slice::from_raw_parts(self as *const InputEvent as *const u8, INPUT_EVENT_SIZE)
        }
    }

    /// Reads one record from the front of `buf`. Returns None if it is too short.
    pub fn from_bytes(buf: &[u8]) -> Option<InputEvent> {
        if buf.len() < INPUT_EVENT_SIZE {
            return None;
        }
        Some(unsafe { std::ptr::read_unaligned(buf.as_ptr() as *const InputEvent) })
    }
}

impl From<libc::input_event> for InputEvent {
    fn from(ev: libc::input_event) -> InputEvent {
        InputEvent {
            time: TimeVal::from(ev.time),
            type_: ev.type_,
            code: ev.code,
            value: ev.value,
        }
    }
}

impl From<InputEvent> for libc::input_event {
    fn from(ev: InputEvent) -> libc::input_event {
        libc::input_event {
            time: ev.time.into(),
            type_: ev.type_,
            code: ev.code,
            value: ev.value,
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[t: {}, c: {}, v: {}]", self.type_, self.code, self.value)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            EventKind::Button { button, state } => write!(f, "{} button {}", button, state),
            EventKind::RelativeAxis { axis, delta } => write!(f, "{} moved by {}", axis, delta),
            EventKind::Sync(sync) => write!(f, "sync {}", sync),
        }
    }
}

/// Decodes a record read off a device, logging anything that does not belong to the
/// handheld's event set.
pub fn decode(ev: &InputEvent) -> Option<EventKind> {
    match ev.kind() {
        Ok(kind) => Some(kind),
        Err(e) => {
            warn!(
                "Dropping input event [type: {0} code: {1} value: {2}]: {3}",
                ev.type_, ev.code, ev.value, e
            );
            None
        }
    }
}
