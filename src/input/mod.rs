/// Declares a closed set of wire codes. Every variant needs an explicit discriminant, the
/// consumers on the other side of the wire read these integers verbatim.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $repr:ident => $unknown:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:expr, )+
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        #[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The raw integer that goes on the wire
            pub fn code(self) -> $repr {
                self as $repr
            }

            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )+
                }
            }
        }

        impl ::std::convert::TryFrom<$repr> for $name {
            type Error = crate::error::Error;

            fn try_from(code: $repr) -> ::std::result::Result<Self, Self::Error> {
                match code {
                    $( c if c == $name::$variant as $repr => Ok($name::$variant), )+
                    other => Err(crate::error::Error::$unknown(other)),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub mod ecodes;

/// Button codes and their press states
pub mod buttons;

/// Injectable time source used to stamp events
pub mod clock;

/// The `InputEvent` record, its timestamp and the typed decoding of a raw record
pub mod event;

/// Constructors that stamp and populate `InputEvent`s
pub mod factory;

pub use self::buttons::{Button, ButtonState};
pub use self::clock::{Clock, ManualClock, SystemClock};
pub use self::event::{decode, to_micro_seconds, EventKind, InputEvent, TimeVal, INPUT_EVENT_SIZE};
pub use self::factory::{
    create_button_input_event, create_relative_axis_input_event, create_sync_event, EventFactory,
};

use serde::{Deserialize, Serialize};

/// Power button presses shorter than this are ignored (microseconds)
pub const POWER_BUTTON_SHORT_PRESS_DURATION: u32 = 300_000;
/// Power button presses at least this long count as long presses (microseconds)
pub const POWER_BUTTON_LONG_PRESS_DURATION: u32 = 2_000_000;

// Raw ADC readings
pub const JOYSTICK_X_AXIS_CENTER: u16 = 1730;
pub const JOYSTICK_Y_AXIS_CENTER: u16 = 1620;
pub const JOYSTICK_DEAD_ZONE: u16 = 350;
/// Divisor applied to the raw deflection to get the pointer speed
pub const JOYSTICK_SPEED_DOWNSCALER: u16 = 200;

code_enum! {
    pub enum EventType: u16 => UnknownEventType {
        Synchronization = ecodes::EV_SYN,
        Buttons = ecodes::EV_KEY,
        RelativeAxes = ecodes::EV_REL,
    }
}

code_enum! {
    pub enum SynchronizationEvent: u16 => UnknownSyncEvent {
        /// Closes one frame of events
        Report = ecodes::SYN_REPORT,
        Config = ecodes::SYN_CONFIG,
        MTReport = ecodes::SYN_MT_REPORT,
        /// The kernel buffer overran and events were lost
        Dropped = ecodes::SYN_DROPPED,
    }
}

code_enum! {
    /// Code 2 (`REL_Z`) is left out on purpose, no joystick reports it.
    /// The sign and magnitude of a delta are up to the consumer.
    pub enum RelativeAxis: u16 => UnknownRelativeAxis {
        AxisX = ecodes::REL_X,
        AxisY = ecodes::REL_Y,
        AxisRX = ecodes::REL_RX,
        AxisRY = ecodes::REL_RY,
    }
}

/// Which joystick, if any, moves the pointer
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum MouseMode {
    #[serde(rename = "deactivated")]
    Deactivated,
    #[serde(rename = "left-joystick")]
    LeftJoyStick,
    #[serde(rename = "right-joystick")]
    RightJoyStick,
}

impl Default for MouseMode {
    fn default() -> MouseMode {
        MouseMode::Deactivated
    }
}

impl std::fmt::Display for MouseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            MouseMode::Deactivated => write!(f, "deactivated"),
            MouseMode::LeftJoyStick => write!(f, "left joystick"),
            MouseMode::RightJoyStick => write!(f, "right joystick"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use std::convert::TryFrom;

    #[test]
    fn relative_axis_skips_rel_z() {
        assert_eq!(RelativeAxis::AxisRX.code(), 3);
        assert_eq!(RelativeAxis::AxisRY.code(), 4);
        assert!(RelativeAxis::ALL.iter().all(|a| a.code() != ecodes::REL_Z));
        match RelativeAxis::try_from(ecodes::REL_Z) {
            Err(Error::UnknownRelativeAxis(2)) => {}
            other => panic!("REL_Z must not decode, got {:?}", other),
        }
    }

    #[test]
    fn sync_event_codes() {
        let codes: Vec<u16> = SynchronizationEvent::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3]);
        assert_eq!(SynchronizationEvent::Dropped.to_string(), "Dropped");
    }

    #[test]
    fn event_type_lookup() {
        assert_eq!(EventType::try_from(2).unwrap(), EventType::RelativeAxes);
        assert!(EventType::try_from(3).is_err());
    }

    #[test]
    fn mouse_mode_defaults_to_deactivated() {
        assert_eq!(MouseMode::default(), MouseMode::Deactivated);
    }
}
