#[macro_use]
extern crate log;

extern crate libc;
extern crate serde;
extern crate thiserror;
extern crate toml;

/// Event encodings, the `InputEvent` wire record and the constructors that stamp it
pub mod input;

/// Tunable power button timings and joystick calibration, loaded from TOML
pub mod config;

pub mod error;

pub use crate::error::{Error, Result};
pub use crate::input::{
    create_button_input_event, create_relative_axis_input_event, create_sync_event,
    to_micro_seconds, Button, ButtonState, EventType, InputEvent, MouseMode, RelativeAxis,
    SynchronizationEvent, TimeVal,
};
