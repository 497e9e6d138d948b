use super::{
    Button, ButtonState, Clock, EventType, InputEvent, RelativeAxis, SynchronizationEvent,
    SystemClock,
};

/// Builds consistent `InputEvent`s, stamping each one with the time read from `C`
#[derive(Debug, Default, Clone)]
pub struct EventFactory<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> EventFactory<C> {
    pub fn new(clock: C) -> EventFactory<C> {
        EventFactory { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn button(&self, button: Button, state: ButtonState) -> InputEvent {
        self.stamp(EventType::Buttons, button.code(), state.code())
    }

    /// `value` is passed through untouched
    pub fn relative_axis(&self, axis: RelativeAxis, value: i32) -> InputEvent {
        self.stamp(EventType::RelativeAxes, axis.code(), value)
    }

    /// Marks the end of a frame
    pub fn sync(&self) -> InputEvent {
        self.stamp(
            EventType::Synchronization,
            SynchronizationEvent::Report.code(),
            0,
        )
    }

    fn stamp(&self, type_: EventType, code: u16, value: i32) -> InputEvent {
        InputEvent {
            time: self.clock.now(),
            type_: type_.code(),
            code,
            value,
        }
    }
}

pub fn create_button_input_event(button: Button, state: ButtonState) -> InputEvent {
    EventFactory::new(SystemClock).button(button, state)
}

pub fn create_relative_axis_input_event(axis: RelativeAxis, value: i32) -> InputEvent {
    EventFactory::new(SystemClock).relative_axis(axis, value)
}

pub fn create_sync_event() -> InputEvent {
    EventFactory::new(SystemClock).sync()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::input::{EventKind, ManualClock, TimeVal};

    #[test]
    fn stamps_with_injected_clock() {
        let clock = ManualClock::new(TimeVal::new(1_000, 250));
        let factory = EventFactory::new(&clock);

        let press = factory.button(Button::Power, ButtonState::Pressed);
        clock.advance_micros(2_000_000);
        let release = factory.button(Button::Power, ButtonState::Released);

        assert_eq!(press.time, TimeVal::new(1_000, 250));
        assert_eq!(release.time, TimeVal::new(1_002, 250));
        assert_eq!(release.time.micros_since(&press.time), 2_000_000);
    }

    #[test]
    fn frame_decodes_back_to_inputs() {
        let factory = EventFactory::new(ManualClock::default());
        let frame = [
            factory.relative_axis(RelativeAxis::AxisX, 4),
            factory.relative_axis(RelativeAxis::AxisY, -7),
            factory.sync(),
        ];
        assert_eq!(
            frame[0].kind().unwrap(),
            EventKind::RelativeAxis {
                axis: RelativeAxis::AxisX,
                delta: 4,
            }
        );
        assert_eq!(
            frame[1].kind().unwrap(),
            EventKind::RelativeAxis {
                axis: RelativeAxis::AxisY,
                delta: -7,
            }
        );
        assert!(frame[2].is_sync_report());
        assert!(frame.iter().all(|ev| ev.time == TimeVal::default()));
    }
}
