use super::ecodes;

code_enum! {
    /// Physical buttons of the handheld plus the virtual mouse buttons
    pub enum Button: u16 => UnknownButton {
        Select = ecodes::KEY_ESC,
        Start = ecodes::KEY_ENTER,

        A = ecodes::KEY_LEFTCTRL,
        B = ecodes::KEY_LEFTALT,
        X = ecodes::KEY_SPACE,
        Y = ecodes::KEY_LEFTSHIFT,

        L1 = ecodes::KEY_TAB,
        L2 = ecodes::KEY_PAGEUP,
        L3 = ecodes::KEY_KPSLASH,
        R1 = ecodes::KEY_BACKSPACE,
        R2 = ecodes::KEY_PAGEDOWN,
        R3 = ecodes::KEY_KPDOT,

        Home = ecodes::KEY_HOME,
        DpadUp = ecodes::KEY_UP,
        DpadDown = ecodes::KEY_DOWN,
        DpadLeft = ecodes::KEY_LEFT,
        DpadRight = ecodes::KEY_RIGHT,

        Power = ecodes::KEY_POWER,
        VolumeUp = ecodes::KEY_VOLUMEUP,
        VolumeDown = ecodes::KEY_VOLUMEDOWN,

        MouseLeft = ecodes::BTN_LEFT,
        MouseRight = ecodes::BTN_RIGHT,
        MouseMiddle = ecodes::BTN_MIDDLE,
    }
}

code_enum! {
    pub enum ButtonState: i32 => UnknownButtonState {
        Released = 0,
        Pressed = 1,
        /// Autorepeat while the button stays down
        Held = 2,
    }
}

impl Button {
    /// Mouse buttons only make sense while a joystick drives the pointer
    pub fn is_mouse_button(self) -> bool {
        match self {
            Button::MouseLeft | Button::MouseRight | Button::MouseMiddle => true,
            _ => false,
        }
    }
}

impl ButtonState {
    pub fn is_down(self) -> bool {
        self != ButtonState::Released
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;
    use std::convert::TryFrom;

    #[test]
    fn button_codes_are_unique() {
        let codes: HashSet<u16> = Button::ALL.iter().map(|b| b.code()).collect();
        assert_eq!(codes.len(), Button::ALL.len());
        assert_eq!(Button::ALL.len(), 23);
    }

    #[test]
    fn every_button_round_trips_through_its_code() {
        for button in Button::ALL {
            assert_eq!(Button::try_from(button.code()).unwrap(), *button);
        }
    }

    #[test]
    fn gamepad_buttons_use_keyboard_codes() {
        assert_eq!(Button::Select.code(), 1);
        assert_eq!(Button::Start.code(), 28);
        assert_eq!(Button::Y.code(), 42);
        assert_eq!(Button::R1.code(), 14);
        assert_eq!(Button::L3.code(), 98);
        assert_eq!(Button::MouseMiddle.code(), 274);
        assert!(Button::MouseRight.is_mouse_button());
        assert!(!Button::Power.is_mouse_button());
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(Button::try_from(143).is_err());
        assert!(ButtonState::try_from(3).is_err());
        assert!(ButtonState::try_from(-1).is_err());
    }

    #[test]
    fn held_counts_as_down() {
        assert!(ButtonState::Held.is_down());
        assert!(ButtonState::Pressed.is_down());
        assert!(!ButtonState::Released.is_down());
    }
}
