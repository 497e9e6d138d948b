// Used event codes (input events as standardized in the linux kernel)
// See https://github.com/torvalds/linux/blob/master/include/uapi/linux/input-event-codes.h

// Event types
pub const EV_SYN: u16 = 0x00;
pub const EV_KEY: u16 = 0x01; // BTN prefixed constants are of type EV_KEY, too
pub const EV_REL: u16 = 0x02;

// Syn events
pub const SYN_REPORT: u16 = 0x00;
pub const SYN_CONFIG: u16 = 0x01;
pub const SYN_MT_REPORT: u16 = 0x02;
pub const SYN_DROPPED: u16 = 0x03;

// Relative axes (joysticks mapped to pointer motion)
pub const REL_X: u16 = 0x00;
pub const REL_Y: u16 = 0x01;
pub const REL_Z: u16 = 0x02; // not emitted by the joysticks
pub const REL_RX: u16 = 0x03;
pub const REL_RY: u16 = 0x04;

// Keys (the handheld's gpio-keys driver reuses keyboard codes for the gamepad)
pub const KEY_ESC: u16 = 0x01; // = 1 (SELECT)
pub const KEY_BACKSPACE: u16 = 0x0e; // = 14 (R1)
pub const KEY_TAB: u16 = 0x0f; // = 15 (L1)
pub const KEY_ENTER: u16 = 0x1c; // = 28 (START)
pub const KEY_LEFTCTRL: u16 = 0x1d; // = 29 (A)
pub const KEY_LEFTSHIFT: u16 = 0x2a; // = 42 (Y)
pub const KEY_LEFTALT: u16 = 0x38; // = 56 (B)
pub const KEY_SPACE: u16 = 0x39; // = 57 (X)
pub const KEY_KPDOT: u16 = 0x53; // = 83 (R3)
pub const KEY_KPSLASH: u16 = 0x62; // = 98 (L3)
pub const KEY_HOME: u16 = 0x66; // = 102 (MENU)
pub const KEY_UP: u16 = 0x67; // = 103
pub const KEY_PAGEUP: u16 = 0x68; // = 104 (L2)
pub const KEY_LEFT: u16 = 0x69; // = 105
pub const KEY_RIGHT: u16 = 0x6a; // = 106
pub const KEY_DOWN: u16 = 0x6c; // = 108
pub const KEY_PAGEDOWN: u16 = 0x6d; // = 109 (R2)
pub const KEY_VOLUMEDOWN: u16 = 0x72; // = 114
pub const KEY_VOLUMEUP: u16 = 0x73; // = 115
pub const KEY_POWER: u16 = 0x74; // = 116

// Mouse buttons, emitted while a joystick drives the pointer
pub const BTN_LEFT: u16 = 0x110; // = 272
pub const BTN_RIGHT: u16 = 0x111; // = 273
pub const BTN_MIDDLE: u16 = 0x112; // = 274
