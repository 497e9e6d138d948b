use pwswd::config::DaemonConfig;
use pwswd::input::{decode, EventFactory, SystemClock};
use pwswd::{Button, ButtonState, RelativeAxis};

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => DaemonConfig::load(&path).unwrap_or_else(|e| {
            eprintln!("Failed to load {}: {}", path, e);
            std::process::exit(1);
        }),
        None => DaemonConfig::default(),
    };
    eprintln!("Mouse mode: {}", config.mouse_mode);

    let factory = EventFactory::new(SystemClock);
    let frame = [
        factory.button(Button::MouseLeft, ButtonState::Pressed),
        factory.relative_axis(RelativeAxis::AxisX, 3),
        factory.relative_axis(RelativeAxis::AxisY, -2),
        factory.sync(),
    ];

    for ev in frame.iter() {
        match decode(ev) {
            Some(kind) => println!("{}.{:06} {} {}", ev.time.tv_sec, ev.time.tv_usec, ev, kind),
            None => println!("{}.{:06} {}", ev.time.tv_sec, ev.time.tv_usec, ev),
        }
    }
}
