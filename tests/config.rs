use std::fs;

use pwswd::config::DaemonConfig;
use pwswd::{Error, MouseMode};

fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("pwswd-{}-{}.toml", name, std::process::id()))
}

#[test]
fn load_reads_file_from_disk() {
    let path = scratch_path("load");
    fs::write(
        &path,
        "mouse_mode = \"left-joystick\"\n\n[power_button]\nlong_press_us = 3000000\n",
    )
    .unwrap();

    let config = DaemonConfig::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.mouse_mode, MouseMode::LeftJoyStick);
    assert_eq!(config.power_button.long_press_us, 3_000_000);
    assert_eq!(config.power_button.short_press_us, 300_000);
}

#[test]
fn load_reports_missing_file() {
    match DaemonConfig::load(scratch_path("missing")) {
        Err(Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn load_reports_malformed_toml() {
    let path = scratch_path("malformed");
    fs::write(&path, "[joystick\n").unwrap();
    let result = DaemonConfig::load(&path);
    fs::remove_file(&path).unwrap();

    match result {
        Err(Error::ParseConfig(_)) => {}
        other => panic!("unexpected {:?}", other),
    }
}
