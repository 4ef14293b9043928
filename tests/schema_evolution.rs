//! Records written by one schema generation and read by another.

use nvsettings::schema::{settings_v0, settings_v1};
use nvsettings::settings::{LoadStatus, SaveStatus};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_newer_record_loads_in_older_schema() {
    let mut settings = common::memory_settings();
    let mut newer = common::sample_v1();
    settings.save(&mut newer).expect("save");

    let (older, status) = settings.load::<settings_v0::Settings>();
    assert_eq!(status, LoadStatus::Loaded);

    let gamepad = &older.gamepad_options;
    assert_eq!(
        gamepad.dpad_mode(),
        settings_v0::DpadMode::DPAD_MODE_LEFT_ANALOG
    );
    assert!(gamepad.invert_x_axis());
    assert!(!gamepad.invert_y_axis());
}

#[test]
fn test_older_save_drops_newer_fields() {
    let mut settings = common::memory_settings();
    let mut newer = common::sample_v1();
    settings.save(&mut newer).expect("save");

    let (mut older, _) = settings.load::<settings_v0::Settings>();
    assert_eq!(settings.save(&mut older).expect("save"), SaveStatus::Saved);

    let (reloaded, status) = settings.load::<settings_v1::Settings>();
    assert_eq!(status, LoadStatus::Loaded);
    assert!(reloaded.board_options.is_none());
    assert!(reloaded.buzzer_addon.is_none());
    assert!(!reloaded.gamepad_options.has_debounce_delay());
    assert_eq!(reloaded.gamepad_options.debounce_delay(), 5);
    assert!(reloaded.gamepad_options.invert_x_axis());
}

#[test]
fn test_older_record_loads_in_newer_schema() {
    let mut settings = common::memory_settings();
    let mut older = common::sample_v0();
    settings.save(&mut older).expect("save");

    let (mut newer, status) = settings.load::<settings_v1::Settings>();
    assert_eq!(status, LoadStatus::Loaded);
    assert_eq!(
        newer.gamepad_options.input_mode(),
        settings_v1::InputMode::INPUT_MODE_SWITCH
    );
    assert_eq!(
        newer.gamepad_options.socd_mode(),
        settings_v1::SocdMode::SOCD_MODE_NEUTRAL
    );
    assert!(newer.gamepad_options.invert_y_axis());

    // Saving under the newer schema fills in the added fields.
    settings.save(&mut newer).expect("save");
    let (reloaded, status) = settings.load::<settings_v1::Settings>();
    assert_eq!(status, LoadStatus::Loaded);
    assert_eq!(reloaded, newer);
    assert!(reloaded.board_options.has_pin_dpad_down());
    assert_eq!(reloaded.buzzer_addon.volume(), 100);
}

#[test]
fn test_alternating_generations_keep_shared_fields() {
    let mut settings = common::memory_settings();
    let mut record = common::sample_v0();
    settings.save(&mut record).expect("save");

    for _ in 0..3 {
        let (mut newer, status) = settings.load::<settings_v1::Settings>();
        assert_eq!(status, LoadStatus::Loaded);
        settings.save(&mut newer).expect("save");

        let (mut older, status) = settings.load::<settings_v0::Settings>();
        assert_eq!(status, LoadStatus::Loaded);
        assert_eq!(older, record);
        settings.save(&mut older).expect("save");
    }
}
