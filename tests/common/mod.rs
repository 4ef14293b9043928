#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use nvsettings::config::RunConfig;
use nvsettings::output::args::OutputArgs;
use nvsettings::schema::{SchemaVersion, settings_v0, settings_v1};
use nvsettings::settings::SettingsStore;
use nvsettings::storage::MemoryStore;
use nvsettings::storage::footer::FOOTER_SIZE;

pub const REGION_SIZE: usize = 4096;

pub fn ensure_out_dir() {
    fs::create_dir_all("out").unwrap();
}

/// Fresh path under `out/`, removing whatever a previous run left there.
pub fn scratch_path(file_name: &str) -> PathBuf {
    ensure_out_dir();
    let path = PathBuf::from("out").join(file_name);
    let _ = fs::remove_file(&path);
    path
}

pub fn memory_settings() -> SettingsStore<MemoryStore> {
    SettingsStore::new(MemoryStore::new(REGION_SIZE))
}

pub fn footer_offset() -> usize {
    REGION_SIZE - FOOTER_SIZE
}

pub fn run_config(image: PathBuf, schema: SchemaVersion, iterations: u32, seed: u32) -> RunConfig {
    RunConfig {
        image,
        region_size: REGION_SIZE,
        schema,
        iterations,
        seed: Some(seed),
        inspect: false,
    }
}

pub fn quiet_output() -> OutputArgs {
    OutputArgs {
        export_json: None,
        stats: false,
        quiet: true,
    }
}

pub fn sample_v0() -> settings_v0::Settings {
    let mut s = settings_v0::Settings::new();
    let gamepad = s.gamepad_options.mut_or_insert_default();
    gamepad.set_input_mode(settings_v0::InputMode::INPUT_MODE_SWITCH);
    gamepad.set_socd_mode(settings_v0::SocdMode::SOCD_MODE_NEUTRAL);
    gamepad.set_invert_y_axis(true);
    s
}

pub fn sample_v1() -> settings_v1::Settings {
    let mut s = settings_v1::Settings::new();
    let gamepad = s.gamepad_options.mut_or_insert_default();
    gamepad.set_dpad_mode(settings_v1::DpadMode::DPAD_MODE_LEFT_ANALOG);
    gamepad.set_invert_x_axis(true);
    gamepad.set_debounce_delay(12);

    let board = s.board_options.mut_or_insert_default();
    board.set_has_board_options(true);
    board.set_pin_dpad_up(2);
    board.set_pin_button_b1(-7);

    s.buzzer_addon.mut_or_insert_default().set_volume(5);
    s
}
