use protobuf::MessageDyn;
use protobuf::MessageFull;
use protobuf::reflect::MessageDescriptor;

use super::descriptor::{FieldKind, classify};
use super::errors::SchemaError;

/// Marks every optional field of `record` present so that encoding always
/// writes the complete structure.
///
/// Absent scalars take their schema default. Nested records are created if
/// missing and always descended into.
pub fn set_all_present<S: MessageFull>(record: &mut S) -> Result<(), SchemaError> {
    set_message_present(&S::descriptor(), record)
}

pub fn set_message_present(
    descriptor: &MessageDescriptor,
    message: &mut dyn MessageDyn,
) -> Result<(), SchemaError> {
    for spec in classify(descriptor)? {
        match &spec.kind {
            FieldKind::Nested(nested) => {
                set_message_present(nested, spec.field.mut_message(message))?;
            }
            _ if spec.optional && !spec.field.has_field(message) => {
                let value = spec.field.get_singular_field_or_default(message).to_box();
                spec.field.set_singular_field(message, value);
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::settings_v1::{BoardOptions, InputMode, Settings};

    #[test]
    fn test_empty_record_becomes_fully_present() {
        let mut s = Settings::new();
        set_all_present(&mut s).expect("presence");

        let gamepad = s.gamepad_options.as_ref().expect("gamepad present");
        assert!(gamepad.has_input_mode());
        assert!(gamepad.has_invert_x_axis());
        assert!(gamepad.has_debounce_delay());
        assert_eq!(gamepad.debounce_delay(), 5);

        let board = s.board_options.as_ref().expect("board present");
        assert!(board.has_pin_dpad_up());
        assert_eq!(board.pin_dpad_up(), -1);

        let buzzer = s.buzzer_addon.as_ref().expect("buzzer present");
        assert_eq!(buzzer.volume(), 100);
        assert!(buzzer.has_enabled());
    }

    #[test]
    fn test_existing_values_are_kept() {
        let mut s = Settings::new();
        s.gamepad_options
            .mut_or_insert_default()
            .set_input_mode(InputMode::INPUT_MODE_SWITCH);
        s.board_options = Some(BoardOptions {
            pin_button_b1: Some(17),
            ..Default::default()
        })
        .into();

        set_all_present(&mut s).expect("presence");

        assert_eq!(
            s.gamepad_options.input_mode(),
            InputMode::INPUT_MODE_SWITCH
        );
        assert_eq!(s.board_options.pin_button_b1(), 17);
        assert_eq!(s.board_options.pin_button_b2(), -1);
    }

    #[test]
    fn test_presence_is_idempotent() {
        let mut once = Settings::new();
        once.buzzer_addon.mut_or_insert_default().set_pin(3);
        set_all_present(&mut once).expect("presence");

        let mut twice = once.clone();
        set_all_present(&mut twice).expect("presence");

        assert_eq!(once, twice);
    }
}
