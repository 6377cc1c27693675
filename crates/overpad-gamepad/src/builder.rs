use thiserror::Error;

use overpad_surface::Surface;

use crate::bitmap::{self, BitmapError};
use crate::button::{
    Button, ButtonKind, HAnchor, StickDirection, StickKeys, VAnchor, WheelDirection,
};
use crate::num;

/// Why an entry was rejected.
///
/// The display strings are stable and are what ends up in load reports, so
/// they stay short and user-facing.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Too many buttons")]
    TooManyButtons,
    #[error("Button name too long")]
    NameTooLong,
    #[error("Invalid button property")]
    InvalidProperty,
    #[error("Invalid button type")]
    InvalidType,
    #[error("Invalid wheel direction")]
    InvalidWheelDirection,
    #[error("Invalid scroll amount")]
    InvalidScrollAmount,
    #[error("Could not load image")]
    Image(#[source] BitmapError),
}

/// Applies one `key = value` entry to `button`.
///
/// Properties tied to a button type are only accepted while that type is the
/// declared one, so a definition that sets `threshold` before `type = stick`
/// is rejected rather than silently reordered.
pub(crate) fn apply<S: Surface>(
    surface: &mut S,
    button: &mut Button<S>,
    key: &str,
    value: &str,
) -> Result<(), BuildError> {
    match key {
        "x" | "left" => {
            button.h_margin = num::eval(value) as i32;
            button.h_anchor = HAnchor::Left;
        }
        "y" | "top" => {
            button.v_margin = num::eval(value) as i32;
            button.v_anchor = VAnchor::Top;
        }
        "right" => {
            button.h_margin = num::eval(value) as i32;
            button.h_anchor = HAnchor::Right;
        }
        "bottom" => {
            button.v_margin = num::eval(value) as i32;
            button.v_anchor = VAnchor::Bottom;
        }
        "keycode" => {
            let ButtonKind::Key { code } = &mut button.kind else {
                return Err(BuildError::InvalidProperty);
            };
            *code = num::eval(value) as u16;
        }
        "direction" => {
            let ButtonKind::Wheel { direction, .. } = &mut button.kind else {
                return Err(BuildError::InvalidProperty);
            };
            *direction = Some(match value {
                "up" => WheelDirection::Up,
                "down" => WheelDirection::Down,
                _ => return Err(BuildError::InvalidWheelDirection),
            });
        }
        "amount" => {
            let ButtonKind::Wheel { amount, .. } = &mut button.kind else {
                return Err(BuildError::InvalidProperty);
            };
            // A single literal, not an expression: `amount = 2*5` scrolls 2.
            let ticks = num::integer(value);
            if ticks <= 0 {
                return Err(BuildError::InvalidScrollAmount);
            }
            *amount = u32::try_from(ticks).unwrap_or(u32::MAX);
        }
        "keycode_up" => stick_key(button, StickDirection::Up, value)?,
        "keycode_down" => stick_key(button, StickDirection::Down, value)?,
        "keycode_left" => stick_key(button, StickDirection::Left, value)?,
        "keycode_right" => stick_key(button, StickDirection::Right, value)?,
        "threshold" => {
            let ButtonKind::Stick { threshold, .. } = &mut button.kind else {
                return Err(BuildError::InvalidProperty);
            };
            *threshold = (num::eval(value) as f32 / 100.0).clamp(0.0, 1.0);
        }
        "image" => {
            bitmap::load_button_image(surface, value, button).map_err(BuildError::Image)?;
        }
        "type" => {
            button.kind = match value {
                "quit" => ButtonKind::Quit,
                "key" => ButtonKind::Key { code: 0 },
                "wheel" => ButtonKind::Wheel {
                    direction: None,
                    amount: 1,
                },
                "stick" => ButtonKind::Stick {
                    keys: StickKeys::default(),
                    threshold: 0.5,
                },
                _ => return Err(BuildError::InvalidType),
            };
        }
        _ => return Err(BuildError::InvalidProperty),
    }
    Ok(())
}

fn stick_key<S: Surface>(
    button: &mut Button<S>,
    direction: StickDirection,
    value: &str,
) -> Result<(), BuildError> {
    let ButtonKind::Stick { keys, .. } = &mut button.kind else {
        return Err(BuildError::InvalidProperty);
    };
    keys[direction] = num::eval(value) as u16;
    Ok(())
}
