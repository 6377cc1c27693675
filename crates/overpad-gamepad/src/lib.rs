//! Configuration-driven model of an on-screen gamepad.
//!
//! A pad is described in an INI-style file: one section per button, with
//! properties for its type, layout and artwork. [`load_gamepad`] turns such
//! a definition into a [`Gamepad`] of typed [`Button`]s, allocating button
//! bitmaps through an [`overpad_surface::Surface`]. Loading is strict and
//! all or nothing; any rejected entry fails the whole pad and releases
//! everything allocated for it.

mod bitmap;
mod builder;
mod button;
mod gamepad;
mod loader;
mod num;
#[cfg(test)]
mod testutil;

pub use bitmap::BitmapError;
pub use builder::BuildError;
pub use button::{
    Button, ButtonKind, HAnchor, KeyCode, StickDirection, StickKeys, VAnchor, WheelDirection,
    ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT, ARROW_UP,
};
pub use gamepad::{Gamepad, DEFAULT_MAX_BUTTONS, MAX_NAME_LEN};
pub use loader::{load_gamepad, parse_gamepad, parse_gamepad_into, LoadError};
