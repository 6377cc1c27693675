use std::ops::{Index, IndexMut};

use overpad_surface::{Rgb, Surface};

/// Platform virtual-key code.
pub type KeyCode = u16;

pub const ARROW_UP: KeyCode = 0x26;
pub const ARROW_DOWN: KeyCode = 0x28;
pub const ARROW_LEFT: KeyCode = 0x25;
pub const ARROW_RIGHT: KeyCode = 0x27;

/// Horizontal edge a button's margin is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAnchor {
    #[default]
    None,
    Left,
    Right,
}

/// Vertical edge a button's margin is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAnchor {
    #[default]
    None,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

impl WheelDirection {
    /// Signed scroll step for one tick in this direction.
    pub fn step(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Key codes emitted by a stick, one per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickKeys([KeyCode; 4]);

impl Default for StickKeys {
    /// Fresh sticks steer with the arrow keys.
    fn default() -> Self {
        Self([ARROW_UP, ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT])
    }
}

impl Index<StickDirection> for StickKeys {
    type Output = KeyCode;

    fn index(&self, direction: StickDirection) -> &KeyCode {
        &self.0[direction as usize]
    }
}

impl IndexMut<StickDirection> for StickKeys {
    fn index_mut(&mut self, direction: StickDirection) -> &mut KeyCode {
        &mut self.0[direction as usize]
    }
}

/// What pressing a button does.
///
/// Declaring a type installs that variant with its defaults; properties that
/// belong to a variant are only accepted while it is the active one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonKind {
    /// No `type` declared yet. Buttons start here.
    Unset,
    /// Shuts the pad down.
    Quit,
    /// Emits a single key.
    Key { code: KeyCode },
    /// Scrolls the mouse wheel.
    Wheel {
        direction: Option<WheelDirection>,
        amount: u32,
    },
    /// A four-way directional stick.
    Stick { keys: StickKeys, threshold: f32 },
}

/// One on-screen button of a gamepad.
///
/// Position is stored as an anchor edge plus a margin and resolved against
/// the surface on demand, so a screen size change never needs a reload.
#[derive(Debug)]
pub struct Button<S: Surface> {
    name: Box<str>,
    pub kind: ButtonKind,
    pub h_anchor: HAnchor,
    pub h_margin: i32,
    pub v_anchor: VAnchor,
    pub v_margin: i32,
    pub image: Option<S::Bitmap>,
    pub width: u32,
    pub height: u32,
    pub color_key: Rgb,
}

impl<S: Surface> Button<S> {
    pub(crate) fn new(name: Box<str>) -> Self {
        Self {
            name,
            kind: ButtonKind::Unset,
            h_anchor: HAnchor::None,
            h_margin: 0,
            v_anchor: VAnchor::None,
            v_margin: 0,
            image: None,
            width: 0,
            height: 0,
            color_key: Rgb::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves the left edge against the surface's current screen width.
    ///
    /// Margins are taken as parsed; extreme values saturate at the
    /// coordinate bounds instead of wrapping.
    pub fn x(&self, surface: &S) -> i32 {
        match self.h_anchor {
            HAnchor::None => 0,
            HAnchor::Left => self.h_margin,
            HAnchor::Right => {
                let offset = self.h_margin.saturating_add(self.width as i32);
                surface.screen_size().width.saturating_sub(offset)
            }
        }
    }

    /// Resolves the top edge against the surface's current screen height.
    pub fn y(&self, surface: &S) -> i32 {
        match self.v_anchor {
            VAnchor::None => 0,
            VAnchor::Top => self.v_margin,
            VAnchor::Bottom => {
                let offset = self.v_margin.saturating_add(self.height as i32);
                surface.screen_size().height.saturating_sub(offset)
            }
        }
    }
}
