//! Host-side services the gamepad model needs: the current screen size and
//! bitmap allocation. Real windowing backends implement [`Surface`]; the
//! bundled [`SoftwareSurface`] keeps everything in memory and is what the
//! CLI and the test suites run against.

mod software;

use thiserror::Error;

pub use software::{SoftwareBitmap, SoftwareSurface};

/// Error type for surface operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The requested dimensions exceed what the backend will allocate.
    #[error("bitmap too large: {width}x{height}")]
    BitmapTooLarge { width: u32, height: u32 },
    /// A backend-specific allocation failure.
    #[error("bitmap allocation failed: {0}")]
    Alloc(String),
}

/// Screen dimensions in pixels, queried at resolve time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

/// A color triple, used as the chroma key of a button bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An owned 32-bit bitmap. Dropping the value releases the backing storage.
///
/// Pixels are BGRA bytes in top-down row order, `width * height * 4` bytes
/// total. The alpha byte is whatever the allocator initialized it to and is
/// never written by the loader; consumers must composite with the owning
/// button's color key instead of reading alpha.
pub trait Bitmap: std::fmt::Debug {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixels(&self) -> &[u8];
    fn pixels_mut(&mut self) -> &mut [u8];
}

/// The host services a gamepad is built against.
pub trait Surface {
    type Bitmap: Bitmap;

    /// Current screen dimensions. Queried on every layout resolution; the
    /// value may change between calls (display reconfiguration).
    fn screen_size(&self) -> ScreenSize;

    /// Allocate a bitmap of the given dimensions. Pixel contents are
    /// unspecified until written.
    fn alloc_bitmap(&mut self, width: u32, height: u32) -> Result<Self::Bitmap, SurfaceError>;
}
