use crate::{Bitmap, ScreenSize, Surface, SurfaceError};

/// Allocation cap, matching what desktop bitmap factories will realistically
/// hand out before failing.
const MAX_BITMAP_BYTES: u64 = 1 << 28;

/// In-memory [`Surface`] with a configurable screen size.
#[derive(Debug, Clone)]
pub struct SoftwareSurface {
    screen: ScreenSize,
}

impl SoftwareSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            screen: ScreenSize { width, height },
        }
    }

    /// Change the reported screen size, as a display reconfiguration would.
    pub fn set_screen_size(&mut self, width: i32, height: i32) {
        self.screen = ScreenSize { width, height };
    }
}

impl Surface for SoftwareSurface {
    type Bitmap = SoftwareBitmap;

    fn screen_size(&self) -> ScreenSize {
        self.screen
    }

    fn alloc_bitmap(&mut self, width: u32, height: u32) -> Result<SoftwareBitmap, SurfaceError> {
        let bytes = u64::from(width)
            .saturating_mul(u64::from(height))
            .saturating_mul(4);
        if bytes > MAX_BITMAP_BYTES {
            return Err(SurfaceError::BitmapTooLarge { width, height });
        }

        Ok(SoftwareBitmap {
            width,
            height,
            pixels: vec![0; bytes as usize],
        })
    }
}

/// Heap-backed BGRA bitmap. The pixel buffer starts zeroed, so the alpha
/// byte reads as zero until somebody other than the loader writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftwareBitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap for SoftwareBitmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}
