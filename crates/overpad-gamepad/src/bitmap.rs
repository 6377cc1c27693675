use log::debug;
use thiserror::Error;

use overpad_surface::{Bitmap, Rgb, Surface, SurfaceError};

use crate::button::Button;

/// Why a button image could not be turned into a surface bitmap.
#[derive(Debug, Error)]
pub enum BitmapError {
    /// The file could not be read or decoded.
    #[error(transparent)]
    Decode(#[from] image::ImageError),
    /// The decoder produced an image with no pixels.
    #[error("image has no pixels")]
    Empty,
    /// The surface refused the bitmap allocation.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Decodes the image at `path` into a bitmap of `surface` and attaches it
/// to `button`, along with its dimensions and color key.
///
/// The color key is the decoded top-left pixel; the surface composites every
/// pixel of that color as transparent. On failure the button keeps whatever
/// image it had before.
pub(crate) fn load_button_image<S: Surface>(
    surface: &mut S,
    path: &str,
    button: &mut Button<S>,
) -> Result<(), BitmapError> {
    // Decoding straight to RGBA keeps every source format on one path.
    let decoded = image::open(path)?.into_rgba8();
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(BitmapError::Empty);
    }

    let mut bitmap = surface.alloc_bitmap(width, height)?;

    // The surface layout is BGRA. Only the color channels are copied; the
    // alpha byte keeps whatever the allocator put there.
    let source = decoded.as_raw();
    for (src, dst) in source
        .chunks_exact(4)
        .zip(bitmap.pixels_mut().chunks_exact_mut(4))
    {
        dst[0] = src[2];
        dst[1] = src[1];
        dst[2] = src[0];
    }

    debug!("loaded {path}: {width}x{height}");

    button.color_key = Rgb {
        r: source[0],
        g: source[1],
        b: source[2],
    };
    button.width = width;
    button.height = height;
    button.image = Some(bitmap);
    Ok(())
}

#[cfg(test)]
mod tests {
    use image::RgbaImage;

    use overpad_surface::{ScreenSize, SoftwareSurface};

    use crate::testutil::temp_png;

    use super::*;

    #[test]
    fn decoded_pixels_are_swizzled_to_bgra() {
        let source = RgbaImage::from_raw(2, 1, vec![1, 2, 3, 200, 4, 5, 6, 7])
            .expect("buffer should match dimensions");
        let path = temp_png("two.png", &source);

        let mut surface = SoftwareSurface::new(640, 480);
        let mut button: Button<SoftwareSurface> = Button::new("b".into());
        load_button_image(&mut surface, path.to_str().expect("utf-8 path"), &mut button)
            .expect("image should load");

        let bitmap = button.image.as_ref().expect("bitmap should be attached");
        // Color channels reversed per pixel, alpha left at the allocator's zero.
        assert_eq!(bitmap.pixels(), [3, 2, 1, 0, 6, 5, 4, 0]);
        assert_eq!((button.width, button.height), (2, 1));
    }

    #[test]
    fn color_key_is_the_top_left_pixel() {
        let mut source = RgbaImage::new(3, 3);
        source.put_pixel(0, 0, image::Rgba([250, 100, 50, 255]));
        let path = temp_png("keyed.png", &source);

        let mut surface = SoftwareSurface::new(640, 480);
        let mut button: Button<SoftwareSurface> = Button::new("b".into());
        load_button_image(&mut surface, path.to_str().expect("utf-8 path"), &mut button)
            .expect("image should load");

        assert_eq!(
            button.color_key,
            Rgb {
                r: 250,
                g: 100,
                b: 50
            }
        );
    }

    #[test]
    fn missing_file_leaves_the_button_untouched() {
        let mut surface = SoftwareSurface::new(640, 480);
        let mut button: Button<SoftwareSurface> = Button::new("b".into());
        let err = load_button_image(&mut surface, "definitely-missing.png", &mut button)
            .expect_err("load should fail");

        assert!(matches!(err, BitmapError::Decode(_)));
        assert!(button.image.is_none());
        assert_eq!((button.width, button.height), (0, 0));
    }

    #[test]
    fn failed_reload_keeps_the_previous_image() {
        let mut source = RgbaImage::new(2, 2);
        source.put_pixel(0, 0, image::Rgba([9, 8, 7, 255]));
        let path = temp_png("first.png", &source);

        let mut surface = SoftwareSurface::new(640, 480);
        let mut button: Button<SoftwareSurface> = Button::new("b".into());
        load_button_image(&mut surface, path.to_str().expect("utf-8 path"), &mut button)
            .expect("first image should load");
        let attached = button.image.clone();

        let err = load_button_image(&mut surface, "definitely-missing.png", &mut button)
            .expect_err("reload should fail");
        assert!(matches!(err, BitmapError::Decode(_)));
        assert_eq!(button.image, attached);
        assert_eq!((button.width, button.height), (2, 2));
        assert_eq!(button.color_key, Rgb { r: 9, g: 8, b: 7 });
    }

    #[test]
    fn refused_allocation_leaves_the_button_untouched() {
        struct RefusingSurface;

        impl Surface for RefusingSurface {
            type Bitmap = overpad_surface::SoftwareBitmap;

            fn screen_size(&self) -> ScreenSize {
                ScreenSize {
                    width: 640,
                    height: 480,
                }
            }

            fn alloc_bitmap(&mut self, _: u32, _: u32) -> Result<Self::Bitmap, SurfaceError> {
                Err(SurfaceError::Alloc("out of handles".into()))
            }
        }

        let source = RgbaImage::new(4, 4);
        let path = temp_png("refused.png", &source);

        let mut surface = RefusingSurface;
        let mut button: Button<RefusingSurface> = Button::new("b".into());
        let err = load_button_image(&mut surface, path.to_str().expect("utf-8 path"), &mut button)
            .expect_err("allocation should be refused");

        assert!(matches!(err, BitmapError::Surface(_)));
        assert!(button.image.is_none());
    }

    #[test]
    fn refused_reallocation_keeps_the_previous_image() {
        struct BudgetSurface {
            inner: SoftwareSurface,
            remaining: usize,
        }

        impl Surface for BudgetSurface {
            type Bitmap = overpad_surface::SoftwareBitmap;

            fn screen_size(&self) -> ScreenSize {
                self.inner.screen_size()
            }

            fn alloc_bitmap(
                &mut self,
                width: u32,
                height: u32,
            ) -> Result<Self::Bitmap, SurfaceError> {
                if self.remaining == 0 {
                    return Err(SurfaceError::Alloc("out of handles".into()));
                }
                self.remaining -= 1;
                self.inner.alloc_bitmap(width, height)
            }
        }

        let mut first = RgbaImage::new(2, 2);
        first.put_pixel(0, 0, image::Rgba([9, 8, 7, 255]));
        let first_path = temp_png("kept.png", &first);
        let second_path = temp_png("second.png", &RgbaImage::new(4, 4));

        let mut surface = BudgetSurface {
            inner: SoftwareSurface::new(640, 480),
            remaining: 1,
        };
        let mut button: Button<BudgetSurface> = Button::new("b".into());
        load_button_image(
            &mut surface,
            first_path.to_str().expect("utf-8 path"),
            &mut button,
        )
        .expect("first image should load");
        let attached = button.image.clone();

        let err = load_button_image(
            &mut surface,
            second_path.to_str().expect("utf-8 path"),
            &mut button,
        )
        .expect_err("reallocation should be refused");
        assert!(matches!(err, BitmapError::Surface(_)));
        assert_eq!(button.image, attached);
        assert_eq!((button.width, button.height), (2, 2));
        assert_eq!(button.color_key, Rgb { r: 9, g: 8, b: 7 });
    }
}
