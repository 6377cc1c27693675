use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use image::RgbaImage;

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// Encodes `image` as a PNG named `name` under a fresh temporary directory
/// and returns the full path.
pub(crate) fn temp_png(name: &str, image: &RgbaImage) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "overpad-test-{}-{}",
        std::process::id(),
        NEXT_DIR.fetch_add(1, Ordering::Relaxed)
    ));
    fs::create_dir_all(&dir).expect("temp dir should be writable");
    let path = dir.join(name);
    image.save(&path).expect("test image should encode");
    path
}
