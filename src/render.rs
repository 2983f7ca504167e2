//! PNG rendering of a finished ant's grid (§6.2's `-i`/`--image_dir`, §6.3).

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::color::ColorTable;
use crate::error::SimError;
use crate::grid::GridStore;

/// Refuse to allocate a raster wider or taller than this many pixels (§5).
pub const MAX_DIMENSION: u64 = 50_000;

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

/// The 8-entry palette for every symbol that isn't literally `w` or `b`,
/// cycled in first-seen order (§6.3).
const OTHER_PALETTE: [[u8; 4]; 8] = [
    [255, 45, 85, 255],
    [76, 217, 100, 255],
    [88, 86, 214, 255],
    [255, 149, 0, 255],
    [255, 204, 0, 255],
    [255, 59, 48, 255],
    [90, 200, 250, 255],
    [0, 122, 255, 255],
];

/// Maps every color id to its pixel value, keyed by the *symbol* each id
/// interns to: literal `'w'`/`'b'` map to white/black regardless of which
/// one is `C0`, and every other symbol gets the next slot of
/// [`OTHER_PALETTE`] in first-seen order (the order [`ColorTable`] already
/// tracks, since it interns in first-seen order itself).
fn id_colors(colors: &ColorTable) -> Vec<[u8; 4]> {
    let mut next_other = 0usize;
    colors
        .symbols()
        .iter()
        .map(|&sym| match sym {
            'w' => WHITE,
            'b' => BLACK,
            _ => {
                let color = OTHER_PALETTE[next_other % OTHER_PALETTE.len()];
                next_other += 1;
                color
            }
        })
        .collect()
}

/// Renders `grid` to a PNG at `path`. The raster is the tight bounding box
/// of every cell ever written; unwritten cells inside it render as white,
/// the background default, never as the literal `C0` color (§6.3).
pub fn render_png(grid: &GridStore, colors: &ColorTable, path: &Path) -> Result<(), SimError> {
    let ((min_x, min_y), (max_x, max_y)) = match grid.bounding_box() {
        Some(bounds) => bounds,
        None => ((0, 0), (0, 0)),
    };

    let width = (max_x - min_x + 1) as u64;
    let height = (max_y - min_y + 1) as u64;
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(SimError::GridTooLarge {
            width,
            height,
            limit: MAX_DIMENSION,
        });
    }

    let palette = id_colors(colors);
    let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_fn(width as u32, height as u32, |col, row| {
        let x = min_x + col as i64;
        // Image row 0 is the top; the simulation's y grows northward, so flip.
        let y = max_y - row as i64;
        let color = match grid.get((x, y)) {
            Some(id) => palette[id.0 as usize],
            None => WHITE,
        };
        Rgba(color)
    });

    buffer.save(path).map_err(|err| match err {
        image::ImageError::IoError(io_err) => SimError::Io(io_err),
        other => SimError::Io(std::io::Error::new(std::io::ErrorKind::Other, other.to_string())),
    })
}
