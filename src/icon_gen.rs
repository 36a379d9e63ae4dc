use crate::Args;
use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use std::{fs::File, path::Path, str::FromStr};

/// Sizes generated when no custom list is given.
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

const DEFAULT_BACKGROUND: Rgb<u8> = Rgb([0x00, 0x66, 0xcc]);
const WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

pub fn generate_icons(args: Args) -> Result<()> {
    let background = parse_background(&args.color);
    let sizes = args.png.unwrap_or_else(|| DEFAULT_SIZES.to_vec());

    println!("Generating placeholder icons...");
    for &size in &sizes {
        let output_path = args.output.join(format!("icon-{size}.png"));
        let icon = render_icon(size, background);
        save_png(&icon, &output_path)?;
        println!("  ✓ Generated {}", output_path.display());
    }
    println!("✓ All {} icons generated", sizes.len());

    Ok(())
}

/// Parse a CSS color string, falling back to the stock blue.
fn parse_background(color: &str) -> Rgb<u8> {
    css_color::Srgb::from_str(color)
        .map(|color| {
            Rgb([
                (color.red * 255.) as u8,
                (color.green * 255.) as u8,
                (color.blue * 255.) as u8,
            ])
        })
        .unwrap_or(DEFAULT_BACKGROUND)
}

/// Render one placeholder icon: a solid background, a centered white disk,
/// and a small arrow glyph cut into the disk in the background color.
///
/// The glyph anchor follows `size`, but its extents are fixed pixel offsets.
/// Below roughly 20 px it can spill past the disk or the canvas edge; pixels
/// outside the canvas are clipped.
pub fn render_icon(size: u32, background: Rgb<u8>) -> RgbImage {
    // Disk inscribed in the square [margin, size - margin] on both axes.
    let margin = size / 4;
    let center = size as f32 / 2.0;
    let radius = (size - 2 * margin) as f32 / 2.0;

    // Arrow glyph: apex on the vertical centerline, base 10 px to each side.
    let arrow_margin = (size / 3) as f32;
    let half = (size / 2) as f32;
    let apex = (half, arrow_margin + 5.0);
    let base_right = (half + 10.0, arrow_margin + 15.0);
    let base_left = (half - 10.0, arrow_margin + 15.0);

    RgbImage::from_fn(size, size, |x, y| {
        let px = x as f32;
        let py = y as f32;

        // The glyph is drawn on top of the disk.
        if point_in_triangle(px, py, apex, base_right, base_left) {
            return background;
        }

        let dx = px - center;
        let dy = py - center;
        if (dx * dx + dy * dy).sqrt() <= radius {
            WHITE
        } else {
            background
        }
    })
}

fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    image
        .write_to(&mut file, image::ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ax * by - ay * bx
}

/// Sign test against all three edges; boundary pixels count as inside.
fn point_in_triangle(px: f32, py: f32, p1: (f32, f32), p2: (f32, f32), p3: (f32, f32)) -> bool {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let (x3, y3) = p3;
    let c1 = cross(x2 - x1, y2 - y1, px - x1, py - y1);
    let c2 = cross(x3 - x2, y3 - y2, px - x2, py - y2);
    let c3 = cross(x1 - x3, y1 - y3, px - x3, py - y3);
    let has_neg = (c1 < 0.0) || (c2 < 0.0) || (c3 < 0.0);
    let has_pos = (c1 > 0.0) || (c2 > 0.0) || (c3 > 0.0);
    !(has_neg && has_pos)
}
