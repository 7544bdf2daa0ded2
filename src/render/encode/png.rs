use resvg::{tiny_skia, usvg};

use crate::config::RenderConfig;
use crate::error::Result;
use crate::render::canvas::Canvas;

use super::encode_error;
use super::svg::to_raster_svg;

const INCHES_PER_METER: f64 = 39.3701;

/// Rasterise at `dpi / 72` pixels per point on an opaque white background.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Canvas sizes are small and positive
pub fn to_png(canvas: &Canvas, config: &RenderConfig) -> Result<Vec<u8>> {
    let svg = to_raster_svg(canvas, &config.font_family);

    let mut options = usvg::Options {
        font_family: primary_font(&config.font_family),
        ..usvg::Options::default()
    };
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(&svg, &options).map_err(|e| encode_error("png", e))?;

    let scale = f64::from(config.dpi) / 72.0;
    let width = (canvas.width() * scale).ceil().max(1.0) as u32;
    let height = (canvas.height() * scale).ceil().max(1.0) as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| encode_error("png", format!("cannot allocate {width}x{height} pixmap")))?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale as f32, scale as f32),
        &mut pixmap.as_mut(),
    );

    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    let pixels_per_meter = (f64::from(config.dpi) * INCHES_PER_METER).round() as u32;
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: pixels_per_meter,
            yppu: pixels_per_meter,
            unit: png::Unit::Meter,
        }));
        let mut writer = encoder
            .write_header()
            .map_err(|e| encode_error("png", e))?;
        writer
            .write_image_data(&rgba)
            .map_err(|e| encode_error("png", e))?;
        writer.finish().map_err(|e| encode_error("png", e))?;
    }
    Ok(out)
}

/// First family of a CSS font-family list, used when no listed font resolves.
fn primary_font(families: &str) -> String {
    families
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim_matches('\''))
        .find(|s| !s.is_empty())
        .unwrap_or("Helvetica")
        .to_string()
}

#[cfg(test)]
#[path = "png_tests.rs"]
mod tests;
