use coverage_track_core::{Layer, RenderPass};

use crate::annotations::draw_annotations;
use crate::axes::draw_axes;
use crate::color::{reference_colors, SampleColors};
use crate::curves::{depth_line, stream_area};
use crate::style::StyleConfig;
use crate::surface::Surface;

/// Draws a complete pass. The surface is cleared first; nothing from
/// an earlier pass survives.
pub fn draw_pass<S: Surface>(
    surface: &mut S,
    pass: &RenderPass<'_>,
    sample_colors: &SampleColors,
    style: &StyleConfig,
) {
    surface.clear();

    draw_axes(surface, &pass.geometry, &pass.x, &pass.y, style);
    draw_annotations(surface, &pass.annotations, style);

    match &pass.layer {
        Layer::Steps {
            coverage,
            resolution,
        } => {
            for (ix, depths) in coverage.samples().iter().enumerate() {
                if let Some(path) =
                    depth_line(&pass.x, &pass.y, depths, *resolution)
                {
                    let color = sample_colors.get(ix);
                    surface.stroke_path(&path, color, style.line_width);
                }
            }
        }
        Layer::Stream(series) => {
            let colors = reference_colors(series.reference_count());
            for (ref_ix, color) in colors.into_iter().enumerate() {
                if let Some(path) = stream_area(&pass.x, &pass.y, series, ref_ix)
                {
                    surface.fill_path(&path, color);
                }
            }
        }
    }
}
