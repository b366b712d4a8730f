use lyon::math::{point, Point};
use lyon::path::Path;

use coverage_track_core::{GenomeBin, LinearScale, Series};

fn to_point(x: f64, y: f64) -> Point {
    point(x as f32, y as f32)
}

/// Step interpolation with the step halfway between consecutive
/// points. Returns `None` for an empty input.
pub fn step_path(points: impl IntoIterator<Item = Point>) -> Option<Path> {
    let mut points = points.into_iter();
    let first = points.next()?;

    let mut builder = Path::builder();
    builder.begin(first);

    let mut prev = first;
    for p in points {
        let mid_x = (prev.x + p.x) * 0.5;
        builder.line_to(point(mid_x, prev.y));
        builder.line_to(point(mid_x, p.y));
        prev = p;
    }
    builder.line_to(prev);
    builder.end(false);

    Some(builder.build())
}

/// Depth line for one sample; point `i` sits at the start of bin `i`.
pub fn depth_line(
    x: &LinearScale,
    y: &LinearScale,
    depths: &[f64],
    resolution: u64,
) -> Option<Path> {
    // rows of a validated matrix never run past `u32::MAX` bins
    let bins = (0u32..).map(GenomeBin);
    let points = bins.zip(depths).map(|(bin, &depth)| {
        let bp = bin.start_bp(resolution);
        to_point(x.map_bp(bp), y.map(depth))
    });
    step_path(points)
}

/// Closed area for one reference: the band ends left to right, then
/// the band starts back right to left. `None` for an unknown
/// reference or a series without bins.
pub fn stream_area(
    x: &LinearScale,
    y: &LinearScale,
    series: &Series,
    ref_ix: usize,
) -> Option<Path> {
    let bands = series.reference(ref_ix)?;

    let outline: Vec<_> = series
        .bins()
        .zip(bands)
        .map(|(bin, band)| (x.map_bp(series.bin_position(bin)), band))
        .collect();

    let (&(x0, first), rest) = outline.split_first()?;

    let mut builder = Path::builder();

    builder.begin(to_point(x0, y.map(first.end)));
    for &(px, band) in rest {
        builder.line_to(to_point(px, y.map(band.end)));
    }
    for &(px, band) in outline.iter().rev() {
        builder.line_to(to_point(px, y.map(band.start)));
    }
    builder.end(true);

    Some(builder.build())
}
