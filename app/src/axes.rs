use lyon::math::point;
use lyon::path::Path;

use coverage_track_core::{ChartGeometry, LinearScale};

use crate::style::StyleConfig;
use crate::surface::{Baseline, Surface, TextAnchor, TextStyle};

/// Integral values without a fractional part, anything else with at
/// most three decimals and no trailing zeros.
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let s = format!("{value:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

pub fn draw_axes<S: Surface>(
    surface: &mut S,
    geometry: &ChartGeometry,
    x: &LinearScale,
    y: &LinearScale,
    style: &StyleConfig,
) {
    let left = geometry.plot_left() as f32;
    let right = geometry.plot_right() as f32;
    let top = geometry.plot_top() as f32;
    let bottom = geometry.plot_bottom() as f32;
    let tick = style.tick_size;

    let label_style = |anchor, baseline| TextStyle {
        anchor,
        baseline,
        font_size: style.axis_font_size,
        dy: 0.0,
        color: style.axis_color,
    };

    let mut builder = Path::builder();

    // x-axis along the data baseline
    builder.begin(point(left, bottom));
    builder.line_to(point(right, bottom));
    builder.end(false);

    let x_ticks = x.ticks(style.x_tick_count);
    for &value in x_ticks.iter() {
        let px = x.map(value) as f32;
        builder.begin(point(px, bottom));
        builder.line_to(point(px, bottom + tick));
        builder.end(false);
    }

    // y-axis along the left margin
    builder.begin(point(left, top));
    builder.line_to(point(left, bottom));
    builder.end(false);

    let y_ticks = y.ticks(style.y_tick_count);
    for &value in y_ticks.iter() {
        let py = y.map(value) as f32;
        builder.begin(point(left - tick, py));
        builder.line_to(point(left, py));
        builder.end(false);
    }

    surface.stroke_path(&builder.build(), style.axis_color, style.line_width);

    for &value in x_ticks.iter() {
        let at = point(x.map(value) as f32, bottom + tick + 2.0);
        let text = format_tick(value);
        surface.text(at, &text, label_style(TextAnchor::Middle, Baseline::Hanging));
    }

    for &value in y_ticks.iter() {
        let at = point(left - tick - 2.0, y.map(value) as f32);
        let text = format_tick(value);
        surface.text(at, &text, label_style(TextAnchor::End, Baseline::Middle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DisplayList;
    use coverage_track_core::scale::{x_scale, y_scale};
    use coverage_track_core::{Bp, ContainerBox, TrackConfig};

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(150.0), "150");
        assert_eq!(format_tick(0.2), "0.2");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(28000.0), "28000");
    }

    #[test]
    fn axes_labels_follow_scales() {
        let geom = ChartGeometry::compute(
            ContainerBox::new(800.0, 300.0),
            &TrackConfig::default(),
        );
        let x = x_scale(&geom, Bp(1000));
        let y = y_scale(&geom, 1.0);

        let mut list = DisplayList::default();
        draw_axes(&mut list, &geom, &x, &y, &StyleConfig::default());

        assert_eq!(list.strokes().count(), 1);

        let labels: Vec<_> = list.texts().map(|(_, t)| t.to_string()).collect();
        assert!(labels.contains(&"0".to_string()));
        assert!(labels.contains(&"1000".to_string()));
        assert!(labels.contains(&"0.2".to_string()));
        assert!(labels.contains(&"1".to_string()));

        let (at, _) = list.texts().find(|(_, t)| *t == "1000").unwrap();
        assert_eq!(at.x, 790.0);
    }
}
