use palette::Srgb;

use crate::color::{BLACK, GRAY, LIGHTGRAY};

#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub amplicon_fill: Srgb<u8>,
    pub gene_stroke: Srgb<u8>,
    pub label_color: Srgb<u8>,
    pub axis_color: Srgb<u8>,

    pub line_width: f32,

    pub label_font_size: f32,
    // positive values bump the label down
    pub label_dy: f32,

    pub axis_font_size: f32,
    pub tick_size: f32,
    pub x_tick_count: usize,
    pub y_tick_count: usize,
}

impl std::default::Default for StyleConfig {
    fn default() -> Self {
        Self {
            amplicon_fill: LIGHTGRAY,
            gene_stroke: GRAY,
            label_color: BLACK,
            axis_color: BLACK,

            line_width: 1.0,

            label_font_size: 14.0,
            label_dy: 2.0,

            axis_font_size: 10.0,
            tick_size: 6.0,
            x_tick_count: 10,
            y_tick_count: 5,
        }
    }
}
