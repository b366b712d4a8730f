use std::fmt::Write;

use lyon::math::{Box2D, Point};
use lyon::path::{Path, PathEvent};
use palette::Srgb;

use crate::color::hex;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Baseline {
    #[default]
    Alphabetic,
    Middle,
    /// `y` is the top of the text.
    Hanging,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub anchor: TextAnchor,
    pub baseline: Baseline,
    pub font_size: f32,
    /// Vertical nudge, positive moves the text down.
    pub dy: f32,
    pub color: Srgb<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    pub fill: Option<Srgb<u8>>,
    pub stroke: Option<Srgb<u8>>,
}

/// Whatever the track is drawn onto. Every render pass starts with
/// `clear`; nothing is patched in place.
pub trait Surface {
    fn clear(&mut self);

    fn fill_path(&mut self, path: &Path, color: Srgb<u8>);

    fn stroke_path(&mut self, path: &Path, color: Srgb<u8>, width: f32);

    fn rect(&mut self, rect: Box2D, style: RectStyle);

    fn text(&mut self, at: Point, text: &str, style: TextStyle);
}

#[derive(Debug, Clone)]
pub enum DrawCommand {
    Fill {
        path: Path,
        color: Srgb<u8>,
    },
    Stroke {
        path: Path,
        color: Srgb<u8>,
        width: f32,
    },
    Rect {
        rect: Box2D,
        style: RectStyle,
    },
    Text {
        at: Point,
        text: String,
        style: TextStyle,
    },
}

/// Records draw commands; can be replayed as an SVG document.
#[derive(Debug, Default, Clone)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl DisplayList {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of times the list has been cleared, i.e. the number of
    /// passes drawn onto it.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn fills(&self) -> impl Iterator<Item = (&Path, Srgb<u8>)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Fill { path, color } => Some((path, *color)),
            _ => None,
        })
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&Path, Srgb<u8>)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Stroke { path, color, .. } => Some((path, *color)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Box2D, &RectStyle)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Rect { rect, style } => Some((rect, style)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&Point, &str)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { at, text, .. } => Some((at, text.as_str())),
            _ => None,
        })
    }

    pub fn to_svg(&self, width: f64, height: f64) -> String {
        let mut out = String::new();
        let _ = self.write_svg(&mut out, width, height);
        out
    }

    fn write_svg(
        &self,
        out: &mut String,
        width: f64,
        height: f64,
    ) -> std::fmt::Result {
        let (width, height) = (width.max(0.0), height.max(0.0));

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#
        )?;

        for cmd in self.commands.iter() {
            match cmd {
                DrawCommand::Fill { path, color } => {
                    writeln!(
                        out,
                        r#"<path d="{}" fill="{}"/>"#,
                        svg_path_data(path),
                        hex(*color)
                    )?;
                }
                DrawCommand::Stroke { path, color, width } => {
                    writeln!(
                        out,
                        r#"<path d="{}" fill="none" stroke="{}" stroke-width="{width}"/>"#,
                        svg_path_data(path),
                        hex(*color)
                    )?;
                }
                DrawCommand::Rect { rect, style } => {
                    let fill = style.fill.map(hex).unwrap_or("none".into());
                    let stroke = style.stroke.map(hex).unwrap_or("none".into());
                    writeln!(
                        out,
                        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}" stroke="{stroke}"/>"#,
                        rect.min.x,
                        rect.min.y,
                        rect.width(),
                        rect.height()
                    )?;
                }
                DrawCommand::Text { at, text, style } => {
                    let anchor = match style.anchor {
                        TextAnchor::Start => "start",
                        TextAnchor::Middle => "middle",
                        TextAnchor::End => "end",
                    };
                    let baseline = match style.baseline {
                        Baseline::Alphabetic => "alphabetic",
                        Baseline::Middle => "middle",
                        Baseline::Hanging => "hanging",
                    };
                    writeln!(
                        out,
                        r#"<text x="{}" y="{}" dy="{}px" text-anchor="{anchor}" alignment-baseline="{baseline}" font-size="{}px" fill="{}">{}</text>"#,
                        at.x,
                        at.y,
                        style.dy,
                        style.font_size,
                        hex(style.color),
                        escape_text(text)
                    )?;
                }
            }
        }

        writeln!(out, "</svg>")
    }
}

impl Surface for DisplayList {
    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn fill_path(&mut self, path: &Path, color: Srgb<u8>) {
        self.commands.push(DrawCommand::Fill {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &Path, color: Srgb<u8>, width: f32) {
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            color,
            width,
        });
    }

    fn rect(&mut self, rect: Box2D, style: RectStyle) {
        self.commands.push(DrawCommand::Rect { rect, style });
    }

    fn text(&mut self, at: Point, text: &str, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            at,
            text: text.to_string(),
            style,
        });
    }
}

pub fn svg_path_data(path: &Path) -> String {
    let mut d = String::new();

    for event in path.iter() {
        let _ = match event {
            PathEvent::Begin { at } => write!(d, "M{},{}", at.x, at.y),
            PathEvent::Line { to, .. } => write!(d, "L{},{}", to.x, to.y),
            PathEvent::Quadratic { ctrl, to, .. } => {
                write!(d, "Q{},{},{},{}", ctrl.x, ctrl.y, to.x, to.y)
            }
            PathEvent::Cubic {
                ctrl1, ctrl2, to, ..
            } => write!(
                d,
                "C{},{},{},{},{},{}",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            ),
            PathEvent::End { close: true, .. } => write!(d, "Z"),
            PathEvent::End { close: false, .. } => Ok(()),
        };
    }

    d
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
