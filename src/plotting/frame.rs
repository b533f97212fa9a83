//! Backend independent draw commands produced by the chart renderers.
//!
//! A [`ChartFrame`] is the complete visual output of one render call, in pixel
//! coordinates of the chart surface (origin top left, y growing downwards).
//! Painting a new frame always replaces the previous one entirely.

use super::styles::Color;
use crate::types::ChartKind;

/// Extra pixels around small marks that still count as a hit.
const HIT_SLOP: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAnchor {
    Top,
    Middle,
    Bottom,
}

/// A single drawable shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        fill: Color,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: Color,
        stroke_width: f64,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        stroke: Color,
    },
    /// A pie slice. Angles are radians clockwise from 12 o'clock.
    Wedge {
        cx: f64,
        cy: f64,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
        fill: Color,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        font_size: f64,
        color: Color,
        h_anchor: HAnchor,
        v_anchor: VAnchor,
        /// Rotated a quarter turn counter-clockwise
        vertical: bool,
    },
}

impl Mark {
    /// Whether the surface point `(x, y)` falls on this mark.
    ///
    /// Only clickable shapes (bars and points) report hits.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self {
            Mark::Rect {
                x: left,
                y: top,
                width,
                height,
                ..
            } => x >= *left && x <= left + width && y >= *top && y <= top + height,
            Mark::Circle { cx, cy, radius, .. } => {
                (x - cx).hypot(y - cy) <= radius + HIT_SLOP
            }
            _ => false,
        }
    }
}

/// A mark plus the datum bound to it, if it is a filter source.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub mark: Mark,
    pub datum: Option<String>,
}

/// The complete output of one chart render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub kind: ChartKind,
    pub width: u32,
    pub height: u32,
    pub commands: Vec<DrawCommand>,
}

impl ChartFrame {
    pub fn new(kind: ChartKind, width: u32, height: u32) -> Self {
        Self {
            kind,
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, mark: Mark) {
        self.commands.push(DrawCommand { mark, datum: None });
    }

    pub fn push_with_datum(&mut self, mark: Mark, datum: impl Into<String>) {
        self.commands.push(DrawCommand {
            mark,
            datum: Some(datum.into()),
        });
    }

    pub fn marks(&self) -> impl Iterator<Item = &Mark> {
        self.commands.iter().map(|command| &command.mark)
    }

    /// Marks that carry a datum, i.e. the clickable ones.
    pub fn bound(&self) -> impl Iterator<Item = (&Mark, &str)> {
        self.commands
            .iter()
            .filter_map(|command| command.datum.as_deref().map(|d| (&command.mark, d)))
    }

    /// Datum of the topmost clickable mark under `(x, y)`.
    pub fn hit(&self, x: f64, y: f64) -> Option<&str> {
        self.commands
            .iter()
            .rev()
            .filter(|command| command.datum.is_some())
            .find(|command| command.mark.contains(x, y))
            .and_then(|command| command.datum.as_deref())
    }

    /// Text content of every label, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.marks()
            .filter_map(|mark| match mark {
                Mark::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}
