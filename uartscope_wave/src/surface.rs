use std::collections::BTreeMap;

use crate::segment::Color;

pub type Point = (f64, f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

/// Drawing primitives the renderer issues. Implementations retain whatever
/// they were last told to show.
pub trait Surface {
    fn set_curve(&mut self, points: Vec<Point>);

    fn add_label(&mut self, label: Label) -> LabelId;

    /// Unknown handles are ignored.
    fn remove_label(&mut self, id: LabelId);
}

/// In-memory surface read back by the timing diagram widget.
#[derive(Debug, Default, Clone)]
pub struct Plot {
    curve: Vec<Point>,
    labels: BTreeMap<LabelId, Label>,
    next_id: u64,
}

impl Label {
    pub fn new(text: impl Into<String>, x: f64, y: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color,
        }
    }
}

impl Plot {
    pub fn curve(&self) -> &[Point] {
        &self.curve
    }

    /// Live labels in the order they were added.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.labels.values()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_blank(&self) -> bool {
        self.curve.is_empty() && self.labels.is_empty()
    }
}

impl Surface for Plot {
    fn set_curve(&mut self, points: Vec<Point>) {
        self.curve = points;
    }

    fn add_label(&mut self, label: Label) -> LabelId {
        let id = LabelId(self.next_id);
        self.next_id += 1;
        self.labels.insert(id, label);
        id
    }

    fn remove_label(&mut self, id: LabelId) {
        self.labels.remove(&id);
    }
}
