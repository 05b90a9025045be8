use std::ops::Index;

/// One bit-period of a UART frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub label: String,
    pub level: Level,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Semantic colors shared by segments and overlay labels. Generated segments
/// only ever use `Green`, `Yellow` and `Red`; `Cyan` and `Magenta` belong to
/// the annotated label mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Yellow,
    Red,
    Cyan,
    Magenta,
}

/// Ordered, immutable list of segments. The index of a segment is also its
/// x coordinate when plotted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaveformSequence(Vec<Segment>);

impl Segment {
    pub fn new(label: impl Into<String>, level: Level, color: Color) -> Self {
        Self {
            label: label.into(),
            level,
            color,
        }
    }
}

impl Level {
    pub fn bit(&self) -> u8 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }

    pub fn y(&self) -> f64 {
        self.bit() as f64
    }
}

impl From<bool> for Level {
    fn from(bit: bool) -> Self {
        if bit {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Green => f.write_str("green"),
            Color::Yellow => f.write_str("yellow"),
            Color::Red => f.write_str("red"),
            Color::Cyan => f.write_str("cyan"),
            Color::Magenta => f.write_str("magenta"),
        }
    }
}

impl WaveformSequence {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Segment> {
        self.0.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.0.iter()
    }
}

impl From<Vec<Segment>> for WaveformSequence {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

impl Index<usize> for WaveformSequence {
    type Output = Segment;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.0[idx]
    }
}

impl<'a> IntoIterator for &'a WaveformSequence {
    type Item = &'a Segment;

    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
