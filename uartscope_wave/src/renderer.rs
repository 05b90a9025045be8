//! Timing diagram state machine.
//!
//! A [`Renderer`] owns the sequence being shown, a cursor counting the
//! revealed segments, and the handles of every label it has put on its
//! [`Surface`]. Each operation leaves the curve and the labels on the surface
//! describing the same segments.

use crate::{
    segment::{Color, WaveformSequence},
    surface::{Label, LabelId, Point, Surface},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Vertical gap between a plain label and the curve.
    pub label_offset: f64,
    /// Fixed height of annotated labels.
    pub annotation_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Displayed,
    Stepping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    None,
    Plain,
    Annotated,
}

pub struct Renderer<S: Surface> {
    surface: S,
    options: RenderOptions,
    sequence: WaveformSequence,
    cursor: usize,
    overlays: Vec<LabelId>,
    phase: Phase,
    label_mode: LabelMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            label_offset: 0.2,
            annotation_height: 1.0,
        }
    }
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            options: RenderOptions::default(),
            sequence: WaveformSequence::empty(),
            cursor: 0,
            overlays: vec![],
            phase: Phase::Empty,
            label_mode: LabelMode::None,
        }
    }

    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn sequence(&self) -> &WaveformSequence {
        &self.sequence
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn label_mode(&self) -> LabelMode {
        self.label_mode
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.sequence.len()
    }

    /// Back to the freshly constructed state: no sequence, cursor 0, blank
    /// surface.
    pub fn reset(&mut self) {
        self.clear_visuals();
        self.sequence = WaveformSequence::empty();
        self.cursor = 0;
        self.phase = Phase::Empty;
        tracing::debug!("renderer reset");
    }

    /// Draws the whole sequence at once with one plain label per segment.
    pub fn display(&mut self, sequence: WaveformSequence) {
        self.sequence = sequence;
        self.cursor = self.sequence.len();
        let points = self.points(self.cursor);
        self.surface.set_curve(points);
        self.clear_overlays();
        for idx in 0..self.sequence.len() {
            self.add_plain_label(idx);
        }
        if self.sequence.is_empty() {
            self.phase = Phase::Empty;
            self.label_mode = LabelMode::None;
        } else {
            self.phase = Phase::Displayed;
            self.label_mode = LabelMode::Plain;
        }
        tracing::debug!(segments = self.sequence.len(), "renderer displayed sequence");
    }

    /// Replaces the labels of a displayed sequence with the annotated set
    /// derived from `binary`, an MSB-first bit string. The curve is kept.
    /// Ignored unless the current sequence was drawn by [`Renderer::display`].
    pub fn annotate(&mut self, binary: &str) {
        if self.phase != Phase::Displayed {
            tracing::debug!(phase = ?self.phase, "annotation ignored");
            return;
        }
        self.clear_overlays();
        let height = self.options.annotation_height;
        self.add_label(Label::new("Start", 0.0, height, Color::Green));
        let bits: Vec<char> = binary.chars().collect();
        for (i, bit) in bits.iter().rev().enumerate() {
            let (name, color) = match i {
                0 => ("LSB".to_string(), Color::Cyan),
                7 => ("MSB".to_string(), Color::Magenta),
                i => (format!("Bit {}", i + 1), Color::Yellow),
            };
            let text = format!("{name}: {bit}");
            self.add_label(Label::new(text, (i + 1) as f64, height, color));
        }
        self.add_label(Label::new(
            "Stop",
            (bits.len() + 1) as f64,
            height,
            Color::Red,
        ));
        self.label_mode = LabelMode::Annotated;
        tracing::debug!(binary, "renderer annotated sequence");
    }

    /// Holds `sequence` for stepping without drawing anything.
    pub fn stage(&mut self, sequence: WaveformSequence) {
        self.clear_visuals();
        self.sequence = sequence;
        self.cursor = 0;
        self.phase = if self.sequence.is_empty() {
            Phase::Empty
        } else {
            Phase::Stepping
        };
        tracing::debug!(segments = self.sequence.len(), "renderer staged sequence");
    }

    /// Reveals the next segment. A step taken right after a full display
    /// starts over from a blank surface. Returns `false` once every segment
    /// has been revealed or when there is nothing to show.
    pub fn step(&mut self) -> bool {
        if self.phase == Phase::Displayed {
            self.cursor = 0;
            self.phase = Phase::Stepping;
        }
        if self.cursor >= self.sequence.len() {
            return false;
        }
        if self.cursor == 0 {
            self.clear_visuals();
        }
        let points = self.points(self.cursor + 1);
        self.surface.set_curve(points);
        self.add_plain_label(self.cursor);
        self.label_mode = LabelMode::Plain;
        self.cursor += 1;
        tracing::debug!(cursor = self.cursor, "renderer stepped");
        true
    }
}

impl<S: Surface> Renderer<S> {
    fn points(&self, count: usize) -> Vec<Point> {
        self.sequence
            .iter()
            .take(count)
            .enumerate()
            .map(|(x, segment)| (x as f64, segment.level.y()))
            .collect()
    }

    fn add_plain_label(&mut self, idx: usize) {
        let segment = &self.sequence[idx];
        let label = Label::new(
            segment.label.clone(),
            idx as f64,
            segment.level.y() + self.options.label_offset,
            segment.color,
        );
        self.add_label(label);
    }

    fn add_label(&mut self, label: Label) {
        let id = self.surface.add_label(label);
        self.overlays.push(id);
    }

    fn clear_overlays(&mut self) {
        for id in self.overlays.drain(..) {
            self.surface.remove_label(id);
        }
    }

    fn clear_visuals(&mut self) {
        self.surface.set_curve(vec![]);
        self.clear_overlays();
        self.label_mode = LabelMode::None;
    }
}

#[cfg(test)]
mod test {
    use crate::{
        generator::{binary_string, generate_byte},
        segment::Color,
        surface::{Label, LabelId, Plot, Point, Surface},
    };

    use super::{LabelMode, Phase, RenderOptions, Renderer};

    #[derive(Debug, PartialEq)]
    enum Call {
        SetCurve(usize),
        Add(String),
        Remove(LabelId),
    }

    #[derive(Default)]
    struct RecordingSurface {
        plot: Plot,
        calls: Vec<Call>,
    }

    impl Surface for RecordingSurface {
        fn set_curve(&mut self, points: Vec<Point>) {
            self.calls.push(Call::SetCurve(points.len()));
            self.plot.set_curve(points);
        }

        fn add_label(&mut self, label: Label) -> LabelId {
            self.calls.push(Call::Add(label.text.clone()));
            self.plot.add_label(label)
        }

        fn remove_label(&mut self, id: LabelId) {
            self.calls.push(Call::Remove(id));
            self.plot.remove_label(id);
        }
    }

    fn labels(renderer: &Renderer<Plot>) -> Vec<Label> {
        renderer.surface().labels().cloned().collect()
    }

    fn assert_blank(renderer: &Renderer<Plot>) {
        assert!(renderer.is_empty());
        assert_eq!(renderer.cursor(), 0);
        assert_eq!(renderer.overlay_count(), 0);
        assert_eq!(renderer.phase(), Phase::Empty);
        assert_eq!(renderer.label_mode(), LabelMode::None);
        assert!(renderer.surface().is_blank());
    }

    #[test]
    fn test_new_is_blank() {
        let renderer = Renderer::new(Plot::default());
        assert_blank(&renderer);
    }

    #[test]
    fn test_display_draws_everything() {
        let mut renderer = Renderer::new(Plot::default());
        renderer.display(generate_byte(0x41));

        assert_eq!(renderer.cursor(), 10);
        assert_eq!(renderer.phase(), Phase::Displayed);
        assert_eq!(renderer.label_mode(), LabelMode::Plain);
        let curve = renderer.surface().curve();
        assert_eq!(curve.len(), 10);
        assert_eq!(curve[0], (0.0, 0.0));
        assert_eq!(curve[1], (1.0, 1.0));
        assert_eq!(curve[9], (9.0, 1.0));

        let labels = labels(&renderer);
        assert_eq!(labels.len(), 10);
        assert_eq!(labels[0], Label::new("Start", 0.0, 0.2, Color::Green));
        assert_eq!(labels[1], Label::new("Data 1", 1.0, 1.2, Color::Yellow));
        assert_eq!(labels[2], Label::new("Data 2", 2.0, 0.2, Color::Yellow));
        assert_eq!(labels[9], Label::new("Stop", 9.0, 1.2, Color::Red));
    }

    #[test]
    fn test_display_is_idempotent() {
        let sequence = generate_byte(0xA5);
        let mut renderer = Renderer::new(Plot::default());

        renderer.display(sequence.clone());
        let first_curve = renderer.surface().curve().to_vec();
        let first_labels = labels(&renderer);

        renderer.display(sequence);
        assert_eq!(renderer.surface().curve(), &first_curve[..]);
        assert_eq!(labels(&renderer), first_labels);
        assert_eq!(renderer.overlay_count(), 10);
        assert_eq!(renderer.cursor(), 10);
    }

    #[test]
    fn test_display_removes_old_labels_before_adding() {
        let mut renderer = Renderer::new(RecordingSurface::default());
        renderer.display(generate_byte(1));
        let first_ids: Vec<LabelId> = renderer.overlays.clone();
        renderer.surface.calls.clear();

        renderer.display(generate_byte(2));

        let calls = &renderer.surface().calls;
        assert_eq!(calls[0], Call::SetCurve(10));
        let removals: Vec<&Call> = calls[1..11].iter().collect();
        for (call, id) in removals.iter().zip(first_ids) {
            assert_eq!(**call, Call::Remove(id));
        }
        assert!(calls[11..].iter().all(|c| matches!(c, Call::Add(_))));
        assert_eq!(calls.len(), 21);
        assert_eq!(renderer.surface().plot.label_count(), 10);
    }

    #[test]
    fn test_stepping_matches_display() {
        let sequence = generate_byte(0x41);

        let mut displayed = Renderer::new(Plot::default());
        displayed.display(sequence.clone());

        let mut stepped = Renderer::new(Plot::default());
        stepped.reset();
        stepped.stage(sequence);
        for n in 1..=10 {
            assert!(stepped.step());
            assert_eq!(stepped.cursor(), n);
            assert_eq!(stepped.surface().curve().len(), n);
            assert_eq!(stepped.overlay_count(), n);
            assert_eq!(stepped.surface().label_count(), n);
        }

        assert_eq!(stepped.surface().curve(), displayed.surface().curve());
        assert_eq!(labels(&stepped), labels(&displayed));
    }

    #[test]
    fn test_step_after_exhaustion_is_noop() {
        let mut renderer = Renderer::new(Plot::default());
        renderer.stage(generate_byte(0x3C));
        for _ in 0..10 {
            renderer.step();
        }
        let curve = renderer.surface().curve().to_vec();
        let labels_before = labels(&renderer);

        for _ in 0..5 {
            assert!(!renderer.step());
        }
        assert!(renderer.is_exhausted());
        assert_eq!(renderer.cursor(), 10);
        assert_eq!(renderer.surface().curve(), &curve[..]);
        assert_eq!(labels(&renderer), labels_before);
    }

    #[test]
    fn test_step_after_display_starts_from_blank() {
        let mut renderer = Renderer::new(Plot::default());
        renderer.display(generate_byte(0xFF));
        renderer.annotate(&binary_string(0xFF));

        assert!(renderer.step());

        assert_eq!(renderer.phase(), Phase::Stepping);
        assert_eq!(renderer.cursor(), 1);
        assert_eq!(renderer.surface().curve(), &[(0.0, 0.0)]);
        assert_eq!(
            labels(&renderer),
            vec![Label::new("Start", 0.0, 0.2, Color::Green)]
        );
    }

    #[test]
    fn test_step_on_empty_is_noop() {
        let mut renderer = Renderer::new(Plot::default());
        assert!(!renderer.step());
        assert_blank(&renderer);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut renderer = Renderer::new(Plot::default());
        renderer.display(generate_byte(7));
        renderer.reset();
        assert_blank(&renderer);

        renderer.display(generate_byte(7));
        renderer.annotate(&binary_string(7));
        renderer.reset();
        assert_blank(&renderer);

        renderer.stage(generate_byte(7));
        renderer.step();
        renderer.step();
        renderer.reset();
        assert_blank(&renderer);

        renderer.reset();
        assert_blank(&renderer);
    }

    #[test]
    fn test_annotate_0x41() {
        let mut renderer = Renderer::new(Plot::default());
        renderer.display(generate_byte(0x41));
        renderer.annotate("01000001");

        assert_eq!(renderer.label_mode(), LabelMode::Annotated);
        let labels = labels(&renderer);
        assert_eq!(labels.len(), 10);
        assert_eq!(labels[0], Label::new("Start", 0.0, 1.0, Color::Green));
        assert_eq!(labels[1], Label::new("LSB: 1", 1.0, 1.0, Color::Cyan));
        assert_eq!(labels[2], Label::new("Bit 2: 0", 2.0, 1.0, Color::Yellow));
        assert_eq!(labels[7], Label::new("Bit 7: 1", 7.0, 1.0, Color::Yellow));
        assert_eq!(labels[8], Label::new("MSB: 0", 8.0, 1.0, Color::Magenta));
        assert_eq!(labels[9], Label::new("Stop", 9.0, 1.0, Color::Red));
    }

    #[test]
    fn test_annotate_keeps_curve() {
        let mut renderer = Renderer::new(Plot::default());
        renderer.display(generate_byte(0x41));
        let curve = renderer.surface().curve().to_vec();

        renderer.annotate("01000001");

        assert_eq!(renderer.surface().curve(), &curve[..]);
        assert_eq!(renderer.overlay_count(), 10);
        assert_eq!(renderer.surface().label_count(), 10);
        assert_eq!(renderer.cursor(), 10);
    }

    #[test]
    fn test_annotate_agrees_with_plain_labels() {
        for byte in 0..=255u8 {
            let sequence = generate_byte(byte);
            let mut renderer = Renderer::new(Plot::default());
            renderer.display(sequence.clone());
            renderer.annotate(&binary_string(byte));

            for (idx, label) in labels(&renderer).iter().enumerate().skip(1).take(8) {
                let bit = sequence[idx].level.bit();
                assert!(label.text.ends_with(&format!(": {bit}")));
                assert_eq!(label.x, idx as f64);
            }
        }
    }

    #[test]
    fn test_annotate_ignored_outside_display() {
        let mut renderer = Renderer::new(Plot::default());
        renderer.annotate("01000001");
        assert_blank(&renderer);

        renderer.stage(generate_byte(0x41));
        renderer.step();
        renderer.annotate("01000001");
        assert_eq!(renderer.label_mode(), LabelMode::Plain);
        assert_eq!(renderer.overlay_count(), 1);
    }

    #[test]
    fn test_custom_options() {
        let options = RenderOptions {
            label_offset: 0.5,
            annotation_height: 1.3,
        };
        let mut renderer = Renderer::new(Plot::default()).options(options);
        renderer.display(generate_byte(0));
        assert_eq!(labels(&renderer)[1].y, 0.5);

        renderer.annotate("00000000");
        assert!(labels(&renderer).iter().all(|l| l.y == 1.3));
    }

    #[test]
    fn test_overlays_track_surface() {
        let mut renderer = Renderer::new(Plot::default());
        renderer.display(generate_byte(9));
        renderer.annotate(&binary_string(9));
        renderer.step();
        renderer.step();
        renderer.display(generate_byte(10));
        renderer.stage(generate_byte(11));
        renderer.step();
        assert_eq!(renderer.overlay_count(), renderer.surface().label_count());
    }
}
