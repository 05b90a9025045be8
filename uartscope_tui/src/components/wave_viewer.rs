use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use uartscope_wave::{Plot, RenderOptions, Renderer, WaveformSequence};

use crate::{
    component::{Component, HandleResult},
    widgets::{KeyMaps, TimingDiagram},
};

/// Timing diagram pane. Holds the renderer and draws whatever it left on its
/// plot.
pub struct WaveViewer {
    renderer: Renderer<Plot>,
}

impl WaveViewer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            renderer: Renderer::new(Plot::default()).options(options),
        }
    }

    /// Full draw of `sequence`, labelled with the bits of `binary`.
    pub fn display(&mut self, sequence: WaveformSequence, binary: &str) {
        self.renderer.display(sequence);
        self.renderer.annotate(binary);
    }

    pub fn stage(&mut self, sequence: WaveformSequence) {
        self.renderer.stage(sequence);
    }

    pub fn step(&mut self) -> bool {
        self.renderer.step()
    }

    pub fn reset(&mut self) {
        self.renderer.reset();
    }

    pub fn is_empty(&self) -> bool {
        self.renderer.is_empty()
    }

    pub fn renderer(&self) -> &Renderer<Plot> {
        &self.renderer
    }
}

impl Default for WaveViewer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl Component for WaveViewer {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        f.render_widget(TimingDiagram::new(self.renderer.surface()), rect);
    }

    fn handle_key_event(&mut self, _key_event: &KeyEvent) -> HandleResult {
        HandleResult::NotHandled
    }

    fn get_key_mappings(&self) -> KeyMaps {
        KeyMaps::default()
    }
}

#[cfg(test)]
mod test {
    use uartscope_wave::{binary_string, generate_byte, LabelMode, Phase};

    use super::WaveViewer;

    #[test]
    fn test_display_annotates() {
        let mut viewer = WaveViewer::default();
        viewer.display(generate_byte(0x41), &binary_string(0x41));

        let renderer = viewer.renderer();
        assert_eq!(renderer.phase(), Phase::Displayed);
        assert_eq!(renderer.label_mode(), LabelMode::Annotated);
        assert_eq!(renderer.surface().label_count(), 10);
    }

    #[test]
    fn test_stage_then_step() {
        let mut viewer = WaveViewer::default();
        viewer.stage(generate_byte(0x41));
        assert!(viewer.renderer().surface().is_blank());

        assert!(viewer.step());
        assert_eq!(viewer.renderer().surface().curve(), &[(0.0, 0.0)]);

        viewer.reset();
        assert!(viewer.is_empty());
        assert!(!viewer.step());
    }
}
