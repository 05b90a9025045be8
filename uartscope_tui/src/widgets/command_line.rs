use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

use crate::styles::command_line::{HEADER_STYLE, LINE_STYLE, TEXT_CURSOR_STYLE};

#[derive(Default)]
pub struct CommandLine {}

/// Edited text plus a cursor counted in characters, not bytes.
#[derive(Default, Debug)]
pub struct CommandLineState {
    text: String,
    cursor: usize,
}

impl CommandLine {
    const HEADER: &'static str = " : ";
}

impl StatefulWidget for CommandLine {
    type State = CommandLineState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let header_width = Self::HEADER.chars().count() + 1;
        let viewport = (area.width as usize).saturating_sub(header_width).max(1);
        let start = (state.cursor + 1).saturating_sub(viewport);

        let chars: Vec<char> = state.text.chars().collect();
        let before: String = chars[start..state.cursor].iter().collect();
        let under = chars
            .get(state.cursor)
            .map(char::to_string)
            .unwrap_or_else(|| " ".to_string());
        let after: String = chars
            .iter()
            .skip(state.cursor + 1)
            .take(viewport - (state.cursor - start + 1))
            .collect();

        let line = Line::from(vec![
            Span::styled(Self::HEADER, HEADER_STYLE),
            Span::from(" "),
            Span::from(before),
            Span::styled(under, TEXT_CURSOR_STYLE),
            Span::from(after),
        ]);
        line.style(LINE_STYLE).render(area, buf);
    }
}

impl CommandLineState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn put(&mut self, ch: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn byte_index(&self, ch_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(ch_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
