use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{List, ListDirection, ListItem, Widget},
};

use crate::styles::log_view::{ERROR_OUTPUT_STYLE, NORMAL_OUTPUT_STYLE};

/// Bottom-anchored list of results; the newest entry sits on the last line.
pub struct LogView<'a> {
    entries: &'a [Result<String, String>],
}

impl<'a> LogView<'a> {
    pub fn new(entries: &'a [Result<String, String>]) -> Self {
        Self { entries }
    }

    fn list_items(&self) -> Vec<ListItem<'a>> {
        self.entries
            .iter()
            .rev()
            .map(|entry| match entry {
                Ok(output) => ListItem::new(output.as_str()).style(NORMAL_OUTPUT_STYLE),
                Err(output) => ListItem::new(output.as_str()).style(ERROR_OUTPUT_STYLE),
            })
            .collect()
    }
}

impl Widget for LogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let list = List::new(self.list_items()).direction(ListDirection::BottomToTop);
        Widget::render(list, area, buf);
    }
}
