use std::collections::BTreeMap;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::styles::command_keys_help_bar::{DESCRIPTION_STYLE, KEY_ID_STYLE};

/// Key bindings grouped by what they do, ordered by priority then
/// description.
#[derive(Clone, Default)]
pub struct KeyMaps(BTreeMap<KeyDesc, Vec<KeyId>>);

#[derive(Eq, Hash, PartialEq, Clone, Debug)]
pub struct KeyId {
    pub key_code: KeyCode,
    pub key_modifiers: KeyModifiers,
}

#[derive(Eq, Hash, PartialEq, Clone, PartialOrd, Ord, Debug)]
pub struct KeyDesc {
    pub prio: i64,
    pub desc: String,
}

pub struct KeyMapHelpBar<'a> {
    key_maps: &'a KeyMaps,
}

impl KeyMaps {
    pub fn insert(&mut self, key_id: impl Into<KeyId>, desc: impl Into<KeyDesc>) {
        let key_ids = self.0.entry(desc.into()).or_default();
        let key_id = key_id.into();
        if !key_ids.contains(&key_id) {
            key_ids.push(key_id);
        }
    }

    pub fn with(mut self, key_id: impl Into<KeyId>, desc: impl Into<KeyDesc>) -> Self {
        self.insert(key_id, desc);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyDesc, &Vec<KeyId>)> {
        self.0.iter()
    }
}

impl KeyDesc {
    pub fn prio(mut self, prio: i64) -> Self {
        self.prio = prio;
        self
    }
}

impl From<&str> for KeyDesc {
    fn from(desc: &str) -> Self {
        KeyDesc {
            prio: 0,
            desc: desc.to_string(),
        }
    }
}

impl From<char> for KeyId {
    fn from(ch: char) -> Self {
        KeyId {
            key_code: KeyCode::Char(ch),
            key_modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<KeyCode> for KeyId {
    fn from(key_code: KeyCode) -> Self {
        KeyId {
            key_code,
            key_modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyId {
    fn from((key_code, key_modifiers): (KeyCode, KeyModifiers)) -> Self {
        KeyId {
            key_code,
            key_modifiers,
        }
    }
}

impl std::fmt::Display for KeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self.key_code {
            KeyCode::Char(':') => "<colon>".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            code => code.to_string(),
        };
        let mut modifiers = vec![];
        if self.key_modifiers.contains(KeyModifiers::CONTROL) {
            modifiers.push("Ctrl");
        }
        if self.key_modifiers.contains(KeyModifiers::ALT) {
            modifiers.push("Alt");
        }
        if self.key_modifiers.contains(KeyModifiers::SHIFT) {
            modifiers.push("Shift");
        }
        if modifiers.is_empty() {
            write!(f, "{key}")
        } else {
            write!(f, "{}-{key}", modifiers.join("+"))
        }
    }
}

impl<'a> KeyMapHelpBar<'a> {
    pub fn new(key_maps: &'a KeyMaps) -> Self {
        KeyMapHelpBar { key_maps }
    }

    fn entry(desc: &KeyDesc, key_ids: &[KeyId]) -> Vec<Span<'static>> {
        let keys = key_ids
            .iter()
            .map(KeyId::to_string)
            .collect::<Vec<String>>()
            .join(", ");
        vec![
            Span::from("["),
            Span::styled(keys, KEY_ID_STYLE),
            Span::from(": "),
            Span::styled(desc.desc.clone(), DESCRIPTION_STYLE),
            Span::from("] "),
        ]
    }
}

impl Widget for KeyMapHelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = vec![];
        let mut width = 0;
        for (desc, key_ids) in self.key_maps.iter() {
            let entry = Self::entry(desc, key_ids);
            let entry_width: usize = entry.iter().map(Span::width).sum();
            if width + entry_width > area.width as usize {
                break;
            }
            width += entry_width;
            spans.extend(entry);
        }
        Line::from(spans).alignment(Alignment::Center).render(area, buf);
    }
}
