use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{layout::Rect, text::Line, Frame};

use crate::{
    backend::interpreter::{self, Command},
    component::{Component, HandleResult},
    styles::command_line::IDLE_STYLE,
    threads::DrawMessage,
    widgets::{CommandLine, CommandLineState, KeyDesc, KeyMaps},
};

/// One-line command prompt. Submitting a line stores the interpreted command
/// for the parent to pick up with [`CommandInterpreter::take_result`].
pub struct CommandInterpreter {
    message_tx: Sender<DrawMessage>,
    command_line_state: CommandLineState,
    line_state: LineState,
    pending: Option<Result<Command, String>>,
}

#[derive(PartialEq, Debug)]
enum LineState {
    Active,
    NotActive,
}

impl CommandInterpreter {
    const IDLE_HINT: &'static str = " press : to enter a command";

    pub fn new(message_tx: Sender<DrawMessage>) -> Self {
        Self {
            message_tx,
            command_line_state: CommandLineState::default(),
            line_state: LineState::NotActive,
            pending: None,
        }
    }

    pub fn open_with(&mut self, text: &str) {
        self.command_line_state.set_text(text);
        self.line_state = LineState::Active;
        self.pending = None;
    }

    pub fn is_active(&self) -> bool {
        self.line_state == LineState::Active
    }

    pub fn take_result(&mut self) -> Option<Result<Command, String>> {
        self.pending.take()
    }

    fn close(&mut self) -> HandleResult {
        self.command_line_state.clear();
        self.line_state = LineState::NotActive;
        self.notify_render();
        HandleResult::ReleaseFocus
    }

    fn submit(&mut self) -> HandleResult {
        let text = self.command_line_state.text();
        tracing::info!(command = text, "command submitted");
        self.pending = Some(interpreter::interpret(text));
        self.close()
    }

    fn notify_render(&self) {
        let _ = self.message_tx.send(DrawMessage::Render);
    }
}

impl Component for CommandInterpreter {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.line_state {
            LineState::Active => {
                f.render_stateful_widget(
                    CommandLine::default(),
                    rect,
                    &mut self.command_line_state,
                );
            }
            LineState::NotActive => {
                f.render_widget(Line::from(Self::IDLE_HINT).style(IDLE_STYLE), rect);
            }
        }
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult {
        if key_event.kind != KeyEventKind::Press {
            return HandleResult::Handled;
        }
        let state = &mut self.command_line_state;
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Esc, _) => return self.close(),
            (KeyCode::Char('d'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
                return self.close()
            }
            (KeyCode::Enter, _) => return self.submit(),
            (KeyCode::Char(c), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
                state.put(c)
            }
            (KeyCode::Backspace, _) => state.backspace(),
            (KeyCode::Left, _) => state.move_cursor_left(),
            (KeyCode::Right, _) => state.move_cursor_right(),
            _ => (),
        }
        self.notify_render();
        HandleResult::Handled
    }

    fn handle_resize_event(&mut self, _columns: u16, _rows: u16) -> HandleResult {
        self.notify_render();
        HandleResult::Handled
    }

    fn get_key_mappings(&self) -> KeyMaps {
        KeyMaps::default()
            .with(KeyCode::Enter, KeyDesc::from("execute").prio(0))
            .with(KeyCode::Esc, KeyDesc::from("cancel").prio(1))
            .with(
                (KeyCode::Char('d'), KeyModifiers::CONTROL),
                KeyDesc::from("cancel").prio(1),
            )
            .with(KeyCode::Left, KeyDesc::from("move cursor").prio(2))
            .with(KeyCode::Right, KeyDesc::from("move cursor").prio(2))
    }
}
