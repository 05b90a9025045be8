use std::sync::mpsc::Sender;
use std::sync::{Arc, RwLock};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use uartscope_wave::{explanation::PLACEHOLDER, generate_byte, Explanation, WaveformSequence};

use crate::backend::input::{self, InputFormat};
use crate::backend::interpreter::{self, Command};
use crate::component::{Component, HandleResult};
use crate::config::Config;
use crate::styles::root::{FIELD_NAME_STYLE, FIELD_VALUE_STYLE, PLACEHOLDER_STYLE, TITLE_STYLE};
use crate::threads::DrawMessage;
use crate::widgets::{KeyDesc, KeyMaps, LogView};

use super::{CommandInterpreter, WaveViewer};

pub struct Root {
    message_tx: Sender<DrawMessage>,
    data: String,
    format: InputFormat,
    explanation: Option<Explanation>,
    last_sent: Option<WaveformSequence>,
    log: Vec<Result<String, String>>,
    wave_viewer: WaveViewer,
    command_interpreter: Arc<RwLock<CommandInterpreter>>,
    focused_child: Option<Child>,
}

enum Child {
    CommandInterpreter,
}

impl Root {
    pub fn new(message_tx: Sender<DrawMessage>, config: &Config) -> Self {
        let command_interpreter = CommandInterpreter::new(message_tx.clone());
        Self {
            message_tx,
            data: config.input.data.clone(),
            format: config.input.format,
            explanation: None,
            last_sent: None,
            log: vec![],
            wave_viewer: WaveViewer::new((&config.plot).into()),
            command_interpreter: Arc::new(RwLock::new(command_interpreter)),
            focused_child: None,
        }
    }

    fn notify_render(&self) {
        let _ = self.message_tx.send(DrawMessage::Render);
    }

    fn notify_quit(&self) {
        let _ = self.message_tx.send(DrawMessage::Quit);
    }

    fn log_error(&mut self, message: impl std::fmt::Display) {
        tracing::warn!(%message, "rejected");
        self.log.push(Err(format!("Error: {message}")));
    }
}

impl Root {
    fn execute(&mut self, command: Command) {
        match command {
            Command::Send(data) => self.send(data),
            Command::Format(format) => self.set_format(format),
            Command::Step => self.step(),
            Command::Clear => self.clear(),
            Command::Help => self.log.push(Ok(interpreter::help().to_string())),
            Command::Quit => self.notify_quit(),
            Command::Noop => (),
        }
    }

    fn send(&mut self, data: Option<String>) {
        if let Some(data) = data {
            self.data = data;
        }
        let byte = match input::parse_data(&self.data, self.format).and_then(input::to_byte) {
            Ok(byte) => byte,
            Err(message) => return self.log_error(message),
        };
        let explanation = Explanation::new(byte);
        let sequence = generate_byte(byte);
        self.wave_viewer.display(sequence.clone(), explanation.binary());
        tracing::info!(data = explanation.hex(), "sent");
        self.log.push(Ok(format!(
            "Sent {} ({})",
            explanation.hex(),
            explanation.binary()
        )));
        self.explanation = Some(explanation);
        self.last_sent = Some(sequence);
    }

    fn step(&mut self) {
        if self.wave_viewer.is_empty() {
            let Some(sequence) = self.last_sent.clone() else {
                return self.log_error("nothing to step, send data first");
            };
            self.wave_viewer.stage(sequence);
        }
        if !self.wave_viewer.step() {
            self.log.push(Ok("All bits shown".to_string()));
        }
    }

    fn clear(&mut self) {
        tracing::info!("cleared");
        self.wave_viewer.reset();
        self.log.clear();
        self.explanation = None;
    }

    fn set_format(&mut self, format: InputFormat) {
        self.format = format;
        tracing::info!(%format, "input format changed");
        self.log.push(Ok(format!("Format set to {format}")));
    }

    fn open_command_line(&mut self, text: &str) {
        self.command_interpreter.write().unwrap().open_with(text);
        self.focused_child = Some(Child::CommandInterpreter);
    }
}

impl Root {
    fn render_control_bar(&self, f: &mut Frame, rect: Rect) {
        let line = Line::from(vec![
            Span::styled(" UART Scope ", TITLE_STYLE),
            Span::styled(" Data: ", FIELD_NAME_STYLE),
            Span::styled(self.data.as_str(), FIELD_VALUE_STYLE),
            Span::styled("  Format: ", FIELD_NAME_STYLE),
            Span::styled(self.format.to_string(), FIELD_VALUE_STYLE),
        ]);
        f.render_widget(line, rect);
    }

    fn render_wave_viewer(&mut self, f: &mut Frame, rect: Rect) {
        let block = Self::titled_block("UART Timing Diagram");
        self.wave_viewer.render_with_block(f, rect, block);
    }

    fn render_explanation(&self, f: &mut Frame, rect: Rect) {
        let text = match &self.explanation {
            Some(explanation) => Text::from(explanation.text()),
            None => Text::styled(PLACEHOLDER, PLACEHOLDER_STYLE),
        };
        let paragraph = Paragraph::new(text).block(Self::titled_block("Explanation"));
        f.render_widget(paragraph, rect);
    }

    fn render_log(&self, f: &mut Frame, rect: Rect) {
        let block = Self::titled_block("Log");
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        f.render_widget(LogView::new(&self.log), inner);
    }

    fn render_command_line(&self, f: &mut Frame, rect: Rect) {
        self.command_interpreter.write().unwrap().render(f, rect);
    }

    fn titled_block(title: &str) -> Block<'_> {
        Block::new()
            .borders(Borders::ALL)
            .title(Span::styled(format!(" {title} "), TITLE_STYLE))
    }
}

impl Component for Root {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical(vec![
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(rect);
        self.render_control_bar(f, chunks[0]);
        self.render_wave_viewer(f, chunks[1]);
        self.render_explanation(f, chunks[2]);
        self.render_log(f, chunks[3]);
        self.render_command_line(f, chunks[4]);
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult {
        if key_event.kind != KeyEventKind::Press {
            return HandleResult::NotHandled;
        }
        match key_event.code {
            KeyCode::Enter => self.send(None),
            KeyCode::Char('s') => self.step(),
            KeyCode::Char('c') => self.clear(),
            KeyCode::Char('f') => self.set_format(self.format.next()),
            KeyCode::Char('e') => {
                let text = format!("send {}", self.data);
                self.open_command_line(&text);
            }
            KeyCode::Char(':') => self.open_command_line(""),
            KeyCode::Char('q') => {
                self.notify_quit();
                return HandleResult::Handled;
            }
            _ => return HandleResult::NotHandled,
        }
        self.notify_render();
        HandleResult::Handled
    }

    fn handle_resize_event(&mut self, _columns: u16, _rows: u16) -> HandleResult {
        self.notify_render();
        HandleResult::Handled
    }

    fn handle_focus_gained(&mut self) {
        self.focused_child = None;
        let pending = self.command_interpreter.write().unwrap().take_result();
        match pending {
            Some(Ok(command)) => self.execute(command),
            Some(Err(message)) => self.log_error(message),
            None => (),
        }
        self.notify_render();
    }

    fn get_focused_child(&self) -> Option<Arc<RwLock<dyn Component>>> {
        match self.focused_child {
            Some(Child::CommandInterpreter) => {
                Some(self.command_interpreter.clone() as Arc<RwLock<dyn Component>>)
            }
            None => None,
        }
    }

    fn get_key_mappings(&self) -> KeyMaps {
        if let Some(child) = &self.get_focused_child() {
            return child.read().unwrap().get_key_mappings();
        }
        KeyMaps::default()
            .with(KeyCode::Enter, KeyDesc::from("send").prio(0))
            .with('s', KeyDesc::from("step").prio(1))
            .with('c', KeyDesc::from("clear").prio(2))
            .with('f', KeyDesc::from("format").prio(3))
            .with('e', KeyDesc::from("edit data").prio(4))
            .with(':', KeyDesc::from("command").prio(5))
            .with('q', KeyDesc::from("quit").prio(6))
    }
}
