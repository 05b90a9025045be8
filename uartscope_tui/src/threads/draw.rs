use crate::component::Component;
use crate::tui::Tui;

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};

use super::thread_group::ThreadGroup;
use super::util::panic_message;
use super::{Thread, ThreadError, ThreadResult};

#[derive(Debug, PartialEq)]
pub enum Message {
    Quit,
    Render,
}

/// Redraws the root component whenever a `Render` message arrives. A `Quit`
/// message, or every sender going away, ends the thread and the group.
pub struct DrawThread {
    handle: Option<JoinHandle<ThreadResult>>,
    message_channel_tx: Sender<Message>,
}

impl DrawThread {
    pub fn new(
        root_component: Arc<RwLock<dyn Component>>,
        message_channel_tx: Sender<Message>,
        message_channel_rx: Receiver<Message>,
        mut terminal: Tui,
        thread_group: &ThreadGroup,
    ) -> Self {
        let terminate_group_channel_tx = thread_group.get_terminate_group_channel_tx();

        let handle = thread::spawn(move || -> ThreadResult {
            let mut message = Message::Render;
            while message != Message::Quit {
                let drawn = terminal.draw(|frame| {
                    let area = frame.area();
                    root_component
                        .write()
                        .unwrap()
                        .render_with_command_keys_help_bar(frame, area)
                });
                if let Err(e) = drawn {
                    tracing::error!(error = %e, "terminal draw failed");
                    let _ = terminate_group_channel_tx.send(());
                    return Err(ThreadError::Io(e));
                }
                message = message_channel_rx.recv().unwrap_or(Message::Quit);
            }

            tracing::info!("quit requested");
            let _ = terminate_group_channel_tx.send(());
            Ok(())
        });

        Self {
            handle: Some(handle),
            message_channel_tx,
        }
    }
}

impl Thread for DrawThread {
    fn name(&self) -> &'static str {
        "draw"
    }

    fn terminate(&mut self) -> ThreadResult {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        let _ = self.message_channel_tx.send(Message::Quit);
        match handle.join() {
            Err(e) => Err(ThreadError::Panic(panic_message(&e))),
            Ok(res) => res,
        }
    }
}
