use crate::component::Component;

use crossterm::event::Event;

use std::{
    sync::{
        mpsc::{self, Sender},
        Arc, RwLock,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use super::{thread_group::ThreadGroup, util::panic_message, Thread, ThreadError, ThreadResult};

const POLL_INTERVAL: Duration = Duration::from_millis(500);

type SharedComponent = Arc<RwLock<dyn Component>>;

/// Polls the terminal and hands every event to the registered components,
/// one event at a time.
pub struct EventThread {
    handle: Option<JoinHandle<ThreadResult>>,
    stop_channel_tx: Sender<()>,
    listeners: Arc<RwLock<Vec<SharedComponent>>>,
}

impl EventThread {
    pub fn new(thread_group: &ThreadGroup) -> Self {
        let (stop_channel_tx, stop_channel_rx) = mpsc::channel::<()>();
        let terminate_group_channel_tx = thread_group.get_terminate_group_channel_tx();
        let listeners = Arc::new(RwLock::new(vec![]));
        let thread_listeners = listeners.clone();

        let handle = thread::spawn(move || -> ThreadResult {
            while stop_channel_rx.try_recv().is_err() {
                let event = match crossterm::event::poll(POLL_INTERVAL) {
                    Ok(false) => continue,
                    Ok(true) => crossterm::event::read(),
                    Err(e) => Err(e),
                };
                match event {
                    Ok(event) => Self::notify_event_listeners(&thread_listeners, &event),
                    Err(e) => {
                        tracing::error!(error = %e, "terminal event polling failed");
                        let _ = terminate_group_channel_tx.send(());
                        return Err(ThreadError::Io(e));
                    }
                }
            }
            Ok(())
        });

        EventThread {
            handle: Some(handle),
            stop_channel_tx,
            listeners,
        }
    }

    pub fn register_event_listener(&mut self, listener: SharedComponent) {
        self.listeners.write().unwrap().push(listener);
    }

    fn notify_event_listeners(listeners: &RwLock<Vec<SharedComponent>>, event: &Event) {
        for listener in listeners.read().unwrap().iter() {
            listener.write().unwrap().handle_event(event);
        }
    }
}

impl Thread for EventThread {
    fn name(&self) -> &'static str {
        "event"
    }

    fn terminate(&mut self) -> ThreadResult {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        let _ = self.stop_channel_tx.send(());
        match handle.join() {
            Err(e) => Err(ThreadError::Panic(panic_message(&e))),
            Ok(res) => res,
        }
    }
}
