use std::sync::mpsc::{self, Receiver, Sender};

use super::{Thread, ThreadResult};

/// Threads that live and die together: the first one to signal on the
/// terminate channel brings the whole group down.
pub struct ThreadGroup {
    terminate_channel_rx: Receiver<()>,
    terminate_channel_tx: Sender<()>,
    threads: Vec<Box<dyn Thread>>,
}

impl ThreadGroup {
    pub fn new() -> Self {
        let (terminate_channel_tx, terminate_channel_rx) = mpsc::channel();
        Self {
            terminate_channel_rx,
            terminate_channel_tx,
            threads: vec![],
        }
    }

    pub fn add_thread(&mut self, thread: Box<dyn Thread>) {
        self.threads.push(thread);
    }

    pub fn get_terminate_group_channel_tx(&self) -> Sender<()> {
        self.terminate_channel_tx.clone()
    }

    /// Blocks until termination is requested, then stops every thread in
    /// insertion order.
    pub fn join(self) -> Vec<(&'static str, ThreadResult)> {
        let _ = self.terminate_channel_rx.recv();
        tracing::info!(threads = self.threads.len(), "terminating thread group");
        self.threads
            .into_iter()
            .map(|mut thread| (thread.name(), thread.terminate()))
            .collect()
    }
}

impl Default for ThreadGroup {
    fn default() -> Self {
        Self::new()
    }
}
