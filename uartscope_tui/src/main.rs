use std::process::ExitCode;
use std::sync::{mpsc, Arc, RwLock};

use uartscope_tui::{
    components,
    config::Config,
    error::UartScopeTuiResult,
    logging,
    threads::{setup_terminate_group_panic_hook, DrawThread, EventThread, ThreadGroup},
    tui,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> UartScopeTuiResult<()> {
    let config = Config::load()?;
    logging::init(&config.log)?;

    let terminal = tui::init_terminal()?;
    let (message_channel_tx, message_channel_rx) = mpsc::channel();
    let root = Arc::new(RwLock::new(components::Root::new(
        message_channel_tx.clone(),
        &config,
    )));

    let mut thread_group = ThreadGroup::new();
    let mut event_thread = EventThread::new(&thread_group);
    let draw_thread = DrawThread::new(
        root.clone(),
        message_channel_tx,
        message_channel_rx,
        terminal,
        &thread_group,
    );
    event_thread.register_event_listener(root);

    thread_group.add_thread(Box::new(event_thread));
    thread_group.add_thread(Box::new(draw_thread));
    setup_terminate_group_panic_hook(thread_group.get_terminate_group_channel_tx());
    tracing::info!("started");
    let results = thread_group.join();

    tui::restore_terminal()?;

    eprintln!("Thread termination status:");
    for (name, res) in results {
        match res {
            Ok(_) => eprintln!("> {name}: terminated normally"),
            Err(e) => eprintln!("> {name}: terminated abnormally: {e}"),
        }
    }
    Ok(())
}
