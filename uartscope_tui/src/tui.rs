use std::io::{self, Stdout};
use std::panic::{self, PanicHookInfo};

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::error::UartScopeTuiResult;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches to raw mode on the alternate screen. The screen is given back if
/// the terminal cannot be created, and on any later panic.
pub fn init_terminal() -> UartScopeTuiResult<Tui> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    install_restore_hook();
    match Terminal::new(CrosstermBackend::new(io::stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal();
            Err(e.into())
        }
    }
}

pub fn restore_terminal() -> UartScopeTuiResult<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

fn install_restore_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info: &PanicHookInfo| {
        let _ = restore_terminal();
        tracing::error!(%info, "panic");
        previous(info);
        std::process::exit(1);
    }));
}
