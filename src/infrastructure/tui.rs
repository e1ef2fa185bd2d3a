pub mod real;

use color_eyre::eyre::Result;
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, KeyEvent},
    terminal::{self, LeaveAlternateScreen},
};
use std::future::Future;
use std::pin::Pin;

pub type IO = std::io::Stdout;
pub fn io() -> IO {
    std::io::stdout()
}
pub type Frame<'a> = ratatui::Frame<'a>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Init,
    Quit,
    Error,
    Closed,
    Tick,
    Render,
    FocusGained,
    FocusLost,
    Paste(String),
    Key(KeyEvent),
    Resize(u16, u16),
}

pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: ratatui::prelude::Rect) -> Result<()>;
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;
}

/// Leaves raw mode and the alternate screen if they are active
pub fn restore_terminal() -> Result<()> {
    if terminal::is_raw_mode_enabled()? {
        crossterm::execute!(
            io(),
            DisableBracketedPaste,
            LeaveAlternateScreen,
            cursor::Show
        )?;
        terminal::disable_raw_mode()?;
    }
    Ok(())
}
