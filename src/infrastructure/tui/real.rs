use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::{
    cursor,
    event::{EnableBracketedPaste, Event as CrosstermEvent, EventStream, KeyEventKind},
    terminal::EnterAlternateScreen,
};
use futures::{FutureExt, StreamExt};
use ratatui::backend::CrosstermBackend as Backend;
use ratatui::prelude::Rect;
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use super::{io, restore_terminal, Event, Frame, TuiLike, IO};

/// Crossterm-backed terminal with tick and render pacing
pub struct RealTui {
    terminal: ratatui::Terminal<Backend<IO>>,
    task: Option<JoinHandle<()>>,
    cancellation_token: CancellationToken,
    event_rx: UnboundedReceiver<Event>,
    event_tx: UnboundedSender<Event>,
    frame_rate: f64,
    tick_rate: f64,
}

impl RealTui {
    pub fn new() -> Result<Self> {
        let terminal = ratatui::Terminal::new(Backend::new(io()))?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal,
            task: None,
            cancellation_token: CancellationToken::new(),
            event_rx,
            event_tx,
            frame_rate: 30.0,
            tick_rate: 4.0,
        })
    }

    pub fn tick_rate(mut self, tick_rate: f64) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    fn start(&mut self) {
        let tick_delay = Duration::from_secs_f64(1.0 / self.tick_rate);
        let render_delay = Duration::from_secs_f64(1.0 / self.frame_rate);
        self.cancel();
        self.cancellation_token = CancellationToken::new();
        let cancellation_token = self.cancellation_token.clone();
        let event_tx = self.event_tx.clone();

        self.task = Some(tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_delay);
            let mut render_interval = tokio::time::interval(render_delay);
            let _ = event_tx.send(Event::Init);
            loop {
                let tick = tick_interval.tick();
                let render = render_interval.tick();
                let crossterm_event = reader.next().fuse();
                let event = tokio::select! {
                    _ = cancellation_token.cancelled() => break,
                    maybe_event = crossterm_event => match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            Event::Key(key)
                        }
                        Some(Ok(CrosstermEvent::Key(_))) | Some(Ok(CrosstermEvent::Mouse(_))) => {
                            continue
                        }
                        Some(Ok(CrosstermEvent::Resize(x, y))) => Event::Resize(x, y),
                        Some(Ok(CrosstermEvent::FocusLost)) => Event::FocusLost,
                        Some(Ok(CrosstermEvent::FocusGained)) => Event::FocusGained,
                        Some(Ok(CrosstermEvent::Paste(s))) => Event::Paste(s),
                        Some(Err(_)) => Event::Error,
                        None => Event::Closed,
                    },
                    _ = tick => Event::Tick,
                    _ = render => Event::Render,
                };
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        }));
    }

    fn cancel(&self) {
        self.cancellation_token.cancel();
    }

    fn stop(&mut self) {
        self.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl TuiLike for RealTui {
    fn enter(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(io(), EnterAlternateScreen, EnableBracketedPaste, cursor::Hide)?;
        self.start();
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.stop();
        self.terminal.flush()?;
        restore_terminal()
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.terminal.draw(|frame| f(frame))?;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.terminal.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        Box::pin(self.event_rx.recv())
    }
}

impl Drop for RealTui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            log::error!("Failed to restore terminal: {e}");
        }
        let _ = io().flush();
    }
}
