use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use crate::{
    core::{msg::Msg, raw_msg::RawMsg},
    infrastructure::tui::{Event, Frame, TuiLike},
    integration::runtime::Runtime,
    presentation::components::Components,
};

enum Step {
    Event(Option<Event>),
    Msg(Option<Msg>),
}

/// Owns the terminal and the runtime, and pumps events between them until quit
pub struct AppRunner<T: TuiLike> {
    runtime: Runtime,
    tui: T,
    components: Components,
    render_rx: mpsc::UnboundedReceiver<()>,
}

impl<T: TuiLike> AppRunner<T> {
    pub fn new(mut runtime: Runtime, tui: T) -> Self {
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        runtime.add_render_request_sender(render_tx);

        Self {
            runtime,
            tui,
            components: Components::new(),
            render_rx,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    /// Run the main loop: handle terminal events and relay results, update state and render
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.render()?;

        loop {
            let step = tokio::select! {
                event = self.tui.next() => Step::Event(event),
                msg = self.runtime.recv_msg() => Step::Msg(msg),
            };

            let mut needs_render = false;
            match step {
                Step::Event(Some(event)) => needs_render = self.handle_event(event)?,
                Step::Event(None) => {
                    // Event source is gone; let an in-flight submission land before stopping
                    log::info!("Terminal event stream ended");
                    self.runtime.settle().await?;
                    self.render()?;
                    break;
                }
                Step::Msg(Some(msg)) => {
                    self.runtime.send_msg(msg);
                    needs_render = true;
                }
                Step::Msg(None) => {}
            }

            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }

            while self.render_rx.try_recv().is_ok() {
                needs_render = true;
            }
            if needs_render {
                self.render()?;
            }

            if self.runtime.state().system.should_quit() {
                break;
            }
        }

        self.tui.exit()
    }

    /// Feed one terminal event to the runtime; returns whether the screen should be redrawn
    fn handle_event(&mut self, event: Event) -> Result<bool> {
        let raw_msg = match event {
            Event::Init | Event::Render => return Ok(true),
            Event::FocusGained | Event::FocusLost => return Ok(false),
            Event::Tick => RawMsg::Tick,
            Event::Quit | Event::Closed => RawMsg::Quit,
            Event::Error => RawMsg::Error("Failed to read terminal event".to_string()),
            Event::Paste(text) => RawMsg::Paste(text),
            Event::Key(key) => RawMsg::Key(key),
            Event::Resize(width, height) => {
                self.tui.resize(Rect::new(0, 0, width, height))?;
                RawMsg::Resize(width, height)
            }
        };

        let needs_render = !raw_msg.is_frequent();
        self.runtime.send_raw_msg(raw_msg);
        Ok(needs_render)
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &mut self.components;
        let mut draw = |frame: &mut Frame<'_>| components.render(frame, state);
        self.tui.draw(&mut draw)
    }
}
