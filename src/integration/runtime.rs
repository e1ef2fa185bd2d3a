use std::collections::VecDeque;
use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        clock::{Clock, SystemClock},
        cmd::Cmd,
        cmd_executor::CmdExecutor,
        msg::{form::FormMsg, Msg},
        raw_msg::RawMsg,
        signer::{KeySigner, Signer},
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    domain::entry::Entry,
    infrastructure::relay::RelayTransport,
};

/// Drives the update loop: queues messages, folds them into state and hands
/// the resulting commands to the executor
pub struct Runtime {
    clock: Arc<dyn Clock>,
    signer: Arc<dyn Signer>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    pub fn new(initial_state: AppState, transport: Arc<dyn RelayTransport>) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        Self {
            clock: Arc::new(SystemClock),
            signer: Arc::new(KeySigner),
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_rx,
            cmd_executor: CmdExecutor::new(transport, msg_tx),
        }
    }

    /// Replace the clock used to stamp signed events
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = signer;
        self
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(&mut self, render_sender: mpsc::UnboundedSender<()>) {
        self.cmd_executor.set_render_request_sender(render_sender);
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Queue the edits that fill rows from `entries` (adding rows as needed)
    /// and, if given, the relay URL
    pub fn prefill(&mut self, entries: Vec<Entry>, relay: Option<String>) {
        let rows = self.state.entries.len();
        for (index, entry) in entries.into_iter().enumerate() {
            if index >= rows {
                self.send_msg(Msg::Form(FormMsg::AddRow));
            }
            self.send_msg(Msg::Form(FormMsg::SetName(index, entry.name)));
            self.send_msg(Msg::Form(FormMsg::SetNumber(index, entry.number)));
        }
        if let Some(url) = relay {
            self.send_msg(Msg::Form(FormMsg::SetServerUrl(url)));
        }
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let ctx = UpdateContext {
            clock: self.clock.as_ref(),
            signer: self.signer.as_ref(),
        };
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update_with_context(msg, state, &ctx);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate queued raw messages, then fold every queued message into state
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        // Messages reported back by spawned command tasks
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>> {
        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        if commands.is_empty() {
            return Ok(vec![]);
        }
        self.cmd_executor.execute_commands(&commands)
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Wait for the next message produced by a command task
    pub async fn recv_msg(&mut self) -> Option<Msg> {
        self.msg_rx.recv().await
    }

    /// Run update cycles until no submission is in flight
    pub async fn settle(&mut self) -> Result<()> {
        loop {
            self.run_update_cycle()?;
            if !self.state.submission.is_in_flight() {
                return Ok(());
            }
            match self.recv_msg().await {
                Some(msg) => self.send_msg(msg),
                None => return Ok(()),
            }
        }
    }
}
