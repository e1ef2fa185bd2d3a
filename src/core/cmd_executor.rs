use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd,
        msg::{submission::SubmissionMsg, Msg},
    },
    infrastructure::relay::{publish_and_close, RelayTransport},
};

/// Executes commands produced by `update`
///
/// Relay I/O runs on a spawned task; its progress and outcome come back to the
/// runtime as messages on `msg_sender`.
#[derive(Clone)]
pub struct CmdExecutor {
    transport: Arc<dyn RelayTransport>,
    msg_sender: mpsc::UnboundedSender<Msg>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    pub fn new(transport: Arc<dyn RelayTransport>, msg_sender: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            transport,
            msg_sender,
            render_req_sender: None,
        }
    }

    /// Inject the render request channel owned by the host loop
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a list of commands, returning a short description of each
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut executed = Vec::with_capacity(commands.len());
        for cmd in commands {
            self.execute_command(cmd)?;
            executed.push(format!("{cmd:?}"));
        }
        Ok(executed)
    }

    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::PublishEvent { relay_url, event } => {
                let transport = Arc::clone(&self.transport);
                let msg_sender = self.msg_sender.clone();
                let relay_url = relay_url.clone();
                let event = event.clone();

                tokio::spawn(async move {
                    let progress_sender = msg_sender.clone();
                    let outcome =
                        publish_and_close(transport.as_ref(), &relay_url, &event, move |phase| {
                            let _ = progress_sender
                                .send(Msg::Submission(SubmissionMsg::Progress(phase)));
                        })
                        .await;

                    if msg_sender
                        .send(Msg::Submission(SubmissionMsg::Finished(outcome)))
                        .is_err()
                    {
                        log::warn!("Runtime dropped before submission outcome was delivered");
                    }
                });
            }

            Cmd::RequestRender => {
                if let Some(sender) = &self.render_req_sender {
                    let _ = sender.send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

        }

        Ok(())
    }
}
