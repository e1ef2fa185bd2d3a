use nostr_sdk::prelude::*;

use crate::{
    core::{
        clock::{Clock, SystemClock},
        cmd::Cmd,
        signer::{KeySigner, Signer},
        msg::{form::FormMsg, submission::SubmissionMsg, system::SystemMsg, ui::UiMsg, Msg},
        state::{ui::Focus, AppState},
    },
    domain::{
        nostr::ensure_verified,
        submission::{Phase, SubmitError, SubmitOutcome},
    },
};

/// Collaborators the update function reads from but never mutates
pub struct UpdateContext<'a> {
    pub clock: &'a dyn Clock,
    pub signer: &'a dyn Signer,
}

impl Default for UpdateContext<'static> {
    fn default() -> Self {
        static CLOCK: SystemClock = SystemClock;
        static SIGNER: KeySigner = KeySigner;
        Self {
            clock: &CLOCK,
            signer: &SIGNER,
        }
    }
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_with_context(msg, state, &UpdateContext::default())
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Form(form_msg) => {
            let commands = match form_msg {
                FormMsg::SetSecretKey(_) | FormMsg::SetServerUrl(_) => {
                    state.connection.update(form_msg)
                }
                FormMsg::AddRow | FormMsg::SetName(..) | FormMsg::SetNumber(..) => {
                    state.entries.update(form_msg)
                }
            };
            (state, commands)
        }

        Msg::Ui(ui_msg) => {
            let rows = state.entries.len();
            let commands = match ui_msg {
                UiMsg::FocusNext => {
                    state.ui.focus = state.ui.focus.next(rows);
                    vec![]
                }
                UiMsg::FocusPrev => {
                    state.ui.focus = state.ui.focus.prev(rows);
                    vec![]
                }
                UiMsg::Activate => match state.ui.focus {
                    Focus::AddRow => {
                        return update_with_context(Msg::Form(FormMsg::AddRow), state, ctx)
                    }
                    Focus::Submit => {
                        return update_with_context(
                            Msg::Submission(SubmissionMsg::Submit),
                            state,
                            ctx,
                        )
                    }
                    _ => {
                        state.ui.focus = state.ui.focus.next(rows);
                        vec![]
                    }
                },
            };
            (state, commands)
        }

        Msg::Submission(SubmissionMsg::Submit) => {
            let commands = submit(&mut state, ctx);
            (state, commands)
        }

        Msg::Submission(SubmissionMsg::Progress(phase)) => {
            state.submission.advance(phase);
            (state, vec![])
        }

        Msg::Submission(SubmissionMsg::Finished(outcome)) => {
            let commands = finish(&mut state, outcome);
            (state, commands)
        }
    }
}

/// Runs the synchronous part of the workflow (validate, sign, verify) and
/// hands the verified event to the executor for relay I/O
fn submit(state: &mut AppState, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
    if !state.submission.begin() {
        let message = "Submission already in progress".to_string();
        state.system.update(SystemMsg::UpdateStatusMessage(message.clone()));
        return vec![Cmd::LogInfo { message }];
    }

    match prepare_event(state, ctx) {
        Ok(event) => {
            let relay_url = state.connection.server_url().to_string();
            log::info!("Submitting event {} to {relay_url}", event.id);
            state.submission.advance(Phase::Connecting);
            state.system.update(SystemMsg::UpdateStatusMessage(format!(
                "[Connecting] {relay_url}"
            )));
            vec![Cmd::PublishEvent { relay_url, event }]
        }
        Err(e) => finish(state, SubmitOutcome::Failed(e)),
    }
}

fn prepare_event(state: &mut AppState, ctx: &UpdateContext<'_>) -> Result<Event, SubmitError> {
    if !state.connection.has_secret_key() {
        return Err(SubmitError::MissingSecretKey);
    }
    if !state.connection.validate() {
        return Err(SubmitError::InvalidServerUrl);
    }

    state.submission.advance(Phase::Signing);
    let event = ctx.signer.sign(
        state.entries.entries(),
        state.connection.expose_secret_key(),
        ctx.clock.now(),
    )?;

    state.submission.advance(Phase::Verifying);
    ensure_verified(event)
}

fn finish(state: &mut AppState, outcome: SubmitOutcome) -> Vec<Cmd> {
    let summary = outcome.summary();
    let command = match &outcome {
        SubmitOutcome::Published { .. } => Cmd::LogInfo {
            message: summary.clone(),
        },
        SubmitOutcome::Failed(_) => Cmd::LogError {
            message: summary.clone(),
        },
    };
    state.submission.finish(outcome);
    state.system.update(SystemMsg::UpdateStatusMessage(summary));
    vec![command]
}
