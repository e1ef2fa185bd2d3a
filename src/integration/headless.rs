use color_eyre::eyre::{eyre, Result};

use crate::{
    core::msg::{submission::SubmissionMsg, Msg},
    domain::submission::SubmitOutcome,
    integration::runtime::Runtime,
};

/// Submit the current form once and wait for the relay round trip to finish
pub async fn submit_once(runtime: &mut Runtime) -> Result<SubmitOutcome> {
    runtime.send_msg(Msg::Submission(SubmissionMsg::Submit));
    runtime.settle().await?;

    runtime
        .state()
        .submission
        .last_outcome()
        .cloned()
        .ok_or_else(|| eyre!("Submission finished without an outcome"))
}
