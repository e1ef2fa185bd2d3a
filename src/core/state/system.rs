use crate::core::{cmd::Cmd, msg::system::SystemMsg};

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    should_quit: bool,
    status_message: Option<String>,
}

impl SystemState {
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> Option<&String> {
        self.status_message.as_ref()
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                log::debug!("Terminal resized to {width}x{height}");
                vec![Cmd::RequestRender]
            }

            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogError { message: error }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit() {
        let mut state = SystemState::default();

        let cmds = state.update(SystemMsg::Quit);

        assert!(state.should_quit());
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_status_message_replaced() {
        let mut state = SystemState::default();

        state.update(SystemMsg::UpdateStatusMessage("hello".into()));
        state.update(SystemMsg::UpdateStatusMessage("world".into()));

        assert_eq!(state.status_message().map(String::as_str), Some("world"));
    }

    #[test]
    fn test_show_error_logs() {
        let mut state = SystemState::default();

        let cmds = state.update(SystemMsg::ShowError("boom".into()));

        assert_eq!(
            state.status_message().map(String::as_str),
            Some("Error: boom")
        );
        assert_eq!(
            cmds,
            vec![Cmd::LogError {
                message: "boom".to_string()
            }]
        );
    }

    #[test]
    fn test_resize_requests_render() {
        let mut state = SystemState::default();

        let cmds = state.update(SystemMsg::Resize(120, 40));

        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }
}
