//! Scripted console fake for tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use rwa_rcon::{Console, RconError};

/// A `Console` that asserts the exact sequence of commands issued and
/// replies with canned responses.
pub struct ScriptedConsole {
    script: VecDeque<(String, String)>,
    pub issued: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(script: &[(&str, &str)]) -> Self {
        Self {
            script: script
                .iter()
                .map(|(cmd, res)| (cmd.to_string(), res.to_string()))
                .collect(),
            issued: Vec::new(),
        }
    }

    /// Panics unless every scripted exchange was consumed.
    pub fn assert_finished(&self) {
        assert!(
            self.script.is_empty(),
            "script not fully consumed, {} exchanges left: {:?}",
            self.script.len(),
            self.script
        );
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn command(&mut self, cmd: &str) -> Result<String, RconError> {
        let (expected, response) = self
            .script
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected command: {cmd:?}"));
        assert_eq!(cmd, expected, "command issued out of order");
        self.issued.push(cmd.to_string());
        Ok(response)
    }
}
