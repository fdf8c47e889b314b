use crate::domain::AppError;
use crate::ports::OutputChannel;

/// In-memory output channel that records outputs in publication order.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutputChannel {
    outputs: Vec<(String, String)>,
}

impl MemoryOutputChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded outputs in the order they were set.
    pub fn outputs(&self) -> &[(String, String)] {
        &self.outputs
    }

    /// Most recent value set for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.outputs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

impl OutputChannel for MemoryOutputChannel {
    fn set_output(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.outputs.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
