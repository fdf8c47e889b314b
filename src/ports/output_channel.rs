use crate::domain::AppError;

/// Port for publishing named step outputs to the CI platform.
pub trait OutputChannel {
    /// Publish a single `key`/`value` output.
    fn set_output(&mut self, key: &str, value: &str) -> Result<(), AppError>;

    /// Publish several outputs together.
    ///
    /// Implementations backed by a shared sink override this to write all
    /// entries at once, so a failure publishes none of them.
    fn set_outputs(&mut self, entries: &[(&str, &str)]) -> Result<(), AppError> {
        for (key, value) in entries {
            self.set_output(key, value)?;
        }
        Ok(())
    }
}
