use crate::error::SpeechError;

/// Reads questions aloud.
///
/// Implementations may fail freely; callers log and carry on.
pub trait Speaker: Send + Sync {
    /// Speak `text`, replacing anything still playing.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` when the backend cannot produce audio.
    fn speak(&self, text: &str) -> Result<(), SpeechError>;

    /// Stop any playback in progress.
    fn stop(&self) {}
}

/// Speaker that stays silent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpeaker;

impl Speaker for NoopSpeaker {
    fn speak(&self, _text: &str) -> Result<(), SpeechError> {
        Ok(())
    }
}
