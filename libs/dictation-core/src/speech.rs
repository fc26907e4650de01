//! Text-to-speech playback seam.

/// Default language tag for prompts.
pub const DEFAULT_LANG: &str = "en-US";

/// Best-effort prompt playback.
///
/// Implementations never fail loudly: a missing voice or a broken backend
/// simply produces no sound. Starting playback cancels whatever was playing.
pub trait Speaker {
    /// Whether voices are available yet.
    fn is_ready(&self) -> bool;

    /// Speak `text` in the given language, superseding any in-flight playback.
    fn speak(&mut self, text: &str, lang: &str);

    /// Stop current playback, if any.
    fn cancel(&mut self);
}

/// Speaker that never makes a sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn is_ready(&self) -> bool {
        false
    }

    fn speak(&mut self, _text: &str, _lang: &str) {}

    fn cancel(&mut self) {}
}
