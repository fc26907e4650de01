//! Prompt playback through an external text-to-speech program.

use dictation_core::Speaker;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// Default text-to-speech program.
pub const DEFAULT_TTS: &str = "espeak-ng";

/// Speaks prompts by spawning `<program> -v <lang> <text>`.
///
/// Only one utterance plays at a time: a new request kills the previous
/// child process first.
pub struct CommandSpeaker {
    program: String,
    available: bool,
    current: Option<Child>,
}

impl CommandSpeaker {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        let available = find_on_path(&program).is_some();
        if !available {
            tracing::warn!(%program, "text-to-speech program not found, prompts will be silent");
        }
        Self {
            program,
            available,
            current: None,
        }
    }

    /// Espeak-style voices use the primary language subtag.
    fn voice(lang: &str) -> &str {
        lang.split(['-', '_']).next().unwrap_or(lang)
    }
}

impl Speaker for CommandSpeaker {
    fn is_ready(&self) -> bool {
        self.available
    }

    fn speak(&mut self, text: &str, lang: &str) {
        self.cancel();
        if !self.available {
            return;
        }
        let spawned = Command::new(&self.program)
            .arg("-v")
            .arg(Self::voice(lang))
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => self.current = Some(child),
            Err(e) => tracing::debug!(program = %self.program, error = %e, "speech playback failed"),
        }
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.current.take() {
            // Already-finished children make kill() fail; that is fine.
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Resolve `program` the way a shell would.
fn find_on_path(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|path| path.is_file())
}
