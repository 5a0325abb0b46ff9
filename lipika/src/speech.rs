//! Text-to-speech through the platform synthesizer.

use std::process::Command;

use tracing::debug;

use crate::error::{LipikaError, Result};
use crate::language::Language;

/// Speak `text` aloud. Empty or whitespace-only text is a no-op.
///
/// Uses macOS `say` when present, otherwise `espeak` with the language's
/// voice. The call blocks until playback finishes.
pub fn speak(text: &str, language: Language) -> Result<()> {
    if text.trim().is_empty() {
        return Ok(());
    }
    let text = text.replace('\n', " ");

    if command_exists("say") {
        debug!("Speaking via say");
        let status = Command::new("say")
            .arg(&text)
            .status()
            .map_err(|e| LipikaError::Speech(format!("Failed to run say: {e}")))?;
        if !status.success() {
            return Err(LipikaError::Speech("say failed to speak text".to_string()));
        }
        return Ok(());
    }

    if command_exists("espeak") {
        debug!(voice = language.espeak_voice(), "Speaking via espeak");
        let status = Command::new("espeak")
            .arg("-v")
            .arg(language.espeak_voice())
            .arg(&text)
            .status()
            .map_err(|e| LipikaError::Speech(format!("Failed to run espeak: {e}")))?;
        if !status.success() {
            return Err(LipikaError::Speech(
                "espeak failed to speak text".to_string(),
            ));
        }
        return Ok(());
    }

    Err(LipikaError::Speech(
        "no TTS engine found (install macOS 'say' or Linux 'espeak')".to_string(),
    ))
}

fn command_exists(cmd: &str) -> bool {
    match Command::new(cmd).arg("-h").output() {
        Ok(_) => true,
        Err(err) => err.kind() != std::io::ErrorKind::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_a_noop() {
        assert!(speak("", Language::Nepali).is_ok());
        assert!(speak("   \n ", Language::English).is_ok());
    }

    #[test]
    fn test_command_exists_rejects_missing_binary() {
        assert!(!command_exists("definitely-not-a-real-binary-1b2c3"));
    }
}
