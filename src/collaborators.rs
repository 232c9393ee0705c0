/*!
 * Interfaces to the capabilities the host environment may provide.
 *
 * Speech recognition, speech synthesis and the clipboard live outside the
 * crate. The controller only sees these traits; a host that lacks speech
 * recognition simply passes no recognizer.
 */

use anyhow::Result;
use async_trait::async_trait;

/// Speech recognizer producing one utterance per request
#[async_trait]
pub trait SpeechInput: Send + Sync {
    /// Listen for a single utterance in the given locale (e.g. `hi-HI`)
    async fn recognize(&self, locale: &str) -> Result<String>;
}

/// Speech synthesizer; playback is fire-and-forget
pub trait SpeechOutput: Send + Sync {
    /// Start speaking `text` using the language tag `language`
    fn speak(&self, text: &str, language: &str);
}

/// System clipboard
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`
    fn copy(&self, text: &str) -> Result<()>;
}
