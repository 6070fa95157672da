use crate::lifecycle::{Attempt, RequestLifecycle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

/// One turn of the conversation. Entries are never edited or removed after
/// being appended; the transcript is the audit log of the exchange,
/// failures included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversationState {
    draft: String,
    transcript: Vec<TranscriptEntry>,
    request: RequestLifecycle<()>,
}

impl ConversationState {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn is_sending(&self) -> bool {
        self.request.is_loading()
    }

    pub(crate) fn edit_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Starts a send, or returns `None` when the trimmed draft is empty or a
    /// send is already in flight. Sends serialize strictly: interleaved
    /// replies would corrupt the transcript order, so a busy controller
    /// rejects instead of superseding.
    ///
    /// The user's entry is appended immediately and is never rolled back,
    /// even if the call later fails.
    pub(crate) fn begin_send(&mut self) -> Option<(Attempt, String)> {
        let message = self.draft.trim().to_string();
        if message.is_empty() || self.request.is_loading() {
            return None;
        }
        self.transcript.push(TranscriptEntry {
            speaker: Speaker::User,
            text: message.clone(),
        });
        self.draft.clear();
        Some((self.request.begin(), message))
    }

    /// Commits a settled turn. Success appends the reply; failure appends a
    /// marked error notice embedding the reason, keeping the transcript
    /// complete.
    pub(crate) fn settle(&mut self, attempt: Attempt, result: Result<String, String>) -> bool {
        match result {
            Ok(reply) => {
                if !self.request.settle(attempt, Ok(())) {
                    return false;
                }
                self.transcript.push(TranscriptEntry {
                    speaker: Speaker::Bot,
                    text: reply,
                });
                true
            }
            Err(reason) => {
                if !self.request.settle(attempt, Err(reason.clone())) {
                    return false;
                }
                self.transcript.push(TranscriptEntry {
                    speaker: Speaker::Bot,
                    text: format!(
                        "*Error: could not get a response from the mentor service. ({reason})*"
                    ),
                });
                true
            }
        }
    }
}
