//! Session — one owner of one answer set.
//!
//! A session is created from defaults or hydrated from a snapshot, mutated
//! through its answer set, and reset on demand. There is no global state:
//! two sessions never share answers.

use chrono::Utc;
use tracing::{debug, info};

use crate::answers::{AnswerSet, Field};
use crate::codec::{self, DocumentFormat};
use crate::error::CodecError;
use crate::questionnaire;
use crate::render;
use crate::store::{SNAPSHOT_VERSION, SessionSnapshot};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    answers: AnswerSet,
    step: usize,
}

impl Session {
    /// Start a fresh session with default answers on the first step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an existing answer set.
    pub fn hydrate(answers: AnswerSet) -> Self {
        Self { answers, step: 0 }
    }

    /// Restore a persisted session. The step is clamped to the questionnaire.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        if snapshot.version != SNAPSHOT_VERSION {
            debug!(version = snapshot.version, "Loading snapshot from another version");
        }
        let mut session = Self::hydrate(snapshot.answers);
        session.go_to(snapshot.step);
        session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            version: SNAPSHOT_VERSION,
            step: self.step,
            answers: self.answers.clone(),
            updated_at: Utc::now(),
        }
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn answers_mut(&mut self) -> &mut AnswerSet {
        &mut self.answers
    }

    // ── Questionnaire navigation ─────────────────────────────────────────

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current_step(&self) -> Option<&'static questionnaire::Step> {
        questionnaire::step(self.step)
    }

    pub fn progress(&self) -> u8 {
        questionnaire::progress(self.step)
    }

    /// Move to `index`, clamped to the last step.
    pub fn go_to(&mut self, index: usize) {
        self.step = index.min(questionnaire::total().saturating_sub(1));
    }

    pub fn next_step(&mut self) -> usize {
        self.go_to(self.step + 1);
        self.step
    }

    pub fn prev_step(&mut self) -> usize {
        self.step = self.step.saturating_sub(1);
        self.step
    }

    pub fn first_step(&mut self) {
        self.step = 0;
    }

    pub fn last_step(&mut self) {
        self.go_to(usize::MAX);
    }

    // ── Whole-record operations ──────────────────────────────────────────

    /// Discard every answer and go back to the first step.
    pub fn reset(&mut self) {
        self.answers.reset();
        self.step = 0;
        info!("Session reset to defaults");
    }

    /// Whether generation should be offered (objective long enough).
    pub fn can_generate(&self) -> bool {
        self.answers.can_generate()
    }

    /// Render the current answers. Never cached.
    pub fn render(&self) -> String {
        render::render(&self.answers)
    }

    pub fn share_token(&self) -> Result<String, CodecError> {
        codec::encode_token(&self.answers)
    }

    /// Replace the answers with the ones carried by `token`.
    ///
    /// On failure the current answers are kept as they were.
    pub fn load_token(&mut self, token: &str) -> Result<(), CodecError> {
        let answers = codec::decode_token(codec::token_from_link(token))?;
        self.answers = answers;
        info!("Session replaced from shared token");
        Ok(())
    }

    pub fn export(&self, format: DocumentFormat) -> Result<String, CodecError> {
        codec::export_document(&self.answers, format)
    }

    /// Merge an imported document into the current answers.
    pub fn import(&mut self, text: &str, format: DocumentFormat) -> Result<Vec<Field>, CodecError> {
        let touched = codec::import_document(&mut self.answers, text, format)?;
        info!(fields = touched.len(), "Imported document");
        Ok(touched)
    }
}
