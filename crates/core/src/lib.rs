//! # PromptSmith Core
//!
//! The prompt assembly engine: the answer set collected by the
//! questionnaire, the deterministic renderer that turns it into a prompt,
//! and the codec that moves it in and out as a share token or a document.
//!
//! ## Design Philosophy
//!
//! Everything here is synchronous and free of I/O. Persistence, terminals
//! and files belong to callers; the only seam they implement is the
//! [`SessionStore`] trait, whose implementations live in `promptsmith-store`.

pub mod answers;
pub mod codec;
pub mod error;
pub mod questionnaire;
pub mod render;
pub mod session;
pub mod store;

// Re-export key types at crate root for ergonomics
pub use answers::{AnswerPatch, AnswerSet, Field, Length, ListField, MIN_OBJECTIVE_CHARS, Tone};
pub use codec::{DocumentFormat, decode_token, encode_token, export_document, import_document};
pub use error::{CodecError, Error, Result, StoreError};
pub use render::{Section, SectionKind, render};
pub use session::Session;
pub use store::{SessionSnapshot, SessionStore};
