//! Session persistence for Guided Form Studio.
//!
//! This crate defines the portable answer-file format and the code that
//! writes and restores it.
//!
//! # File Format
//!
//! Sessions are plain JSON so that exported files stay readable and
//! hand-editable:
//!
//! ```json
//! {
//!   "version": 1,
//!   "exportedAt": "2026-08-08T09:30:00+00:00",
//!   "currentStep": 2,
//!   "answers": { "step-0-nombre": "Acme" }
//! }
//! ```
//!
//! # Untrusted input
//!
//! Imported files are externally controlled and are never deserialized
//! straight into typed structs. [`decode`] parses to a JSON value and
//! validates presence, type, and range field by field: non-string answer
//! entries are dropped rather than failing the import, while a document
//! without an `answers` object is rejected outright. On any failure the
//! caller's state is untouched.
//!
//! # Architecture
//!
//! - `types` - the export payload ([`SessionSnapshot`]) and format constants
//! - `codec` - encode/decode with the sanitization policy
//! - `io/` - atomic file writes, reads, and async wrappers
//! - `error` - error types with user-facing messages

mod codec;
mod error;
mod io;
mod types;

pub use codec::{RestoredSession, decode, encode};
pub use error::{Result, SessionError};
pub use io::{load_session, load_session_async, save_session, save_session_async};
pub use types::{EXPORT_FILE_NAME, PAYLOAD_VERSION, SessionSnapshot};
