//! Core domain model for Guided Form Studio.
//!
//! This crate holds the pure, UI-free pieces of the wizard:
//!
//! - `definition` - the read-only form definition (pages and items)
//! - `field_id` - deterministic field identifier derivation
//! - `answers` - the answer sheet (field identifier -> answer text)
//! - `steps` - the step cursor and its navigation rules
//!
//! Everything here is deterministic and side-effect free; file I/O and the
//! session interchange format live in `gfs-persistence`, and all rendering
//! lives in `gfs-gui`.

mod answers;
mod definition;
mod error;
mod field_id;
mod steps;

pub use answers::AnswerSheet;
pub use definition::{FormDefinition, FormItem, FormPage};
pub use error::DefinitionError;
pub use field_id::field_id;
pub use steps::StepCursor;
