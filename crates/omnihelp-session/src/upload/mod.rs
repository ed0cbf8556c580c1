//! Document upload flow and staged-file state.
//!
//! [`SelectedFile`] is the single staged file; [`UploadFlow`] wraps it with
//! the upload lifecycle: a PDF-only selection filter, one upload in flight at
//! a time, and a result banner that keeps the staged file around after a
//! failure so the user can retry without re-selecting.

mod file;
mod flow;

pub use file::{SelectedFile, format_file_size};
pub use flow::{UploadFlow, UploadOutcome, UploadResult};
