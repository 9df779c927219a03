//! Client fetch layer for the verse proxy.
//!
//! Mirrors what a browser front-end would do against `/api/gita`: fetch a
//! chapter, parse the text body as JSON, and surface either a verse list or a
//! classified [`ApiError`]. Also carries the static chapter metadata table
//! and the sentinel-code label lookup.

pub mod error;
pub mod fetch;
pub mod labels;
pub mod model;

pub use error::{with_error_handling, ApiError, ApiResponse, ErrorCode};
pub use fetch::{is_valid_verse_array, GitaClient};
pub use labels::{verse_label, LabelContext};
pub use model::{chapter_by_id, Chapter, Verse, CHAPTERS};
