//! Page text extraction
//!
//! Reduces raw page markup to a bounded-length plain-text snippet.

// Sub-modules
pub mod text;

// Re-exports for public API
pub use text::{HIDDEN_ELEMENTS, extract_details};
