//! Glyph inventory reports for OpenType fonts
//!
//! This library lists the glyphs of a font in glyph order, grouped under the
//! Unicode block they belong to, with runs of consecutive codepoints collapsed
//! into ranges.

pub mod blocks;
mod data;
mod error;
pub mod font;
pub mod glyph;
pub mod report;
mod reporter;

// Re-export error type
pub use error::ReportError;

// Re-export reporting API
pub use report::{ReportState, write_report};
pub use reporter::{GlyphReporter, GlyphReporterBuilder};

// Re-export public types
pub use blocks::{Classification, NON_UNICODE_GLYPHS, UnicodeBlock, classify};
pub use glyph::{Codepoint, Glyph};
