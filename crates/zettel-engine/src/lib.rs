//! # zettel-engine
//!
//! Everything built on top of the parsed node sequence:
//!
//! - [`models`] - zettel files and parsed zettels with their tags
//! - [`io`] - scanning, reading, writing and creating `.zettel` files
//! - [`render`] - HTML rendering
//! - [`toc`] - table of contents from section header lines
//! - [`outline`] - the indentation hierarchy of a zettel's lines
//! - [`search`] - term queries over zettel bodies

pub mod io;
pub mod models;
pub mod outline;
pub mod render;
pub mod search;
pub mod toc;

#[cfg(test)]
pub mod tests;

pub use io::*;
pub use models::{TagLabel, Zettel, ZettelFile};
pub use outline::{OutlineItem, build_outline};
pub use search::{SearchOptions, search};
pub use toc::TocEntry;
