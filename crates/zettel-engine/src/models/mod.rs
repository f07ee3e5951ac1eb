pub mod zettel;
pub mod zettel_file;

pub use zettel::{PREVIEW_LENGTH, TagLabel, Zettel};
pub use zettel_file::{ZETTEL_EXTENSION, ZettelFile};
