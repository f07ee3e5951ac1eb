use relative_path::{RelativePath, RelativePathBuf};
use serde::Serialize;

/// File extension of zettel notes, without the dot.
pub const ZETTEL_EXTENSION: &str = "zettel";

const EXTENSION_SUFFIX: &str = ".zettel";

/// A zettel file addressed relative to the notes root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZettelFile {
    relative_path: RelativePathBuf,
    display_name: String,
    display_path: String,
}

impl ZettelFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = relative_path
            .file_name()
            .map(|name| name.strip_suffix(EXTENSION_SUFFIX).unwrap_or(name))
            .unwrap_or("Untitled")
            .to_string();
        let display_path = {
            let path_str = relative_path.as_str();
            path_str
                .strip_suffix(EXTENSION_SUFFIX)
                .unwrap_or(path_str)
                .to_string()
        };

        Self {
            relative_path,
            display_name,
            display_path,
        }
    }

    /// The file a freshly created zettel for `tag` lives in.
    pub fn for_tag(tag: &str) -> Self {
        Self::new(RelativePathBuf::from(format!("{tag}{EXTENSION_SUFFIX}")))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without the `.zettel` extension
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Relative path without the `.zettel` extension
    pub fn display_path(&self) -> &str {
        &self.display_path
    }
}

impl From<RelativePathBuf> for ZettelFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for ZettelFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ideas.zettel", "ideas", "ideas")]
    #[case("work/meetings.zettel", "meetings", "work/meetings")]
    #[case("notes.txt", "notes.txt", "notes.txt")]
    fn display_strips_extension(
        #[case] path: &str,
        #[case] name: &str,
        #[case] display_path: &str,
    ) {
        let file = ZettelFile::from(path);
        assert_eq!(file.display_name(), name);
        assert_eq!(file.display_path(), display_path);
        assert_eq!(file.relative_path().as_str(), path);
    }

    #[test]
    fn for_tag_appends_extension() {
        let file = ZettelFile::for_tag("rust");
        assert_eq!(file.relative_path().as_str(), "rust.zettel");
        assert_eq!(file.display_name(), "rust");
    }
}
