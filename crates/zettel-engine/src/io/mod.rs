use crate::models::{ZETTEL_EXTENSION, Zettel, ZettelFile};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Zettel already exists: {0}")]
    AlreadyExists(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
    #[error("Invalid tag for a new zettel: {0:?}")]
    InvalidTag(String),
    #[error("Invalid scan pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Read a zettel file's raw text
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(notes_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Read and parse a zettel
pub fn read_zettel(file: &ZettelFile, notes_root: &Path) -> Result<Zettel, IoError> {
    let body = read_file(file.relative_path(), notes_root)?;
    Ok(Zettel::parse(file.clone(), body))
}

/// Write a zettel's text, creating parent directories as needed
pub fn write_zettel(
    relative_path: &RelativePath,
    notes_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(notes_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Create `<tag>.zettel` holding a single depth-one tag line.
///
/// Never overwrites: an existing file is reported as `AlreadyExists`.
pub fn create_zettel(notes_root: &Path, tag: &str) -> Result<ZettelFile, IoError> {
    let tag = tag.trim();
    if tag.is_empty() || tag.contains(['/', '\\', '\n']) {
        return Err(IoError::InvalidTag(tag.to_string()));
    }

    let file = ZettelFile::for_tag(tag);
    let absolute_path = file.relative_path().to_path(notes_root);
    if absolute_path.exists() {
        return Err(IoError::AlreadyExists(absolute_path));
    }

    write_zettel(file.relative_path(), notes_root, &format!("@{tag}\n"))?;
    log::info!("created {}", absolute_path.display());
    Ok(file)
}

/// Find every `.zettel` file under the notes directory, sorted by path
pub fn scan_zettels(notes_root: &Path) -> Result<Vec<ZettelFile>, IoError> {
    if !notes_root.exists() {
        return Err(IoError::InvalidNotesDir(
            "notes directory not found".to_string(),
        ));
    }
    let root = notes_root.to_str().ok_or_else(|| {
        IoError::InvalidNotesDir("notes directory path is not valid UTF-8".to_string())
    })?;
    let pattern = format!(
        "{}/**/*.{ZETTEL_EXTENSION}",
        glob::Pattern::escape(root.trim_end_matches('/'))
    );

    let mut paths = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry.map_err(|err| IoError::Io(err.into()))?;
        if path.is_file() {
            paths.push(relative_to(notes_root, &path)?);
        }
    }
    paths.sort();
    log::debug!("found {} zettels under {}", paths.len(), notes_root.display());

    Ok(paths.into_iter().map(ZettelFile::new).collect())
}

fn relative_to(notes_root: &Path, path: &Path) -> Result<RelativePathBuf, IoError> {
    path.strip_prefix(notes_root)
        .ok()
        .and_then(|relative| RelativePathBuf::from_path(relative).ok())
        .ok_or_else(|| IoError::NotFound(path.to_path_buf()))
}

/// Read and parse every zettel in the notes directory.
///
/// Files that cannot be read are logged and skipped so one bad file does
/// not hide the rest.
pub fn load_all(notes_root: &Path) -> Result<Vec<Zettel>, IoError> {
    let files = scan_zettels(notes_root)?;
    let mut zettels = Vec::with_capacity(files.len());
    for file in files {
        match read_zettel(&file, notes_root) {
            Ok(zettel) => zettels.push(zettel),
            Err(err) => log::warn!("skipping {}: {err}", file.display_path()),
        }
    }
    Ok(zettels)
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_notes_dir};

    #[test]
    fn test_scan_finds_zettels_sorted() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "b.zettel", "@b");
        create_test_file(&notes_dir, "a.zettel", "@a");

        let files = scan_zettels(notes_dir.path()).unwrap();

        let names: Vec<_> = files.iter().map(|f| f.display_name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_scan_nested_directories() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "root.zettel", "@root");
        create_test_file(&notes_dir, "sub/deeper/nested.zettel", "@nested");

        let files = scan_zettels(notes_dir.path()).unwrap();

        let paths: Vec<_> = files.iter().map(|f| f.relative_path().as_str()).collect();
        assert_eq!(paths, vec!["root.zettel", "sub/deeper/nested.zettel"]);
    }

    #[test]
    fn test_scan_ignores_other_files() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "note.zettel", "@note");
        create_test_file(&notes_dir, "readme.md", "# Readme");
        create_test_file(&notes_dir, "image.png", "fake image data");

        let files = scan_zettels(notes_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].display_name(), "note");
    }

    #[test]
    fn test_scan_invalid_notes_directory() {
        let result = scan_zettels(Path::new("/this/path/does/not/exist"));
        assert!(result.unwrap_err().to_string().contains("notes directory"));
    }

    #[test]
    fn test_read_zettel_parses_body() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "topic.zettel", "@topic\n- point");

        let zettel = read_zettel(&ZettelFile::from("topic.zettel"), notes_dir.path()).unwrap();

        assert_eq!(zettel.body, "@topic\n- point");
        assert_eq!(zettel.tags()[0].text, "topic");
    }

    #[test]
    fn test_read_file_not_found() {
        let notes_dir = create_test_notes_dir();
        let result = read_file(RelativePath::new("missing.zettel"), notes_dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_zettel_creates_parent_directories() {
        let notes_dir = create_test_notes_dir();
        let relative_path = RelativePath::new("folder/sub/new.zettel");

        write_zettel(relative_path, notes_dir.path(), "@new").unwrap();

        assert_eq!(read_file(relative_path, notes_dir.path()).unwrap(), "@new");
        assert!(notes_dir.path().join("folder").join("sub").is_dir());
    }

    #[test]
    fn test_write_zettel_overwrites_existing() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "existing.zettel", "@old");
        let relative_path = RelativePath::new("existing.zettel");

        write_zettel(relative_path, notes_dir.path(), "@new").unwrap();

        assert_eq!(read_file(relative_path, notes_dir.path()).unwrap(), "@new");
    }

    #[test]
    fn test_create_zettel_writes_tag_line() {
        let notes_dir = create_test_notes_dir();

        let file = create_zettel(notes_dir.path(), "ideas").unwrap();

        assert_eq!(file.relative_path().as_str(), "ideas.zettel");
        assert_eq!(
            read_file(file.relative_path(), notes_dir.path()).unwrap(),
            "@ideas\n"
        );
    }

    #[test]
    fn test_create_zettel_refuses_to_overwrite() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "ideas.zettel", "@ideas\n- keep me");

        let result = create_zettel(notes_dir.path(), "ideas");

        assert!(matches!(result, Err(IoError::AlreadyExists(_))));
        assert_eq!(
            read_file(RelativePath::new("ideas.zettel"), notes_dir.path()).unwrap(),
            "@ideas\n- keep me"
        );
    }

    #[test]
    fn test_create_zettel_rejects_bad_tags() {
        let notes_dir = create_test_notes_dir();
        assert!(matches!(
            create_zettel(notes_dir.path(), "  "),
            Err(IoError::InvalidTag(_))
        ));
        assert!(matches!(
            create_zettel(notes_dir.path(), "a/b"),
            Err(IoError::InvalidTag(_))
        ));
    }

    #[test]
    fn test_load_all_reads_every_zettel() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "one.zettel", "@one");
        create_test_file(&notes_dir, "two.zettel", "@two\n@@extra");

        let zettels = load_all(notes_dir.path()).unwrap();

        assert_eq!(zettels.len(), 2);
        assert_eq!(zettels[1].tags().len(), 2);
    }

    #[test]
    fn test_load_all_skips_unreadable_files() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "good.zettel", "@good");
        // Invalid UTF-8 cannot be read as text.
        std::fs::write(notes_dir.path().join("bad.zettel"), [0xff, 0xfe, 0xfd]).unwrap();

        let zettels = load_all(notes_dir.path()).unwrap();

        assert_eq!(zettels.len(), 1);
        assert_eq!(zettels[0].file.display_name(), "good");
    }

    #[test]
    fn test_validate_notes_dir() {
        let notes_dir = create_test_notes_dir();
        assert!(validate_notes_dir(notes_dir.path()).is_ok());
        assert!(matches!(
            validate_notes_dir(Path::new("/nonexistent/path")),
            Err(IoError::InvalidNotesDir(_))
        ));
    }
}
