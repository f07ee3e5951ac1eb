use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use zettel_engine::render::html;
use zettel_engine::{
    SearchOptions, build_outline, create_zettel, load_all, search, toc, write_zettel,
};

const RUST_NOTE: &str = concat!(
    "@rust\n",
    "@@ownership\n",
    "- borrowing\n",
    "    - shared -> many readers\n",
    "    - mutable -> one writer\n",
    "- lifetimes\n",
);

fn notes_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    create_zettel(dir.path(), "python").unwrap();
    let rust = create_zettel(dir.path(), "rust").unwrap();
    write_zettel(rust.relative_path(), dir.path(), RUST_NOTE).unwrap();
    write_zettel(
        relative_path::RelativePath::new("archive/old.zettel"),
        dir.path(),
        "@Archive\n> nothing here\n",
    )
    .unwrap();
    dir
}

#[test]
fn loads_every_zettel_in_path_order() {
    let dir = notes_dir();
    let zettels = load_all(dir.path()).unwrap();

    let paths: Vec<_> = zettels.iter().map(|z| z.file.display_path()).collect();
    assert_eq!(paths, vec!["archive/old", "python", "rust"]);
    assert!(zettels.iter().all(|z| z.is_parsed()));
}

#[test]
fn searches_loaded_zettels() {
    let dir = notes_dir();
    let zettels = load_all(dir.path()).unwrap();

    let names = |indices: Vec<usize>| -> Vec<String> {
        indices
            .into_iter()
            .map(|i| zettels[i].file.display_name().to_string())
            .collect()
    };

    assert_eq!(
        names(search("", &zettels, SearchOptions::default())),
        vec!["old", "python", "rust"]
    );
    assert_eq!(
        names(search("readers", &zettels, SearchOptions::default())),
        vec!["rust"]
    );
    assert_eq!(
        names(search("", &zettels, SearchOptions { unique: true })),
        vec!["old", "python"]
    );
}

#[test]
fn previews_and_structure_of_a_zettel() {
    let dir = notes_dir();
    let zettels = load_all(dir.path()).unwrap();
    let rust = &zettels[2];

    assert_eq!(rust.preview(), "rust ownership");

    let entries = toc::build(&rust.nodes);
    let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["borrowing"]);

    let outline = build_outline(&rust.nodes);
    assert_eq!(outline.len(), 2);
    assert_eq!(outline[0].children.len(), 2);
}

#[test]
fn renders_a_loaded_zettel() {
    let dir = notes_dir();
    let zettels = load_all(dir.path()).unwrap();

    assert_snapshot!(html::render_zettel(&zettels[0]), @r#"<div class="z-tag">@Archive</div><div id="2" class="z-line"><span class="z-comment">&gt; nothing here</span></div>"#);
}
