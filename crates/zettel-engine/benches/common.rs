// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_zettel_content(size: usize) -> String {
    let base = "@topic\n@@subtopic\n- point -> consequence\n    a.b. \"quoted\" detail with $x^2$\n    > an aside\n\n[docs](https://docs.rs)\nplain prose with *bold* and ~~struck~~ text\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_deep_outline(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("@section{section}\n"));
        for level in 0..depth {
            let indent = " ".repeat(level * 4);
            content.push_str(&format!("{indent}- level {level} of section {section}\n"));
        }
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
pub fn generate_stray_delimiters(size: usize) -> String {
    "\"unclosed $ and ~ with ` ticks * stars\n".repeat(size)
}
