use std::path::PathBuf;

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the viewer; without a path the config file supplies one
    Browse { notes_path: Option<PathBuf> },
    /// Print one zettel as HTML and exit
    Render { file: PathBuf },
    Help,
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [notes-folder-path]\n       {program} --render <file.zettel>"
    )
}

/// Parses the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    match args {
        [] => Ok(Command::Browse { notes_path: None }),
        [flag] if flag == "-h" || flag == "--help" => Ok(Command::Help),
        [flag] if flag == "--render" => Err("--render needs a file".to_string()),
        [flag, file] if flag == "--render" => Ok(Command::Render {
            file: PathBuf::from(file),
        }),
        [flag, ..] if flag.starts_with("--") => Err(format!("unknown option {flag}")),
        [path] => Ok(Command::Browse {
            notes_path: Some(PathBuf::from(path)),
        }),
        _ => Err("too many arguments".to_string()),
    }
}
