//! Info command implementation.

use serde::Serialize;
use zfio::{is_remote, resolve, Access, Mode, STDIO_PATH};

/// How a path and mode resolve.
#[derive(Debug, Serialize)]
pub struct InfoResult {
    /// The path as given.
    pub path: String,
    /// The mode as given.
    pub mode: String,
    /// Mode after removing a backend suffix.
    pub effective_mode: String,
    /// Backend name.
    pub backend: &'static str,
    /// Suffix that selected the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<&'static str>,
    /// Whether this build can open the backend.
    pub available: bool,
    /// Where the bytes would come from or go to.
    pub target: &'static str,
}

/// Runs the info command.
pub fn run(path: &str, mode: &str, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let resolution = resolve(path, mode)?;
    let reading = Mode::parse(&resolution.mode)?.access() == Access::Read;

    let target = match (path == STDIO_PATH, reading) {
        (true, true) => "stdin",
        (true, false) => "stdout",
        (false, true) if is_remote(path) => "remote",
        _ => "file",
    };

    let result = InfoResult {
        path: path.to_string(),
        mode: mode.to_string(),
        effective_mode: resolution.mode,
        backend: resolution.backend.name(),
        suffix: resolution.backend.suffix(),
        available: resolution.backend.is_available(),
        target,
    };

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => print_text_output(&result),
    }

    Ok(())
}

fn print_text_output(result: &InfoResult) {
    println!("Path:           {}", result.path);
    println!("Mode:           {}", result.mode);
    println!("Effective mode: {}", result.effective_mode);
    println!("Backend:        {}", result.backend);
    if let Some(suffix) = result.suffix {
        println!("Suffix:         {}", suffix);
    }
    println!("Available:      {}", if result.available { "yes" } else { "no" });
    println!("Target:         {}", result.target);
}
