//! Build script for the News API relay.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory, next to where the relay looks for its `.env` file at
//! startup.

use std::{env, fs, path::PathBuf};

/// Main build script entry point that handles configuration template setup.
///
/// # File Operations
///
/// The template is read from the crate root and written to:
/// - Linux: `~/.local/share/newsrelay/.env.example`
/// - macOS: `~/Library/Application Support/newsrelay/.env.example`
/// - Windows: `%LOCALAPPDATA%/newsrelay/.env.example`
///
/// # Error Handling
///
/// A missing template only produces a cargo warning. Failures to create the
/// target directory or write the file abort the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("newsrelay");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
