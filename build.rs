//! Build script for clitube.
//!
//! Copies the `.env.example` configuration template to the user's local data
//! directory, next to where clitube looks for its `.env` file.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root to the local data directory.
///
/// The template ends up in:
/// - Linux: `~/.local/share/clitube/.env.example`
/// - macOS: `~/Library/Application Support/clitube/.env.example`
/// - Windows: `%LOCALAPPDATA%/clitube/.env.example`
///
/// An unchanged template is not rewritten. A missing template only produces
/// a cargo warning. Failing to create the directory or write the file fails
/// the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let template = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?).join(".env.example");
    if !template.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
        return Ok(());
    }

    let mut target = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    target.push("clitube");
    fs::create_dir_all(&target)?;
    target.push(".env.example");

    let contents = fs::read(&template)?;
    if fs::read(&target).ok().as_deref() != Some(contents.as_slice()) {
        fs::write(&target, contents)?;
    }

    Ok(())
}
