pub mod check;
pub mod config;
pub mod init;

pub use check::{CheckOutcome, execute_check, run_check};
pub use config::{run_config, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};

use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::filesystem::FileSystem;
use crate::output::ColorMode;
use crate::Result;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from an explicit path or the default location.
///
/// # Errors
/// Returns an error if no config is found or it cannot be read or parsed.
pub fn load_config<F: FileSystem>(path: Option<&Path>, fs: F) -> Result<LoadResult> {
    let loader = FileConfigLoader::with_fs(fs);
    match path {
        Some(p) => loader.load_from_path(p),
        None => loader.load(),
    }
}

/// Write formatted output to a file, or to stdout unless `quiet`.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
