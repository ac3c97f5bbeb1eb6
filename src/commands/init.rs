use std::fs;

use crate::cli::InitArgs;
use crate::{ConformError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error ({}): {e}", e.stage());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a starter configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ConformError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

/// Starter rule set for a full-stack project with a web frontend, an HTTP
/// backend, a database, an AI service integration and startup scripts.
#[must_use]
pub fn generate_config_template() -> String {
    r#"# conform-guard configuration file
version = "1"

[project]
# Project root, relative to this file (default: this file's directory)
# root = "."

# JSON report written after each check (omit to disable)
report = "conformance-report.json"

# Each [[rules]] entry expands, in order, into:
#   an existence check (unless exists = false),
#   a minimum line count check (min_lines),
#   one check per required substring (contains).
# Directory entries (kind = "directory") check the number of immediate
# children against min_entries (default: 0).

# --- frontend ---

[[rules]]
target = "frontend/src/App.tsx"
category = "frontend"
description = "Application shell with routing"
min_lines = 25
contains = ["Router", "Routes", "Route"]

[[rules]]
target = "frontend/src/pages/Dashboard.tsx"
category = "frontend"
description = "Dashboard page"
min_lines = 100
contains = ["useState"]

[[rules]]
target = "frontend/src/components/Layout.tsx"
category = "frontend"
min_lines = 30

[[rules]]
target = "frontend/src/components/communications"
category = "frontend"
kind = "directory"
description = "Communication components"
min_entries = 4

[[rules]]
target = "frontend/src/components/ui"
category = "frontend"
kind = "directory"
description = "UI component library"
min_entries = 8

# --- backend ---

[[rules]]
target = "backend/server.js"
category = "backend"
description = "HTTP server entry point"
min_lines = 150
contains = ["aiRoutes", "communicationsRoutes"]

[[rules]]
target = "backend/routes/customers.js"
category = "backend"
min_lines = 50

[[rules]]
target = "backend/middleware/errorHandler.js"
category = "backend"
min_lines = 20

# --- database ---

[[rules]]
target = "database"
category = "database"
kind = "directory"
min_entries = 1

[[rules]]
target = "backend/init_database.js"
category = "database"
description = "Schema initialization script"
contains = ["CREATE TABLE"]

# --- ai-integration ---

[[rules]]
target = "backend/.env"
category = "ai-integration"
description = "AI service credentials"
contains = ["SPARK_APPID", "SPARK_API_KEY"]

[[rules]]
target = "backend/routes/ai.js"
category = "ai-integration"
contains = ["/health"]

# --- startup-script ---

[[rules]]
target = "start.sh"
category = "startup-script"

[[rules]]
target = "README.md"
category = "startup-script"
min_lines = 10
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
