//! Argument file loading
//!
//! Argument files hold a flat object of string values, in JSON or TOML.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use runargs_core::ArgumentSet;

/// Load an argument file, picking the format from the extension
pub fn load_argument_file(path: &Path) -> Result<ArgumentSet> {
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let arguments = if is_toml {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read argument file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML argument file {}", path.display()))?
    } else {
        ArgumentSet::load_from_file(path)
            .with_context(|| format!("Failed to load argument file {}", path.display()))?
    };

    debug!("Loaded {} arguments from {:?}", arguments.len(), path);
    Ok(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_toml_arguments() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("args.toml");
        fs::write(&path, "class = \"pkg.Foo#bar\"\ntimeout_msec = \"100\"\n").unwrap();

        let arguments = load_argument_file(&path).unwrap();
        assert_eq!(arguments.get("class"), Some("pkg.Foo#bar"));
        assert_eq!(arguments.get("timeout_msec"), Some("100"));
    }

    #[test]
    fn test_load_json_arguments() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("args.json");
        fs::write(&path, r#"{"notClass": "pkg.Slow"}"#).unwrap();

        let arguments = load_argument_file(&path).unwrap();
        assert_eq!(arguments.get("notClass"), Some("pkg.Slow"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_argument_file(&temp_dir.path().join("nope.toml")).is_err());
    }
}
