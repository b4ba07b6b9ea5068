use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static BASE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Returns the directory all relative paths are resolved against
/// (the working directory the tool was started from).
pub fn get_base_dir() -> &'static PathBuf {
    BASE_DIR.get_or_init(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Returns the logs directory: `<base_dir>/logs/`
pub fn get_logs_dir() -> PathBuf {
    get_base_dir().join("logs")
}

/// Returns the config file path: `<base_dir>/config.json`
pub fn get_config_path() -> PathBuf {
    get_base_dir().join("config.json")
}

/// Resolves a configured path. Absolute paths are returned unchanged.
pub fn resolve(path: &Path) -> PathBuf {
    get_base_dir().join(path)
}

/// Ensures all output directories exist. Call at startup.
pub fn ensure_directories() -> std::io::Result<()> {
    std::fs::create_dir_all(get_logs_dir())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keeps_absolute_paths() {
        let absolute = std::env::temp_dir().join("odds.csv");
        assert_eq!(resolve(&absolute), absolute);
    }

    #[test]
    fn test_resolve_joins_relative_paths() {
        let resolved = resolve(Path::new("fortuna_zapasy.csv"));
        assert_eq!(resolved, get_base_dir().join("fortuna_zapasy.csv"));
    }
}
