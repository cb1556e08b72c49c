//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["tutor.toml", ".tutor.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./tutor.toml` or `./.tutor.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/js-tutor/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut sources: Vec<PathBuf> = Vec::new();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                sources.push(global_path);
            }
        }

        if let Some(project_path) = Self::project_config_path() {
            sources.push(project_path);
        }

        if let Some(path) = config_path {
            sources.push(path.clone());
        }

        Self::load_files(&sources)
    }

    /// Merge the given TOML files over the defaults, later files winning
    pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<FileConfig, Box<figment::Error>> {
        let figment = paths.iter().fold(
            Figment::new().merge(Serialized::defaults(FileConfig::default())),
            |figment, path| figment.merge(Toml::file(path.as_ref())),
        );

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/js-tutor/config.toml` or the platform
    /// equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("js-tutor").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_config_sources() -> String {
        let mut out = String::from("Configuration sources (in priority order):\n");

        match Self::project_config_path() {
            Some(path) => out.push_str(&format!("  [FOUND] Project: {}\n", path.display())),
            None => out.push_str("  [     ] Project: ./tutor.toml or ./.tutor.toml\n"),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            out.push_str(&format!("  [{}] Global:  {}\n", mark, path.display()));
        }

        out.push_str("  [     ] Default: built-in defaults\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_global_config_path_names_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("js-tutor"));
        }
    }

    #[test]
    fn test_load_files_merges_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(
            &global,
            "[session]\nlatency_ms = 100\nhistory_limit = 6\n\n[output]\ncolor = false\n",
        )
        .unwrap();
        fs::write(&explicit, "[session]\nlatency_ms = 0\n").unwrap();

        let config = ConfigLoader::load_files(&[&global, &explicit]).unwrap();
        assert_eq!(config.session.latency_ms, 0);
        assert_eq!(config.session.history_limit, 6);
        assert!(!config.output.color);
        assert!(config.repl.typing_indicator);
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let config = ConfigLoader::load_files(&[missing]).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_invalid_type_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[session]\nlatency_ms = \"slow\"\n").unwrap();
        assert!(ConfigLoader::load_files(&[path]).is_err());
    }

    #[test]
    fn test_describe_mentions_defaults() {
        assert!(ConfigLoader::describe_config_sources().contains("built-in defaults"));
    }
}
