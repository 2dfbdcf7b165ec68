use etcetera::{choose_app_strategy, AppStrategy, AppStrategyArgs};
use std::path::PathBuf;

pub struct Paths;

impl Paths {
    /// Base directory for persistent data. `DOCVAULT_PATH_ROOT` overrides
    /// the platform location, which is how tests and portable installs
    /// point the vault at a scratch directory.
    pub fn data_dir() -> PathBuf {
        if let Ok(path_root) = std::env::var("DOCVAULT_PATH_ROOT") {
            return PathBuf::from(path_root).join("data");
        }

        let strategy = choose_app_strategy(AppStrategyArgs {
            top_level_domain: "Docvault".to_string(),
            author: "Docvault".to_string(),
            app_name: "docvault".to_string(),
        })
        .expect("docvault requires a home dir");

        strategy.data_dir()
    }

    pub fn in_data_dir(subpath: &str) -> PathBuf {
        Self::data_dir().join(subpath)
    }
}
