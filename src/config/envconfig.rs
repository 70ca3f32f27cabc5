use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Points at a specific dotenv file, e.g. one per target database.
///
/// Lives outside the `APP_` prefix, which is reserved for [`AppConfig`] keys.
///
/// [`AppConfig`]: super::AppConfig
pub const ENV_FILE_VAR: &str = "CQRS_FORGE_ENV_FILE";

/// Dotenv files to try in order: the explicit override, then the crate root.
pub(crate) fn dotenv_candidates(override_path: Option<OsString>, manifest_dir: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(2);
    if let Some(path) = override_path.filter(|path| !path.is_empty()) {
        candidates.push(PathBuf::from(path));
    }
    candidates.push(manifest_dir.join(".env"));
    candidates
}

pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";

    fn load_dotenv() {
        let candidates = dotenv_candidates(
            std::env::var_os(ENV_FILE_VAR),
            Path::new(env!("CARGO_MANIFEST_DIR")),
        );
        for path in candidates {
            if dotenvy::from_path(&path).is_ok() {
                return;
            }
        }
        // Nothing matched; fall back to dotenvy's own upward search.
        let _ = dotenvy::dotenv();
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();

        let settings = config_rs::Config::builder()
            .add_source(
                config_rs::Environment::with_prefix(Self::PREFIX)
                    .prefix_separator("_")
                    .separator(Self::SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .context("failed to read environment variables for config")?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use std::{ffi::OsString, path::Path};

    use super::dotenv_candidates;

    #[test]
    fn override_file_is_tried_first() {
        let candidates = dotenv_candidates(
            Some(OsString::from("/etc/cqrs_forge/staging.env")),
            Path::new("/srv/app"),
        );

        assert_eq!(
            candidates,
            [
                Path::new("/etc/cqrs_forge/staging.env").to_path_buf(),
                Path::new("/srv/app/.env").to_path_buf(),
            ]
        );
    }

    #[test]
    fn empty_override_is_ignored() {
        let candidates = dotenv_candidates(Some(OsString::new()), Path::new("/srv/app"));

        assert_eq!(candidates, [Path::new("/srv/app/.env").to_path_buf()]);
    }
}
