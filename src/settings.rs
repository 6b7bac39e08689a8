use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_ENDPOINT: &str = "https://api.pinboard.in/v1/posts/all";
pub const DEFAULT_DAYS: u32 = 7;
const ENV_PREFIX: &str = "LINKDUMP";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Octopress checkout; the post lands under `source/_posts/`.
    pub output_dir: PathBuf,
    pub days: u32,
    pub token_file: PathBuf,
    pub endpoint: String,
}

/// Values given on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub output_dir: Option<PathBuf>,
    pub days: Option<u32>,
    pub token_file: Option<PathBuf>,
    pub endpoint: Option<String>,
}

impl Settings {
    /// Defaults, then `LINKDUMP_*` environment, then command-line overrides.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        Self::load_with(overrides, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with(overrides: &Overrides, env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("output_dir", ".")?
            .set_default("days", i64::from(DEFAULT_DAYS))?
            .set_default("token_file", path_value(&default_token_file()))?
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .add_source(env.try_parsing(true))
            .set_override_option("output_dir", overrides.output_dir.as_deref().map(path_value))?
            .set_override_option("days", overrides.days.map(i64::from))?
            .set_override_option("token_file", overrides.token_file.as_deref().map(path_value))?
            .set_override_option("endpoint", overrides.endpoint.clone())?
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

fn default_token_file() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".pinboard")
}

fn path_value(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn defaults_apply_without_env_or_flags() {
        let s = Settings::load_with(&Overrides::default(), env(&[])).unwrap();
        assert_eq!(s.output_dir, PathBuf::from("."));
        assert_eq!(s.days, 7);
        assert_eq!(s.endpoint, DEFAULT_ENDPOINT);
        assert!(s.token_file.ends_with(".pinboard"));
    }

    #[test]
    fn env_overrides_defaults() {
        let s = Settings::load_with(
            &Overrides::default(),
            env(&[("LINKDUMP_DAYS", "3"), ("LINKDUMP_OUTPUT_DIR", "/srv/blog")]),
        )
        .unwrap();
        assert_eq!(s.days, 3);
        assert_eq!(s.output_dir, PathBuf::from("/srv/blog"));
    }

    #[test]
    fn flags_override_env() {
        let overrides = Overrides {
            days: Some(14),
            token_file: Some(PathBuf::from("/tmp/token")),
            ..Default::default()
        };
        let s = Settings::load_with(&overrides, env(&[("LINKDUMP_DAYS", "3")])).unwrap();
        assert_eq!(s.days, 14);
        assert_eq!(s.token_file, PathBuf::from("/tmp/token"));
    }

    #[test]
    fn bad_number_is_configuration_error() {
        let err = Settings::load_with(&Overrides::default(), env(&[("LINKDUMP_DAYS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, crate::error::Error::Configuration(_)));
    }
}
