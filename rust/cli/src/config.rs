use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "POKERHAND_CONFIG";
pub const LOCALE_ENV: &str = "POKERHAND_LOCALE";
pub const UNICODE_SUITS_ENV: &str = "POKERHAND_UNICODE_SUITS";

/// Language used for combination names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ru,
}

impl Locale {
    fn parse(s: &str) -> Option<Locale> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: Locale,
    pub unicode_suits: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub locale: ValueSource,
    pub unicode_suits: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            locale: ValueSource::Default,
            unicode_suits: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Applies a `--locale` flag on top of file and environment values.
    pub fn with_locale_override(mut self, locale: Option<Locale>) -> Self {
        if let Some(l) = locale {
            self.config.locale = l;
            self.sources.locale = ValueSource::Cli;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            unicode_suits: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_env(|key| std::env::var(key).ok())
}

/// Resolves configuration from defaults, the file named by `POKERHAND_CONFIG`
/// and the `POKERHAND_*` variables, in that order. `env` looks a variable up.
pub fn load_with_env<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env(CONFIG_ENV)
        && !path.is_empty()
    {
        tracing::debug!(path = %path, "loading config file");
        let s = fs::read_to_string(&path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.locale {
            cfg.locale = Locale::parse(&v)
                .ok_or_else(|| ConfigError::Invalid(format!("Invalid locale in file: {}", v)))?;
            sources.locale = ValueSource::File;
        }
        if let Some(v) = f.unicode_suits {
            cfg.unicode_suits = v;
            sources.unicode_suits = ValueSource::File;
        }
    }

    if let Some(locale) = env(LOCALE_ENV)
        && !locale.is_empty()
    {
        cfg.locale = Locale::parse(&locale)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid locale: {}", locale)))?;
        sources.locale = ValueSource::Env;
    }
    if let Some(unicode) = env(UNICODE_SUITS_ENV)
        && !unicode.is_empty()
    {
        cfg.unicode_suits = parse_bool(&unicode)
            .ok_or_else(|| ConfigError::Invalid("Invalid unicode_suits".into()))?;
        sources.unicode_suits = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    unicode_suits: Option<bool>,
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
