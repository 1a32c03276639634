use crate::{
    logger::{LogFormat, LogLevel, LoggerConfig},
    models::{ArtStyle, AspectRatio},
};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(env_var)
    }

    /// Builds the config from a variable lookup. Blank values count as unset, so a
    /// blank `GEMINI_API_KEY` falls through to `API_KEY`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let api_key = var("GEMINI_API_KEY").or_else(|| var("API_KEY"));
        let model = var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = var("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        GeminiConfig {
            api_key,
            model,
            base_url,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub gemini: GeminiConfig,
    pub default_style: ArtStyle,
    pub default_aspect_ratio: AspectRatio,
    pub output_dir: PathBuf,
    pub log_level: LogLevel,
    pub log_format: LogFormat,
    pub log_file: Option<String>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        StudioConfig {
            gemini: GeminiConfig::default(),
            default_style: ArtStyle::default(),
            default_aspect_ratio: AspectRatio::default(),
            output_dir: PathBuf::from("."),
            log_level: LogLevel::Info,
            log_format: LogFormat::Pretty,
            log_file: None,
        }
    }
}

impl StudioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(env_var)
    }

    /// Unknown style, ratio or log format values are logged and replaced by the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let default_style = var("NANOBANANA_STYLE")
            .and_then(|value| match value.parse() {
                Ok(style) => Some(style),
                Err(e) => {
                    log::warn!("Ignoring NANOBANANA_STYLE: {}", e);
                    None
                }
            })
            .unwrap_or_default();
        let default_aspect_ratio = var("NANOBANANA_ASPECT_RATIO")
            .and_then(|value| match value.parse() {
                Ok(ratio) => Some(ratio),
                Err(e) => {
                    log::warn!("Ignoring NANOBANANA_ASPECT_RATIO: {}", e);
                    None
                }
            })
            .unwrap_or_default();
        let output_dir = var("NANOBANANA_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let log_level = var("NANOBANANA_LOG_LEVEL")
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(LogLevel::Info);
        let log_format = var("NANOBANANA_LOG_FORMAT")
            .and_then(|value| {
                let format = LogFormat::parse(&value);
                if format.is_none() {
                    log::warn!("Ignoring NANOBANANA_LOG_FORMAT '{}' (expected pretty or json)", value);
                }
                format
            })
            .unwrap_or_default();

        StudioConfig {
            gemini: GeminiConfig::from_lookup(&lookup),
            default_style,
            default_aspect_ratio,
            output_dir,
            log_level,
            log_format,
            log_file: var("NANOBANANA_LOG_FILE"),
        }
    }

    /// Logger settings: the production preset for JSON, the development preset for
    /// pretty output at debug or trace, plain defaults otherwise.
    pub fn logger_config(&self) -> LoggerConfig {
        let config = match self.log_format {
            LogFormat::Json => LoggerConfig::production(),
            LogFormat::Pretty if self.log_level <= LogLevel::Debug => LoggerConfig::development(),
            LogFormat::Pretty => LoggerConfig::new(),
        }
        .with_level(self.log_level);

        match &self.log_file {
            Some(path) => config.with_file_output(path),
            None => config,
        }
    }

    pub fn with_gemini(mut self, config: GeminiConfig) -> Self {
        self.gemini = config;
        self
    }

    pub fn with_default_style(mut self, style: ArtStyle) -> Self {
        self.default_style = style;
        self
    }

    pub fn with_default_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.default_aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<String>) -> Self {
        self.log_file = Some(path.into());
        self
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok()
}
