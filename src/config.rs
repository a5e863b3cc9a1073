use std::path::PathBuf;

use anyhow::Result;
use crossterm::style::Stylize;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::default_colors::*;

pub const USER_CONFIG_FILE: &str = "~/.config/bookform/config.toml";
pub const LOCAL_CONFIG_FILE: &str = "config.toml";
pub const ENV_PREFIX: &str = "BOOKFORM_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    bold:   bool,
    italic: bool,
    color:  crossterm::style::Color,
}

impl StyleConfig {
    fn style(&self, s: impl ToString) -> String {
        let mut s = s.to_string().with(self.color);
        if self.bold {
            s = s.bold();
        }
        if self.italic {
            s = s.italic();
        }
        s.to_string()
    }
}

pub trait Styleable {
    fn style(&self, c: &StyleConfig) -> String;
}

impl<T> Styleable for T
where
    T: ToString + std::fmt::Display,
{
    fn style(&self, c: &StyleConfig) -> String {
        c.style(self)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color:  COLOR_WHITE,
            bold:   false,
            italic: false,
        }
    }
}

/// How a single status line is printed: `{prefix}{description} {content}{suffix}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub prefix:            String,
    pub suffix:            String,
    pub description:       String,
    pub style_prefix:      StyleConfig,
    pub style_suffix:      StyleConfig,
    pub style_description: StyleConfig,
    pub style_content:     StyleConfig,
}

impl OutputConfig {
    pub fn format(&self, content: impl ToString) -> String {
        let prefix = self.prefix.style(&self.style_prefix);
        let suffix = self.suffix.style(&self.style_suffix);
        let description = self.description.style(&self.style_description);
        let content = content.to_string().style(&self.style_content);
        format!("{prefix}{description} {content}{suffix}")
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix:            "[".into(),
            suffix:            "]".into(),
            description:       "".into(),
            style_prefix:      StyleConfig::default(),
            style_suffix:      StyleConfig::default(),
            style_description: StyleConfig {
                italic: true,
                ..StyleConfig::default()
            },
            style_content:     StyleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url:       String,
    /// How long a status message stays visible.
    pub status_display_ms:  u64,
    pub log_level:          String,
    pub history_file:       PathBuf,
    pub style_header:       StyleConfig,
    pub style_id:           StyleConfig,
    pub style_title:        StyleConfig,
    pub style_author:       StyleConfig,
    pub style_isbn:         StyleConfig,
    pub style_price:        StyleConfig,
    pub style_publish_date: StyleConfig,
    pub output_placeholder: OutputConfig,
    pub output_loading:     OutputConfig,
    pub output_success:     OutputConfig,
    pub output_error:       OutputConfig,
    pub output_alert:       OutputConfig,
    pub output_form:        OutputConfig,
}

impl Config {
    pub fn default_as_string() -> Result<String> {
        Ok(toml::to_string(&Self::default())?)
    }

    pub fn figment() -> Figment {
        let user_file = shellexpand::tilde(USER_CONFIG_FILE).into_owned();
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(user_file))
            .merge(Toml::file(LOCAL_CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn read_config() -> Result<Self> {
        Ok(Self::figment().extract()?)
    }

    pub fn status_display(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.status_display_ms)
    }

    /// History path with `~` and environment variables expanded.
    pub fn history_path(&self) -> Result<PathBuf> {
        Ok(shellexpand::path::full(&self.history_file)?.into_owned())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url:       "http://localhost:8080".into(),
            status_display_ms:  3000,
            log_level:          "warn".into(),
            history_file:       PathBuf::from("~/.local/share/bookform/history.txt"),
            style_header:       StyleConfig {
                bold: true,
                ..StyleConfig::default()
            },
            style_id:           StyleConfig {
                color: COLOR_DIMMED,
                ..StyleConfig::default()
            },
            style_title:        StyleConfig {
                color: COLOR_BOOK,
                bold: true,
                ..StyleConfig::default()
            },
            style_author:       StyleConfig {
                color: COLOR_AUTHOR,
                ..StyleConfig::default()
            },
            style_isbn:         StyleConfig {
                italic: true,
                ..StyleConfig::default()
            },
            style_price:        StyleConfig {
                color: COLOR_PRICE,
                ..StyleConfig::default()
            },
            style_publish_date: StyleConfig {
                color: COLOR_TIMESTAMP,
                ..StyleConfig::default()
            },
            output_placeholder: OutputConfig {
                prefix: "".into(),
                suffix: "".into(),
                style_content: StyleConfig {
                    color: COLOR_DIMMED,
                    italic: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_loading:     OutputConfig {
                prefix: "".into(),
                suffix: "".into(),
                style_content: StyleConfig {
                    color: COLOR_DIMMED,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_success:     OutputConfig {
                description: "OK".into(),
                style_content: StyleConfig {
                    color: COLOR_SUCCESS,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_error:       OutputConfig {
                description: "Error".into(),
                style_content: StyleConfig {
                    color: COLOR_ERROR,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_alert:       OutputConfig {
                prefix: "!! ".into(),
                suffix: "".into(),
                style_prefix: StyleConfig {
                    color: COLOR_ERROR,
                    bold: true,
                    ..StyleConfig::default()
                },
                style_content: StyleConfig {
                    color: COLOR_ERROR,
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_form:        OutputConfig {
                prefix: "".into(),
                suffix: "".into(),
                style_description: StyleConfig {
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
        }
    }
}
