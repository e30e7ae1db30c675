//! Map display options (glyphmaprc)
//!
//! Config files use the rc format: `OPTIONS=` lines holding a comma
//! separated list of `name`, `!name` or `name:value` entries. Lines starting
//! with `#` are comments.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::map::GlyphMode;

/// User-configurable display and loading options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapOptions {
    /// Print tiles in their color
    pub color: bool,
    /// Reject maps holding tokens with no tile kind
    pub strict: bool,
    pub graphics: GlyphMode,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            color: true,
            strict: false,
            graphics: GlyphMode::Fancy,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),
    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}

impl MapOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::Io(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();
        options.apply_config(contents)?;
        Ok(options)
    }

    /// Apply config lines on top of the current values
    pub fn apply_config(&mut self, contents: &str) -> Result<(), OptionsError> {
        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    let opt = opt.trim();
                    if !opt.is_empty() {
                        self.parse_option(opt)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some((key, value)) = opt.split_once(':').or_else(|| opt.split_once('=')) {
            return self.set_option(key.trim(), Some(value.trim()));
        }

        let (negated, name) = match opt.strip_prefix('!') {
            Some(name) => (true, name),
            None => (false, opt),
        };
        self.set_bool_option(name, !negated)
    }

    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "color" | "colour" => self.color = value,
            "strict" => self.strict = value,
            "graphics" => return Err(OptionsError::MissingValue(name.to_string())),
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionsError> {
        let value = value.ok_or_else(|| OptionsError::MissingValue(name.to_string()))?;
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());

        match name {
            "graphics" => {
                self.graphics = value.to_lowercase().parse().map_err(|_| invalid())?;
            }
            "color" | "colour" | "strict" => {
                let flag = match value.to_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    _ => return Err(invalid()),
                };
                self.set_bool_option(name, flag)?;
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        std::fs::write(path, self.to_config_string()).map_err(|e| OptionsError::Io(e.to_string()))
    }

    pub fn to_config_string(&self) -> String {
        let flag = |on: bool, name: &str| {
            if on {
                name.to_string()
            } else {
                format!("!{}", name)
            }
        };
        format!(
            "# glyphmap options\nOPTIONS={},{},graphics:{}\n",
            flag(self.color, "color"),
            flag(self.strict, "strict"),
            self.graphics
        )
    }
}
