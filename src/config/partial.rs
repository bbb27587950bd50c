//! Optional, unvalidated option sources (CLI flags and answers documents)

use crate::{
    constants::STDIN_INDICATOR,
    error::{Error, Result},
    ioutils::read_from,
};
use serde::Deserialize;
use std::path::Path;

/// Every [`ProjectConfig`](super::ProjectConfig) field as an optional raw value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub db: Option<String>,
    pub python_version: Option<String>,
    pub docker: Option<bool>,
    pub ci: Option<bool>,
    pub devcontainer: Option<bool>,
}

impl PartialConfig {
    /// Fills every field missing from `self` with the value from `fallback`.
    pub fn or(self, fallback: PartialConfig) -> PartialConfig {
        PartialConfig {
            name: self.name.or(fallback.name),
            description: self.description.or(fallback.description),
            author: self.author.or(fallback.author),
            db: self.db.or(fallback.db),
            python_version: self.python_version.or(fallback.python_version),
            docker: self.docker.or(fallback.docker),
            ci: self.ci.or(fallback.ci),
            devcontainer: self.devcontainer.or(fallback.devcontainer),
        }
    }

    /// Parses an answers document.
    ///
    /// An empty document yields an empty set of answers.
    pub fn from_json(buf: &str) -> Result<PartialConfig> {
        if buf.trim().is_empty() {
            return Ok(PartialConfig::default());
        }
        Ok(serde_json::from_str(buf)?)
    }

    /// Loads answers from `--answers` (inline JSON or `-` for stdin) and/or `--answers-file`.
    ///
    /// Inline answers take precedence over the file.
    pub fn load_answers(
        inline: Option<&str>,
        file: Option<&Path>,
    ) -> Result<PartialConfig> {
        let inline = match inline {
            Some(STDIN_INDICATOR) => {
                PartialConfig::from_json(&read_from(std::io::stdin())?)?
            }
            Some(json) => PartialConfig::from_json(json)?,
            None => PartialConfig::default(),
        };

        let from_file = match file {
            Some(path) => {
                log::debug!("Reading answers from {}", path.display());
                let buf = std::fs::read_to_string(path).map_err(|source| {
                    Error::FilesystemError { path: path.to_path_buf(), source }
                })?;
                PartialConfig::from_json(&buf)?
            }
            None => PartialConfig::default(),
        };

        Ok(inline.or(from_file))
    }
}
