//! Merges flags, answers, prompts and defaults into a [`ProjectConfig`]

use super::{partial::PartialConfig, types::ProjectConfig};
use crate::{
    constants::{
        DB_CHOICES, DEFAULT_AUTHOR, DEFAULT_DB, DEFAULT_DESCRIPTION, DEFAULT_PROJECT_NAME,
        DEFAULT_PYTHON_VERSION, SUPPORTED_PYTHON_VERSIONS,
    },
    error::{Error, Result},
    prompt::{ConfirmationConfig, PromptProvider, SingleChoiceConfig, TextPromptConfig},
    validation::{
        parse_database, validate_not_blank, validate_project_name, validate_python_version,
    },
};

/// Resolves the final project options.
///
/// Precedence per field: flag, answers document, interactive prompt, default.
/// Without a prompt provider the resolver runs non-interactively.
pub struct OptionResolver<'a> {
    prompter: Option<&'a dyn PromptProvider>,
}

impl<'a> OptionResolver<'a> {
    pub fn interactive(prompter: &'a dyn PromptProvider) -> Self {
        Self { prompter: Some(prompter) }
    }

    pub fn non_interactive() -> Self {
        Self { prompter: None }
    }

    pub fn resolve(
        &self,
        flags: PartialConfig,
        answers: PartialConfig,
    ) -> Result<ProjectConfig> {
        let supplied = flags.or(answers);
        log::debug!("Supplied options: {supplied:?}");

        let name = match supplied.name {
            Some(name) => name,
            None => self.ask_name()?,
        };
        validate_project_name(&name)?;

        let description = self.text_or_default(
            supplied.description,
            "Project description",
            DEFAULT_DESCRIPTION,
        )?;
        validate_not_blank("description", &description)?;

        let author = self.text_or_default(supplied.author, "Author name", DEFAULT_AUTHOR)?;
        validate_not_blank("author", &author)?;

        let db = match supplied.db {
            Some(db) => db,
            None => self.choice_or_default("Database", DB_CHOICES, DEFAULT_DB)?,
        };
        let db = parse_database(&db)?;

        let python_version = match supplied.python_version {
            Some(version) => version,
            None => self.choice_or_default(
                "Python version",
                SUPPORTED_PYTHON_VERSIONS,
                DEFAULT_PYTHON_VERSION,
            )?,
        };
        validate_python_version(&python_version)?;

        let docker = self.confirm_or_default(supplied.docker, "Include Docker/Compose?")?;
        let ci = self.confirm_or_default(supplied.ci, "Include GitHub Actions CI?")?;
        let devcontainer =
            self.confirm_or_default(supplied.devcontainer, "Include devcontainer setup?")?;

        Ok(ProjectConfig {
            name,
            description,
            author,
            db,
            python_version,
            docker,
            ci,
            devcontainer,
        })
    }

    /// The project name has no default outside of the prompt.
    fn ask_name(&self) -> Result<String> {
        let Some(prompter) = self.prompter else {
            return Err(Error::MissingRequiredInput { field: "name".to_string() });
        };

        let config = TextPromptConfig {
            prompt: "Project name".to_string(),
            default: Some(DEFAULT_PROJECT_NAME.to_string()),
        };
        loop {
            let name = prompter.prompt_text(&config)?;
            match validate_project_name(&name) {
                Ok(()) => return Ok(name),
                Err(err) => println!("{err}"),
            }
        }
    }

    fn text_or_default(
        &self,
        supplied: Option<String>,
        prompt: &str,
        default: &str,
    ) -> Result<String> {
        match (supplied, self.prompter) {
            (Some(value), _) => Ok(value),
            (None, Some(prompter)) => prompter.prompt_text(&TextPromptConfig {
                prompt: prompt.to_string(),
                default: Some(default.to_string()),
            }),
            (None, None) => Ok(default.to_string()),
        }
    }

    fn choice_or_default(
        &self,
        prompt: &str,
        choices: &[&str],
        default: &str,
    ) -> Result<String> {
        let Some(prompter) = self.prompter else {
            return Ok(default.to_string());
        };

        let index = prompter.prompt_single_choice(&SingleChoiceConfig {
            prompt: prompt.to_string(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            default_index: choices.iter().position(|c| *c == default),
        })?;

        choices.get(index).map(|c| c.to_string()).ok_or_else(|| {
            Error::invalid_option(prompt, index.to_string(), "selection out of range")
        })
    }

    fn confirm_or_default(&self, supplied: Option<bool>, prompt: &str) -> Result<bool> {
        match (supplied, self.prompter) {
            (Some(value), _) => Ok(value),
            (None, Some(prompter)) => prompter.prompt_confirmation(&ConfirmationConfig {
                prompt: prompt.to_string(),
                default: true,
            }),
            (None, None) => Ok(true),
        }
    }
}
