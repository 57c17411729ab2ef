// Command execution, generic over the dictionary backend and output sink

use super::{Cli, Command};
use crate::services::{DictionaryInfo, DictionaryServices};
use crate::settings::{SettingsError, SettingsStore};
use crate::system_dict::{find_by_identifier, SystemDict, SystemDictKind};
use std::io::Write;

/// Error types for command execution
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
    /// No available dictionary has this identifier
    #[error("Dictionary {0} is not installed")]
    DictionaryNotFound(String),
    /// The selected kind was not resolved on this system
    #[error("System dictionary {0} is not available")]
    DictionaryUnavailable(SystemDictKind),
    #[error("No definition of {word} in {kind}")]
    NoDefinition { word: String, kind: SystemDictKind },
}

/// Run `cli.command` against `services`, writing results to `out`
pub fn execute<S, W>(cli: &Cli, services: S, out: &mut W) -> Result<(), CliError>
where
    S: DictionaryServices,
    W: Write,
{
    match &cli.command {
        Command::Active { json } => {
            let infos: Vec<DictionaryInfo> = services
                .active_dictionaries()
                .iter()
                .map(|d| services.describe(d))
                .collect();
            write_infos(out, &infos, *json)
        }
        Command::Available { json } => {
            let mut infos: Vec<DictionaryInfo> = services
                .available_dictionaries()
                .iter()
                .map(|d| services.describe(d))
                .collect();
            // Sets have no order; keep the listing stable
            infos.sort_by(|a, b| a.identifier.cmp(&b.identifier).then(a.name.cmp(&b.name)));
            write_infos(out, &infos, *json)
        }
        Command::Find { identifier } => {
            let dictionary = find_by_identifier(&services, identifier)
                .ok_or_else(|| CliError::DictionaryNotFound(identifier.clone()))?;
            write_infos(out, &[services.describe(&dictionary)], false)
        }
        Command::Lookup { word, dict } => {
            let kind = match dict {
                Some(kind) => *kind,
                None => settings_store(cli)?.load()?.system_dict,
            };
            let system_dict = SystemDict::new(services);
            if !system_dict.is_available(kind) {
                return Err(CliError::DictionaryUnavailable(kind));
            }
            let definition = system_dict
                .lookup(word, kind)
                .ok_or_else(|| CliError::NoDefinition {
                    word: word.clone(),
                    kind,
                })?;
            writeln!(out, "{}", definition)?;
            Ok(())
        }
        Command::SetDefault { kind } => {
            let store = settings_store(cli)?;
            let mut settings = store.load()?;
            settings.system_dict = *kind;
            store.save(&settings)?;
            writeln!(out, "Default dictionary set to {} ({})", kind, kind.identifier())?;
            Ok(())
        }
    }
}

fn settings_store(cli: &Cli) -> Result<SettingsStore, SettingsError> {
    match &cli.settings {
        Some(path) => Ok(SettingsStore::new(path.clone())),
        None => SettingsStore::with_default_path(),
    }
}

fn write_infos<W: Write>(out: &mut W, infos: &[DictionaryInfo], json: bool) -> Result<(), CliError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, infos)?;
        writeln!(out)?;
        return Ok(());
    }
    for info in infos {
        writeln!(
            out,
            "{}\t{}",
            info.identifier.as_deref().unwrap_or("-"),
            info.name.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
