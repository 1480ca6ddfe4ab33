use crate::commands::{CmdMessage, CmdResult, RosterPaths};
use crate::config::{RosterConfig, CONFIG_FILENAME};
use crate::error::{Result, RosterError};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &RosterPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut config = match (RosterConfig::load(&paths.data_dir), &action) {
        // Setting a key rewrites a malformed file from defaults.
        (Err(RosterError::Config(e)), ConfigAction::Set(..)) => {
            result.add_message(CmdMessage::warning(format!(
                "Ignoring malformed {} ({}); starting from defaults",
                CONFIG_FILENAME, e
            )));
            RosterConfig::default()
        }
        (loaded, _) => loaded?,
    };

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            return Ok(result);
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&paths.data_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key)?
            )));
        }
    }

    Ok(result.with_config(config))
}
