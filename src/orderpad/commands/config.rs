use crate::commands::{CmdMessage, CmdResult};
use crate::config::OrderPadConfig;
use crate::error::{OrderPadError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetCurrency(String),
    SetSeedPath(PathBuf),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = OrderPadConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => match key.as_str() {
            "currency" | "seed-path" => {}
            other => {
                return Err(OrderPadError::Api(format!("Unknown config key: {}", other)));
            }
        },
        ConfigAction::SetCurrency(value) => {
            config.currency = value;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success("Currency updated."));
        }
        ConfigAction::SetSeedPath(path) => {
            config.seed_path = Some(path);
            config.save(config_dir)?;
            result.add_message(CmdMessage::success("Seed path updated."));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_all_returns_defaults_without_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), OrderPadConfig::default());
    }

    #[test]
    fn set_currency_persists() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), ConfigAction::SetCurrency("$".into())).unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().currency, "$");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), ConfigAction::ShowKey("nope".into())).is_err());
    }
}
