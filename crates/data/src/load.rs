use anyhow::Context;
use pokerslots_core::GameConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const GAME_CONFIG_FILE: &str = "game.json";

/// Reads `game.json` from `dir`. A missing file means the built-in defaults;
/// a present one must parse and validate.
pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let path = dir.join(GAME_CONFIG_FILE);
    let config: GameConfig = if path.exists() {
        load_json(&path)?
    } else {
        log::debug!("{} not found, using defaults", path.display());
        GameConfig::default()
    };
    config
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_root(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "pokerslots_data_load_{}_{}_{}",
            std::process::id(),
            name,
            nanos
        ));
        let _ = fs::create_dir_all(&path);
        path
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = temp_root("missing");
        let config = load_game_config(&dir).expect("defaults");
        assert_eq!(config, GameConfig::default());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn partial_file_keeps_defaults_for_absent_fields() {
        let dir = temp_root("partial");
        fs::write(dir.join(GAME_CONFIG_FILE), r#"{ "starting_balance": 75 }"#).expect("write");
        let config = load_game_config(&dir).expect("load");
        assert_eq!(config.starting_balance, 75);
        assert_eq!(config.default_bet, 1);
        assert_eq!(config.bet_options, vec![1, 5, 10, 25, 50]);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let dir = temp_root("invalid");
        fs::write(
            dir.join(GAME_CONFIG_FILE),
            r#"{ "default_bet": 2, "bet_options": [1, 5] }"#,
        )
        .expect("write");
        let err = load_game_config(&dir).expect_err("default bet not offered");
        assert!(format!("{err:#}").contains("default bet 2"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn malformed_json_reports_the_path() {
        let dir = temp_root("malformed");
        fs::write(dir.join(GAME_CONFIG_FILE), "{ not json").expect("write");
        let err = load_game_config(&dir).expect_err("parse error");
        assert!(err.to_string().starts_with("parse "));
        let _ = fs::remove_dir_all(dir);
    }
}
