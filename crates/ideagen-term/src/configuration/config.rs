#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use ideagen_client::Team;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

pub const DEFAULT_API_URL: &str = "https://tata-idea-generation-mollick.onrender.com";

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    #[strum(serialize = "api-url")]
    ApiURL,
    ConfigFile,
    Team,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    /// Team preselected in the form, falling back to the default team.
    pub fn team() -> Team {
        return Config::get(ConfigKey::Team).parse().unwrap_or_default();
    }

    pub fn default(key: ConfigKey) -> String {
        let config_path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_default()
            .join("ideagen/config.toml");

        let res = match key {
            ConfigKey::ApiURL => DEFAULT_API_URL.to_string(),
            ConfigKey::Team => Team::default().to_string(),

            // Special
            ConfigKey::ConfigFile => config_path.to_string_lossy().to_string(),
        };

        return res;
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(&config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if let Some(val) = doc.get(&key.to_string()) {
                    // Use clap value parsers to do validation.
                    let possible_values = possible_values(&cmd, key);

                    if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        if !possible_values.is_empty()
                            && !possible_values.contains(&val_str.to_string())
                        {
                            bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", possible_values.join(", ")));
                        }
                        Config::set(key, val_str);
                    }
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            api_url = Config::get(ConfigKey::ApiURL),
            team = Config::get(ConfigKey::Team),
            config_file = Config::get(ConfigKey::ConfigFile),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|help| return help.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let possible_values = possible_values(&cmd, key);
                if !possible_values.is_empty() {
                    description = format!(
                        "{description} [possible values: {}]",
                        possible_values.join(", ")
                    );
                }

                let val = Config::default(key);
                let line = if val.is_empty() {
                    format!("# {key} = \"\"")
                } else {
                    format!("{key} = \"{val}\"")
                };

                return Some(format!("# {description}\n{line}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}

fn possible_values(cmd: &Command, key: ConfigKey) -> Vec<String> {
    return cmd
        .get_arguments()
        .find(|e| return e.get_long() == Some(key.to_string().as_str()))
        .map(|arg| {
            return arg
                .get_possible_values()
                .iter()
                .map(|e| return e.get_name().to_string())
                .collect::<Vec<String>>();
        })
        .unwrap_or_default();
}
