use std::io::Write;

use anyhow::Result;
use clap::Arg;
use clap::Command;

use super::*;

fn command() -> Command {
    return Command::new("ideagen")
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Base URL of the generation service. [default: https://example.com]"),
        )
        .arg(
            Arg::new("team")
                .long("team")
                .help("Team preselected in the idea form.")
                .value_parser(["HR", "Marketing", "Product Management"]),
        )
        .arg(Arg::new("config-file").long("config-file"));
}

#[test]
fn it_has_defaults() {
    assert_eq!(Config::default(ConfigKey::ApiURL), DEFAULT_API_URL);
    assert_eq!(Config::default(ConfigKey::Team), "HR");
    assert!(Config::default(ConfigKey::ConfigFile).ends_with("config.toml"));
}

#[test]
fn it_uses_kebab_case_keys() {
    assert_eq!(ConfigKey::ApiURL.to_string(), "api-url");
    assert_eq!(ConfigKey::ConfigFile.to_string(), "config-file");
    assert_eq!(ConfigKey::Team.to_string(), "team");
}

#[test]
fn it_serializes_default_config() {
    let res = Config::serialize_default(command());
    assert_eq!(
        res,
        format!(
            "# Base URL of the generation service.\napi-url = \"{DEFAULT_API_URL}\"\n\n# Team preselected in the idea form. [possible values: HR, Marketing, Product Management]\nteam = \"HR\""
        )
    );
}

// Config is process global, so every load scenario lives in this one test.
#[tokio::test]
async fn it_loads_file_then_flags() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        "api-url = \"http://localhost:8000\"\nteam = \"Marketing\""
    )?;
    let config_file = file.path().to_string_lossy().to_string();

    let matches =
        command().get_matches_from(vec!["ideagen", "--config-file", config_file.as_str()]);
    Config::load(command(), vec![&matches]).await?;
    assert_eq!(Config::get(ConfigKey::ApiURL), "http://localhost:8000");
    assert_eq!(Config::team(), ideagen_client::Team::Marketing);

    let matches = command().get_matches_from(vec![
        "ideagen",
        "--config-file",
        config_file.as_str(),
        "--team",
        "Product Management",
    ]);
    Config::load(command(), vec![&matches]).await?;
    assert_eq!(Config::get(ConfigKey::ApiURL), "http://localhost:8000");
    assert_eq!(Config::team(), ideagen_client::Team::ProductManagement);

    let mut invalid = tempfile::NamedTempFile::new()?;
    writeln!(invalid, "team = \"Finance\"")?;
    let invalid_file = invalid.path().to_string_lossy().to_string();
    let matches =
        command().get_matches_from(vec!["ideagen", "--config-file", invalid_file.as_str()]);
    let err = Config::load(command(), vec![&matches]).await.unwrap_err();
    assert!(err
        .to_string()
        .contains("config.toml has an invalid value for key 'team': Finance"));

    return Ok(());
}
