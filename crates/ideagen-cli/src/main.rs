use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use ideagen_cli::task::run_task;
use ideagen_client::Team;
use ideagen_term::{
    destruct_terminal_for_panic, start_loop, Config, FormInput, GenerationClientManager,
};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io;
use strum::VariantNames;

const LOG_FILE: &str = "ideagen.log";

#[derive(Parser, Debug)]
#[clap(
    name = "ideagen",
    author,
    version,
    about = "Submit an idea to a crew of AI agents and read their conversation and final document"
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,

    #[arg(
        id = "api-url",
        long = "api-url",
        env = "IDEAGEN_API_URL",
        global = true,
        help = "Base URL of the generation service. [default: https://tata-idea-generation-mollick.onrender.com]"
    )]
    api_url: Option<String>,

    #[arg(
        id = "team",
        long = "team",
        env = "IDEAGEN_TEAM",
        global = true,
        value_parser = PossibleValuesParser::new(Team::VARIANTS.iter().copied()),
        help = "Team preselected in the idea form. [default: HR]"
    )]
    team: Option<String>,

    #[arg(
        id = "config-file",
        long = "config-file",
        env = "IDEAGEN_CONFIG_FILE",
        global = true,
        help = "Path to config.toml."
    )]
    config_file: Option<String>,

    #[arg(long, short, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit a single idea and print the conversation and final document to stdout
    Generate {
        #[arg(long, help = "The idea to hand to the agents")]
        idea: String,
    },
    /// Configuration helpers
    Config {
        #[clap(subcommand)]
        action: ConfigCommands,
    },
    /// Print shell completions
    Completions {
        #[arg(long, short)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print a commented config.toml with default values
    Default,
}

#[tokio::main]
async fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto()
            .most_recent_first(false)
            .lineno_suffix(true)
            .create_panic_handler()(panic_info);
    }));

    let cmd = Cli::command();
    let matches = cmd.clone().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Info);
    match cli.command {
        // The terminal UI and task output own the terminal, so logs go to a file.
        None | Some(Commands::Generate { .. }) => {
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(LOG_FILE)?;

            env_logger::Builder::new()
                .filter_level(log_level_filter)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .init();
        }
        _ => {
            env_logger::Builder::new()
                .filter_level(log_level_filter)
                .init();
        }
    }

    Config::load(cmd.clone(), vec![&matches]).await?;

    match cli.command {
        None => {
            let client = GenerationClientManager::get()?;
            log::info!("Starting terminal UI");
            start_loop(client, Config::team()).await
        }
        Some(Commands::Generate { idea }) => {
            let client = GenerationClientManager::get()?;
            let output = run_task(client, FormInput::new(Config::team(), &idea)).await?;
            print!("{output}");
            Ok(())
        }
        Some(Commands::Config {
            action: ConfigCommands::Default,
        }) => {
            println!("{}", Config::serialize_default(cmd));
            Ok(())
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "ideagen", &mut io::stdout());
            Ok(())
        }
    }
}
