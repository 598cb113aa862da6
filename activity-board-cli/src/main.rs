use activity_board_cli::{
    new_controller, run_action, run_list, CliError, LogConfig, ReqwestTransport, Result,
};
use activity_board_core::{ActionRequest, ActivitiesClient, BoardConfig, FilterCriteria, Snapshot, SortKey};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "activity-board")]
#[command(version, about = "Activity Board CLI - browse and sign up for school activities")]
struct Cli {
    /// Base URL of the activities API
    #[arg(
        short = 's',
        long,
        global = true,
        env = "ACTIVITIES_API_URL",
        default_value = "http://localhost:8000"
    )]
    server: String,

    /// More log output (repeat for debug)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// No log output
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List activities
    List {
        /// Only this category
        #[arg(short = 'c', long, default_value = "")]
        category: String,

        /// Sort order: name, time or availability
        #[arg(long, default_value_t = SortKey::Name)]
        sort: SortKey,

        /// Case-insensitive search in name, description and schedule
        #[arg(long, default_value = "")]
        search: String,

        /// Print the derived view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sign up for an activity
    Signup {
        /// Activity name
        activity: String,

        /// Student email
        #[arg(short = 'e', long)]
        email: String,
    },

    /// Unregister from an activity
    Unregister {
        /// Activity name
        activity: String,

        /// Student email
        #[arg(short = 'e', long)]
        email: String,
    },

    /// Print the JSON schema of the list response
    Schema,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LogConfig::from_flags(cli.verbose, cli.quiet)
        .init()
        .map_err(CliError::InvalidConfig)?;

    let config = BoardConfig::new(cli.server.clone());

    match cli.command {
        Commands::Schema => {
            let schema = schemars::schema_for!(Snapshot);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
        Commands::List {
            category,
            sort,
            search,
            json,
        } => {
            let criteria = FilterCriteria::new()
                .with_category(category)
                .with_sort_key(sort)
                .with_search(search);
            let mut controller = new_controller(client(&config)?, &config);

            info!("📋 Listing activities from {}", config.api_base_url);
            let result = run_list(&mut controller, criteria).await;

            if json && result.is_ok() {
                let derived = controller.board().view().into_snapshot();
                println!("{}", serde_json::to_string_pretty(&derived)?);
            } else {
                controller.target().present(&mut std::io::stdout())?;
            }
            result
        }
        Commands::Signup { activity, email } => {
            let mut controller = new_controller(client(&config)?, &config);
            let result = run_action(&mut controller, ActionRequest::signup(activity, email)).await;
            controller.target().present(&mut std::io::stdout())?;
            result
        }
        Commands::Unregister { activity, email } => {
            let mut controller = new_controller(client(&config)?, &config);
            let result =
                run_action(&mut controller, ActionRequest::unregister(activity, email)).await;
            controller.target().present(&mut std::io::stdout())?;
            result
        }
    }
}

fn client(config: &BoardConfig) -> Result<ActivitiesClient<ReqwestTransport>> {
    Ok(ActivitiesClient::new(
        ReqwestTransport::new()?,
        config.api_base_url.clone(),
    ))
}
