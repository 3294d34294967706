use clap::{Parser, Subcommand};

use instagram_proxy_lib::{commands, modules};

#[derive(Parser)]
#[command(name = "instagram-proxy", about = "Instagram photo proxy for the on.voyage website")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve GET /api/instagram (default)
    Serve {
        /// Override PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Renew the long-lived access token once and exit
    Refresh,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let dotenv_path = modules::load_dotenv();
    modules::init_logger();
    if let Some(path) = dotenv_path {
        tracing::info!("Loaded environment from {:?}", path);
    }

    let mut config = modules::load_proxy_config()?;

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            commands::start_proxy_service(config).await
        }
        Commands::Refresh => {
            commands::refresh_token_once(config).await?;
            Ok(())
        }
    }
}
