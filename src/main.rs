use clap::Parser;

use roster_rs::cli::{self, Cli, Execution};
use roster_rs::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (settings, environment) = cli::load_and_merge_config(&cli)?;

    match cli::execute_command(&cli, &settings)? {
        Execution::StartServer => {
            cli::init_logger_from_settings(&settings)?;
            Server::new(settings, environment).run().await
        }
        Execution::Exit => Ok(()),
    }
}
