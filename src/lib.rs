pub mod agent;
pub mod cli;
pub mod llm;
pub mod models;
pub mod prompt;
pub mod server;
pub mod session;

use agent::RelayAgent;
use cli::Args;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("History Limit: {}", args.history_limit);
    info!("Pages Dir: {}", args.pages_dir);
    info!("Static Dir: {}", args.static_dir);
    info!("-------------------------");

    let agent = Arc::new(RelayAgent::new(&args)?);
    let addr = args.server_addr.clone();
    let server = Server::new(addr, agent, args.clone());
    server.run().await?;

    Ok(())
}
