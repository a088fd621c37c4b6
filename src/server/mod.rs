pub mod api;

use crate::agent::RelayAgent;
use crate::cli::Args;
use std::error::Error;
use std::sync::Arc;
use log::info;

pub struct Server {
    addr: String,
    agent: Arc<RelayAgent>,
    args: Args,
}

impl Server {
    pub fn new(addr: String, agent: Arc<RelayAgent>, args: Args) -> Self {
        Self { addr, agent, args }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = api::build_router(
            self.agent.clone(),
            &self.args.pages_dir,
            &self.args.static_dir
        );

        let listener = tokio::net::TcpListener
            ::bind(&self.addr).await
            .map_err(|e| format!("Failed to bind server to {}: {}", self.addr, e))?;
        info!("Starting HTTP server on: http://{}", self.addr);

        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}
