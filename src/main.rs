mod adapters;
mod core;
mod global_constants;

use std::sync::Arc;

use crate::adapters::{
    ConsolePrompter, DuckDuckGoSearchProvider, ReqwestLinkChecker, ReqwestManualDownloader,
    SystemBrowserOpener,
};
use crate::core::models::FinderSettings;
use crate::core::orchestrators::ManualFinderOrchestrator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    let settings = FinderSettings::load().unwrap_or_else(|error| {
        log::warn!("[MAIN] Failed to load settings: {}, using defaults", error);
        FinderSettings::default()
    });

    let search_provider = Arc::new(DuckDuckGoSearchProvider::build(&settings)?);
    let link_checker = Arc::new(ReqwestLinkChecker::build(&settings)?);
    let downloader = Arc::new(ReqwestManualDownloader::build(&settings)?);
    let browser_opener = Arc::new(SystemBrowserOpener::new());
    let prompter = Arc::new(ConsolePrompter::new());

    let orchestrator = ManualFinderOrchestrator::build(
        search_provider,
        link_checker,
        downloader,
        browser_opener,
        prompter,
        settings,
    );

    let outcome = orchestrator.find_manual(None, None).await?;

    log::info!("[MAIN] Finder finished: {:?}", outcome);
    println!("{}", outcome);

    Ok(())
}
