mod console_prompter;
mod duckduckgo_search_provider;
mod reqwest_link_checker;
mod reqwest_manual_downloader;
mod system_browser_opener;

pub use console_prompter::ConsolePrompter;
pub use duckduckgo_search_provider::DuckDuckGoSearchProvider;
pub use reqwest_link_checker::ReqwestLinkChecker;
pub use reqwest_manual_downloader::ReqwestManualDownloader;
pub use system_browser_opener::SystemBrowserOpener;
