mod browser_opener;
mod link_checker;
mod manual_downloader;
mod search_provider;
mod user_prompter;

pub use browser_opener::BrowserOpener;
pub use link_checker::LinkChecker;
pub use manual_downloader::ManualDownloader;
pub use search_provider::ManualSearchProvider;
pub use user_prompter::UserPrompter;
