use anyhow::Result;

pub trait BrowserOpener: Send + Sync {
    fn open_url(&self, url: &str) -> Result<()>;
}
