use anyhow::Result;

use crate::core::interfaces::adapters::BrowserOpener;

/// Opens a URL with the platform default browser.
pub struct SystemBrowserOpener;

impl SystemBrowserOpener {
    pub fn new() -> Self {
        Self
    }
}

impl BrowserOpener for SystemBrowserOpener {
    fn open_url(&self, url: &str) -> Result<()> {
        log::info!("[BROWSER] Opening link in system browser: {}", url);
        open::that(url)?;
        Ok(())
    }
}
