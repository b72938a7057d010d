use crate::{browser::config::LaunchOptions,
            error::{BrowserError, Result}};
use headless_chrome::{Browser, Element, Tab};
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// Default bound for waits that do not carry an explicit timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Browser session holding one Chrome/Chromium instance and one page.
///
/// Every tool adapter in a run shares the same session, and therefore the same
/// page. Tool calls execute serially; there is no concurrent page mutation.
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// The single page used for the whole run
    tab: Arc<Tab>,

    /// Fixed delay applied after every tool action
    slow_mo: Option<Duration>,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Ignore default arguments to prevent detection by anti-bot services
        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // Keep the browser alive for long agent runs (default idle timeout is 30 seconds)
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));
        launch_opts.sandbox = options.sandbox;

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        let browser = Browser::new(launch_opts).map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| BrowserError::LaunchFailed(format!("Failed to create page: {}", e)))?;

        tab.set_default_timeout(DEFAULT_TIMEOUT);

        log::info!("Browser session started (headless={})", options.headless);

        Ok(Self { browser, tab, slow_mo: options.slow_mo })
    }

    /// Launch a browser with default options
    pub fn new() -> Result<Self> {
        Self::launch(LaunchOptions::default())
    }

    /// The page shared by all tool adapters in this run
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Sleep for the configured slow-mo delay, if any. Called by the tool
    /// registry after each action.
    pub fn pace(&self) {
        if let Some(delay) = self.slow_mo {
            std::thread::sleep(delay);
        }
    }

    /// Navigate the page to a URL
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| BrowserError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        Ok(())
    }

    /// Block until the pending navigation completes or the timeout elapses.
    ///
    /// This must actually wait: returning before the load settles leaves the
    /// next tool call racing the page.
    pub fn wait_for_navigation(&self, timeout: Duration) -> Result<()> {
        self.tab.set_default_timeout(timeout);
        let result = self
            .tab
            .wait_until_navigated()
            .map(|_| ())
            .map_err(|e| BrowserError::NavigationFailed(format!("Navigation did not complete: {}", e)));
        self.tab.set_default_timeout(DEFAULT_TIMEOUT);
        result
    }

    /// Find an element on the page by CSS selector
    pub fn find_element(&self, css_selector: &str) -> Result<Element<'_>> {
        self.tab
            .find_element(css_selector)
            .map_err(|e| BrowserError::ElementNotFound(format!("Element '{}' not found: {}", css_selector, e)))
    }

    /// Wait up to `timeout` for an element to appear, then return it
    pub fn wait_for_element(&self, css_selector: &str, timeout: Duration) -> Result<Element<'_>> {
        self.tab
            .wait_for_element_with_custom_timeout(css_selector, timeout)
            .map_err(|e| {
                BrowserError::ElementNotFound(format!(
                    "Element '{}' did not appear within {:?}: {}",
                    css_selector, timeout, e
                ))
            })
    }

    /// Evaluate JavaScript on the page and return the resulting value, if any
    pub fn evaluate(&self, expression: &str) -> Result<Option<serde_json::Value>> {
        let remote_object = self
            .tab
            .evaluate(expression, false)
            .map_err(|e| BrowserError::EvaluationFailed(e.to_string()))?;

        Ok(remote_object.value)
    }

    /// Current page URL
    pub fn url(&self) -> String {
        self.tab.get_url()
    }

    /// Current page title
    pub fn title(&self) -> Result<String> {
        self.tab
            .get_title()
            .map_err(|e| BrowserError::EvaluationFailed(format!("Failed to read title: {}", e)))
    }

    /// Full HTML content of the page
    pub fn content(&self) -> Result<String> {
        self.tab
            .get_content()
            .map_err(|e| BrowserError::EvaluationFailed(format!("Failed to read page content: {}", e)))
    }

    /// Navigate back in browser history
    pub fn go_back(&self) -> Result<()> {
        let go_back_js = r#"
            (function() {
                window.history.back();
                return true;
            })()
        "#;

        self.tab
            .evaluate(go_back_js, false)
            .map_err(|e| BrowserError::NavigationFailed(format!("Failed to go back: {}", e)))?;

        // Give the history navigation a moment to land
        std::thread::sleep(Duration::from_millis(300));

        Ok(())
    }

    /// Capture a PNG screenshot of the page
    pub fn capture_screenshot(&self) -> Result<Vec<u8>> {
        use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;

        self.tab
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| BrowserError::ScreenshotFailed(e.to_string()))
    }

    /// Close the page and release the automation driver.
    ///
    /// The browser process itself exits when the `Browser` handle is dropped,
    /// so a session that errors out mid-run is still released.
    pub fn close(&self) -> Result<()> {
        self.tab
            .close(true)
            .map_err(|e| BrowserError::NavigationFailed(format!("Failed to close page: {}", e)))?;

        log::info!("Browser session closed");
        Ok(())
    }
}
