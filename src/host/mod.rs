//! Host Platform Integration Layer
//!
//! The launcher never talks to the OS directly. Everything it needs from the
//! device comes through [`HostPlatform`]:
//! - URL scheme probing ("can any app open `waze://`?")
//! - URL dispatch, in a legacy synchronous and a modern asynchronous form
//! - The host bundle display name, used as Moovit's partner id

mod callback;
mod stub;

pub use callback::CallbackHost;
pub use stub::StubHost;

use std::collections::HashMap;

/// Options forwarded to the asynchronous open call
pub type OpenOptions = HashMap<String, String>;

/// Invoked by the host once an asynchronous open finished
pub type CompletionHandler = Box<dyn FnOnce(bool) + Send>;

/// Capabilities the launcher requires from its host
pub trait HostPlatform: Send + Sync {
    /// Whether some installed app can handle `url` (a scheme prefix or full URL)
    fn can_open_url(&self, url: &str) -> bool;

    /// Open `url` and report whether the platform accepted it
    fn open_url(&self, url: &str) -> bool;

    /// Whether [`HostPlatform::open_url_async`] is available.
    ///
    /// When it is, the launcher prefers it over `open_url`.
    fn supports_async_open(&self) -> bool {
        false
    }

    /// Fire-and-forget open; `on_complete` may be called later from any thread
    fn open_url_async(
        &self,
        _url: &str,
        _options: &OpenOptions,
        _on_complete: Option<CompletionHandler>,
    ) {
    }

    /// Display name of the host application bundle
    fn bundle_display_name(&self) -> String {
        String::new()
    }
}

impl<T: HostPlatform + ?Sized> HostPlatform for std::sync::Arc<T> {
    fn can_open_url(&self, url: &str) -> bool {
        (**self).can_open_url(url)
    }

    fn open_url(&self, url: &str) -> bool {
        (**self).open_url(url)
    }

    fn supports_async_open(&self) -> bool {
        (**self).supports_async_open()
    }

    fn open_url_async(
        &self,
        url: &str,
        options: &OpenOptions,
        on_complete: Option<CompletionHandler>,
    ) {
        (**self).open_url_async(url, options, on_complete)
    }

    fn bundle_display_name(&self) -> String {
        (**self).bundle_display_name()
    }
}
