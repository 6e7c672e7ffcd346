//! Closure-backed host
//!
//! Lets an embedding application wire its platform calls in as plain
//! functions instead of implementing [`HostPlatform`] itself.

use super::{CompletionHandler, HostPlatform, OpenOptions};

type Probe = Box<dyn Fn(&str) -> bool + Send + Sync>;
type AsyncOpen = Box<dyn Fn(&str, &OpenOptions, Option<CompletionHandler>) + Send + Sync>;

/// Host built from individual capability functions
pub struct CallbackHost {
    can_open: Probe,
    open: Probe,
    open_async: Option<AsyncOpen>,
    bundle_name: String,
}

impl CallbackHost {
    /// Create a host from a scheme probe and a synchronous open function
    pub fn new<C, O>(can_open: C, open: O) -> Self
    where
        C: Fn(&str) -> bool + Send + Sync + 'static,
        O: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            can_open: Box::new(can_open),
            open: Box::new(open),
            open_async: None,
            bundle_name: String::new(),
        }
    }

    /// Provide the asynchronous open form; the launcher will prefer it
    pub fn with_async_open<A>(mut self, open_async: A) -> Self
    where
        A: Fn(&str, &OpenOptions, Option<CompletionHandler>) + Send + Sync + 'static,
    {
        self.open_async = Some(Box::new(open_async));
        self
    }

    /// Set the bundle display name reported to the launcher
    pub fn with_bundle_name(mut self, name: impl Into<String>) -> Self {
        self.bundle_name = name.into();
        self
    }
}

impl std::fmt::Debug for CallbackHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackHost")
            .field("async_open", &self.open_async.is_some())
            .field("bundle_name", &self.bundle_name)
            .finish()
    }
}

impl HostPlatform for CallbackHost {
    fn can_open_url(&self, url: &str) -> bool {
        (self.can_open)(url)
    }

    fn open_url(&self, url: &str) -> bool {
        (self.open)(url)
    }

    fn supports_async_open(&self) -> bool {
        self.open_async.is_some()
    }

    fn open_url_async(
        &self,
        url: &str,
        options: &OpenOptions,
        on_complete: Option<CompletionHandler>,
    ) {
        match &self.open_async {
            Some(open_async) => open_async(url, options, on_complete),
            None => {
                let opened = (self.open)(url);
                if let Some(done) = on_complete {
                    done(opened);
                }
            }
        }
    }

    fn bundle_display_name(&self) -> String {
        self.bundle_name.clone()
    }
}
