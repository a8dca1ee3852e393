//! Path-keyed image cache with at-most-once loading.
//!
//! The first request for a path starts the load; every later request for
//! the same path, whether the load is still pending or already settled,
//! shares that one future. Failures are cached too: a frame that failed is
//! skipped, not retried.

use std::cell::RefCell;
use std::collections::HashMap;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::error::FestError;

/// Something that can turn a URL into a decoded image.
///
/// The browser implementation wraps `HtmlImageElement`; tests use a
/// scripted in-memory source.
pub trait ImageSource {
    /// Handle to a decoded image.
    type Image: Clone + 'static;

    /// Start loading `src`. The returned future must not borrow `self`.
    fn fetch(&self, src: &str) -> LocalBoxFuture<'static, Result<Self::Image, FestError>>;
}

/// A load shared between every requester of the same path.
pub type SharedLoad<I> = Shared<LocalBoxFuture<'static, Result<I, FestError>>>;

/// Image cache owned by one animation controller.
pub struct ImageCache<S: ImageSource> {
    source: S,
    entries: RefCell<HashMap<String, SharedLoad<S::Image>>>,
}

impl<S: ImageSource> ImageCache<S> {
    /// Empty cache over `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Load `src`, reusing the pending or settled load if one exists.
    pub fn load(&self, src: &str) -> SharedLoad<S::Image> {
        let mut entries = self.entries.borrow_mut();
        if let Some(load) = entries.get(src) {
            return load.clone();
        }
        let load = self.source.fetch(src).shared();
        entries.insert(src.to_string(), load.clone());
        load
    }

    /// The decoded image if `src` already loaded successfully.
    pub fn ready(&self, src: &str) -> Option<S::Image> {
        self.entries
            .borrow()
            .get(src)
            .and_then(|load| load.peek().cloned())
            .and_then(Result::ok)
    }

    /// Whether `src` was ever requested.
    pub fn contains(&self, src: &str) -> bool {
        self.entries.borrow().contains_key(src)
    }

    /// Number of distinct paths requested.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// True when nothing was requested yet.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Forget every entry; in-flight loads keep running for their holders.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted image source shared by the cube tests.

    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use futures::future::{FutureExt, LocalBoxFuture};

    use super::ImageSource;
    use crate::error::FestError;

    /// Resolves every path immediately except the ones marked broken.
    #[derive(Clone, Default)]
    pub struct ScriptedSource {
        pub broken: Rc<RefCell<HashSet<String>>>,
        pub requests: Rc<RefCell<Vec<String>>>,
    }

    impl ScriptedSource {
        pub fn failing<I: IntoIterator<Item = String>>(paths: I) -> Self {
            let source = Self::default();
            source.broken.borrow_mut().extend(paths);
            source
        }

        pub fn requested(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl ImageSource for ScriptedSource {
        type Image = String;

        fn fetch(&self, src: &str) -> LocalBoxFuture<'static, Result<String, FestError>> {
            self.requests.borrow_mut().push(src.to_string());
            let outcome = if self.broken.borrow().contains(src) {
                Err(FestError::ImageLoad { path: src.to_string() })
            } else {
                Ok(format!("decoded:{src}"))
            };
            async move { outcome }.boxed_local()
        }
    }
}
