//! Render targets: the view regions presenters draw into.
//!
//! Targets are injected into presenters at construction. A host UI adapts
//! its own surfaces behind [`RenderTarget`]; [`Region`] is the in-memory
//! implementation used by default and in tests.

use std::cell::RefCell;
use std::rc::Rc;

/// A view region that accepts rendered markup.
pub trait RenderTarget {
    /// Region name, for logging.
    fn name(&self) -> &str;

    /// Replace the region's content.
    fn replace(&self, markup: String);

    /// Empty the region.
    fn clear(&self);
}

#[derive(Debug, Default)]
struct RegionState {
    markup: Option<String>,
    mutations: u64,
}

/// Shared in-memory region. Clones refer to the same region.
#[derive(Debug, Clone)]
pub struct Region {
    name: Rc<str>,
    state: Rc<RefCell<RegionState>>,
}

impl Region {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: Rc::from(name.as_ref()),
            state: Rc::default(),
        }
    }

    /// Current content, if any.
    pub fn markup(&self) -> Option<String> {
        self.state.borrow().markup.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().markup.is_none()
    }

    /// How many times the region has been written or cleared.
    pub fn mutations(&self) -> u64 {
        self.state.borrow().mutations
    }
}

impl RenderTarget for Region {
    fn name(&self) -> &str {
        &self.name
    }

    fn replace(&self, markup: String) {
        let mut state = self.state.borrow_mut();
        state.markup = Some(markup);
        state.mutations += 1;
    }

    fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.markup = None;
        state.mutations += 1;
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for Rc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn replace(&self, markup: String) {
        (**self).replace(markup)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn replace(&self, markup: String) {
        (**self).replace(markup)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let region = Region::new("summary");
        let handle = region.clone();
        handle.replace("<p>hi</p>".to_string());
        assert_eq!(region.markup().as_deref(), Some("<p>hi</p>"));
        assert_eq!(region.mutations(), 1);
        assert_eq!(region.name(), "summary");
    }

    #[test]
    fn test_clear() {
        let region = Region::new("detail");
        region.replace("x".to_string());
        region.clear();
        assert!(region.is_empty());
        assert_eq!(region.mutations(), 2);
    }
}
