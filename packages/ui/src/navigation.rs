use std::cell::RefCell;
use std::rc::Rc;

/// Sends the page somewhere else.
pub trait Navigator {
    fn navigate(&self, target: &str);
}

/// Navigates by assigning `window.location.href`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn navigate(&self, target: &str) {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(target).is_err() {
                tracing::error!("Failed to navigate to {}", target);
            }
        }
    }
}

/// Records navigation targets instead of following them.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    visits: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &str) {
        tracing::debug!("Navigate to {}", target);
        self.visits.borrow_mut().push(target.to_string());
    }
}
