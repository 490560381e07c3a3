//! Toasts as plain DOM nodes, for pages that are not rendered by Dioxus.

use std::cell::RefCell;
use std::collections::HashMap;

use web_sys::{Document, Element};

use crate::toast::{NotificationSink, Toast, ToastId, ToastPhase, CONTAINER_ID, SHOW_CLASS};

/// Sink writing into `<div id="toast-container">` under `document.body`.
///
/// The container is looked up (or created) on first use and reused while it
/// stays attached to the document.
#[derive(Debug, Default)]
pub struct DomSink {
    container: RefCell<Option<Element>>,
    elements: RefCell<HashMap<ToastId, Element>>,
}

impl DomSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn container(&self, document: &Document) -> Option<Element> {
        if let Some(existing) = self.container.borrow().as_ref() {
            if existing.is_connected() {
                return Some(existing.clone());
            }
        }

        let container = match document.get_element_by_id(CONTAINER_ID) {
            Some(found) => found,
            None => {
                let created = document.create_element("div").ok()?;
                created.set_id(CONTAINER_ID);
                document.body()?.append_child(&created).ok()?;
                created
            }
        };
        *self.container.borrow_mut() = Some(container.clone());
        Some(container)
    }

    fn live_element(&self, id: ToastId) -> Option<Element> {
        let elements = self.elements.borrow();
        let element = elements.get(&id)?;
        element.is_connected().then(|| element.clone())
    }
}

impl NotificationSink for DomSink {
    fn append(&self, toast: &Toast) {
        let Some(document) = Self::document() else {
            tracing::warn!("No document, dropping toast: {}", toast.message);
            return;
        };
        let Some(container) = self.container(&document) else {
            tracing::warn!("Cannot create #{}", CONTAINER_ID);
            return;
        };
        let Ok(element) = document.create_element("div") else {
            return;
        };
        element.set_class_name(&toast.class_name());
        element.set_text_content(Some(&toast.message));
        if container.append_child(&element).is_err() {
            tracing::warn!("Cannot append {}", toast.id);
            return;
        }
        self.elements.borrow_mut().insert(toast.id, element);
    }

    fn update(&self, id: ToastId, phase: ToastPhase) -> bool {
        let Some(element) = self.live_element(id) else {
            return false;
        };
        let classes = element.class_list();
        let result = match phase {
            ToastPhase::Shown => classes.add_1(SHOW_CLASS),
            ToastPhase::Hiding | ToastPhase::Created => classes.remove_1(SHOW_CLASS),
            ToastPhase::Removed => return self.remove(id),
        };
        result.is_ok()
    }

    fn remove(&self, id: ToastId) -> bool {
        let Some(element) = self.elements.borrow_mut().remove(&id) else {
            return false;
        };
        if !element.is_connected() {
            return false;
        }
        element.remove();
        true
    }
}
