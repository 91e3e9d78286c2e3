//! Full-page loading overlay shown while a search form submits.

use crate::constants::{HIDDEN_CLASS, LOADING_SCREEN_ID};
use crate::dom;
use web_sys::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    FormSubmitted,
    /// `persisted` is true when the page came back from the back-forward cache
    PageShow { persisted: bool },
}

impl PageEvent {
    /// Overlay visibility after this event, `None` leaves it as is
    #[must_use]
    pub fn visibility(self) -> Option<bool> {
        match self {
            Self::FormSubmitted => Some(true),
            Self::PageShow { persisted: true } => Some(false),
            Self::PageShow { persisted: false } => None,
        }
    }
}

pub struct LoadingScreen(Element);

impl LoadingScreen {
    #[must_use]
    pub fn find() -> Option<Self> {
        dom::element_by_id(LOADING_SCREEN_ID).map(Self)
    }

    pub fn apply(&self, event: PageEvent) {
        if let Some(visible) = event.visibility() {
            dom::set_class(&self.0, HIDDEN_CLASS, !visible);
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.0.class_list().contains(HIDDEN_CLASS)
    }
}

/// Reveal the overlay whenever any form on the page submits
///
/// Returns the number of forms watched.
pub fn install_submit_listeners() -> usize {
    let forms = dom::query_all("form");
    for form in &forms {
        dom::listen(form, "submit", |_: web_sys::Event| {
            if let Some(screen) = LoadingScreen::find() {
                screen.apply(PageEvent::FormSubmitted);
            }
        });
    }
    forms.len()
}

/// Hide the overlay when the page is restored from the back-forward cache
///
/// Otherwise a page left mid-submit would come back still covered.
pub fn install_pageshow_listener() {
    let Some(window) = web_sys::window() else {
        return;
    };
    dom::listen(&window, "pageshow", |ev: web_sys::PageTransitionEvent| {
        let event = PageEvent::PageShow {
            persisted: ev.persisted(),
        };
        if let Some(screen) = LoadingScreen::find() {
            screen.apply(event);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_shows_overlay() {
        assert_eq!(PageEvent::FormSubmitted.visibility(), Some(true));
    }

    #[test]
    fn test_restored_page_hides_overlay() {
        assert_eq!(PageEvent::PageShow { persisted: true }.visibility(), Some(false));
    }

    #[test]
    fn test_fresh_page_show_leaves_overlay() {
        assert_eq!(PageEvent::PageShow { persisted: false }.visibility(), None);
    }
}
