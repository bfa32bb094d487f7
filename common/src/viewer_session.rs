//! A viewing session: one catalog, one state, and the observers that redraw it.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::ViewerError;
use crate::viewer_action::{Transition, ViewerAction};
use crate::viewer_state::ViewerState;
use crate::viewer_view::{DisplayFallback, ViewerView};

/// Notified synchronously after every transition that changed the state.
pub trait ViewerObserver {
    fn state_changed(&mut self, state: &ViewerState, view: &ViewerView);
}

impl<F> ViewerObserver for F
where
    F: FnMut(&ViewerState, &ViewerView),
{
    fn state_changed(&mut self, state: &ViewerState, view: &ViewerView) {
        self(state, view)
    }
}

pub struct ViewerSession {
    catalog: Arc<Catalog>,
    fallback: DisplayFallback,
    state: ViewerState,
    observers: Vec<Box<dyn ViewerObserver>>,
}

impl ViewerSession {
    pub fn new(catalog: Arc<Catalog>, fallback: DisplayFallback) -> Self {
        Self {
            catalog,
            fallback,
            state: ViewerState::new(),
            observers: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn view(&self) -> ViewerView {
        self.state.view(&self.catalog, &self.fallback)
    }

    pub fn subscribe(&mut self, observer: impl ViewerObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Applies `action`. Observers only hear about transitions that changed something;
    /// rejected actions leave the state and the observers untouched.
    pub fn dispatch(&mut self, action: ViewerAction) -> Result<Transition, ViewerError> {
        let transition = self.state.apply(&self.catalog, action)?;
        if transition.is_changed() && !self.observers.is_empty() {
            let view = self.view();
            for observer in self.observers.iter_mut() {
                observer.state_changed(&self.state, &view);
            }
        }
        Ok(transition)
    }
}

impl std::fmt::Debug for ViewerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerSession")
            .field("state", &self.state)
            .field("fallback", &self.fallback)
            .field("observers", &self.observers.len())
            .finish()
    }
}
