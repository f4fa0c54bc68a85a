use std::collections::VecDeque;

use tracing::debug;

use crate::core::{
    Puppy,
    PuppyError,
};

pub const LIST_PATH: &str = "/";
pub const NEW_PATH: &str = "/new";
pub const EDIT_PATH: &str = "/edit";

/// A request to move to another view, optionally carrying the puppy the
/// target view should start from.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationIntent {
    pub path: String,
    pub state: Option<Puppy>,
}

impl NavigationIntent {
    pub fn to(path: impl Into<String>) -> Self {
        Self { path: path.into(), state: None }
    }

    pub fn edit(puppy: Puppy) -> Self {
        Self { path: EDIT_PATH.to_string(), state: Some(puppy) }
    }

    pub fn list() -> Self {
        Self::to(LIST_PATH)
    }
}

pub trait Navigator {
    fn navigate(&mut self, intent: NavigationIntent);
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Route {
    #[default]
    List,
    New,
    Edit(Puppy),
}

impl Route {
    fn from_intent(intent: NavigationIntent) -> Result<Self, PuppyError> {
        let NavigationIntent { path, state } = intent;
        match path.as_str() {
            LIST_PATH => Ok(Route::List),
            NEW_PATH => Ok(Route::New),
            EDIT_PATH => state.map(Route::Edit).ok_or(PuppyError::MissingRouteState(path.clone())),
            _ => Err(PuppyError::UnknownRoute(path.clone())),
        }
    }
}

/// Holds the current route. Intents issued during a frame are queued and
/// applied by `resolve` once the frame's widgets are done.
#[derive(Debug, Default)]
pub struct Router {
    current: Route,
    pending: VecDeque<NavigationIntent>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Applies queued intents in order. A bad intent is reported and skipped,
    /// leaving the route at whatever the previous good intent set.
    pub fn resolve(&mut self) -> Vec<PuppyError> {
        let mut errors = Vec::new();
        while let Some(intent) = self.pending.pop_front() {
            match Route::from_intent(intent) {
                Ok(route) => self.current = route,
                Err(e) => errors.push(e),
            }
        }
        errors
    }
}

impl Navigator for Router {
    fn navigate(&mut self, intent: NavigationIntent) {
        debug!(path = %intent.path, with_state = intent.state.is_some(), "Navigation requested");
        self.pending.push_back(intent);
    }
}
