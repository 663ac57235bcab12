use std::rc::Rc;

pub mod use_comparison;
pub mod use_cuisine_distribution;
pub mod use_macronutrients;
pub mod use_overview;
pub mod use_preferences;
pub mod use_theme;
pub mod use_top_recipes;

/// Lifecycle of one fetched resource. Every resource owns its own state,
/// so an in-flight request on one resource cannot clear or clobber another.
#[derive(Clone, PartialEq, Debug)]
pub enum DataState<T> {
    Idle,
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> DataState<T> {
    /// Returns true while the first load is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Idle | DataState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error message if the resource never loaded
    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(message) => Some(message),
            _ => None,
        }
    }
}
