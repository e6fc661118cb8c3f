use std::fmt::Display;

/// Lifecycle of a one-shot fetch backing a view.
///
/// `Loading` is the only non-terminal state. Once `Loaded` or `Failed` is
/// reached, further results are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    /// Maps a fetch result onto a terminal state, keeping only the error's message.
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    /// Applies a fetch result. Only `Loading` transitions; terminal states are kept.
    #[must_use]
    pub fn resolve<E: Display>(self, result: Result<T, E>) -> Self {
        match self {
            Self::Loading => Self::from_result(result),
            terminal => terminal,
        }
    }

    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            Self::Loading => LoadState::Loading,
            Self::Loaded(value) => LoadState::Loaded(f(value)),
            Self::Failed(message) => LoadState::Failed(message),
        }
    }
}
