use campaign_core::LoadState;
use dioxus::prelude::*;

/// Reads a one-shot fetch resource as a [`LoadState`].
///
/// The resource yields `None` for an activation that was cancelled; such a
/// result is never committed and the view keeps showing `Loading`.
#[must_use]
pub fn load_state_from_resource<T: Clone>(
    resource: Resource<Option<LoadState<T>>>,
) -> LoadState<T> {
    match resource.state().cloned() {
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Some(state)) => state.clone(),
            Some(None) | None => LoadState::Loading,
        },
        UseResourceState::Pending | UseResourceState::Paused | UseResourceState::Stopped => {
            LoadState::Loading
        }
    }
}
