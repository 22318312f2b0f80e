use std::rc::Rc;
use yew::prelude::*;

use crate::models::simulation::Region;
use crate::services::graphql::fetch_regions;
use wasm_bindgen_futures::spawn_local;

/// Region-list loading state. `Error` is terminal for the session: the form
/// is never rendered and no retry is offered.
#[derive(Clone, PartialEq, Debug)]
pub enum RegionsState {
    Loading,
    Loaded(Rc<Vec<Region>>),
    Error(String),
}

impl RegionsState {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, RegionsState::Loading)
    }

    /// Returns the region list if it is loaded
    pub fn data(&self) -> Option<&Rc<Vec<Region>>> {
        match self {
            RegionsState::Loaded(regions) => Some(regions),
            _ => None,
        }
    }
}

#[hook]
pub fn use_regions() -> UseStateHandle<RegionsState> {
    let state = use_state(|| RegionsState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |()| {
            spawn_local(async move {
                match fetch_regions().await {
                    Ok(regions) => state.set(RegionsState::Loaded(Rc::new(regions))),
                    Err(e) => {
                        gloo::console::error!(format!("Region fetch failed: {e}"));
                        state.set(RegionsState::Error(e.to_string()));
                    }
                }
            });

            || () // Cleanup
        });
    }

    state
}
