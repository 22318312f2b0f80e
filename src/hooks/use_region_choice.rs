use gloo_storage::Storage;
use yew::prelude::*;

use crate::config::Config;

/// Handle returned by `use_region_choice` hook
#[derive(Clone, PartialEq)]
pub struct RegionChoiceHandle {
    pub code: String,
    pub set_code: Callback<String>,
}

/// Custom hook for the selected region code with localStorage persistence.
/// The stored code is a hint only; callers must check it against the region
/// list actually fetched this session.
#[hook]
pub fn use_region_choice() -> RegionChoiceHandle {
    // Load the last choice from localStorage, fallback to unselected
    let code = use_state(|| load_region_choice().unwrap_or_default());

    // Effect: Persist choice to localStorage on change
    {
        let code_value = (*code).clone();
        use_effect_with(code_value, move |code| {
            save_region_choice(code);
            || ()
        });
    }

    // Set region callback
    let set_code = {
        let code = code.clone();
        Callback::from(move |new_code| code.set(new_code))
    };

    RegionChoiceHandle {
        code: (*code).clone(),
        set_code,
    }
}

/// Load region choice from localStorage
fn load_region_choice() -> Option<String> {
    gloo_storage::LocalStorage::get(Config::REGION_STORAGE_KEY).ok()
}

/// Save region choice to localStorage
fn save_region_choice(code: &str) {
    if code.is_empty() {
        return;
    }
    if let Err(e) = gloo_storage::LocalStorage::set(Config::REGION_STORAGE_KEY, code) {
        web_sys::console::warn_1(&format!("Failed to save region: {e:?}").into());
    }
}
