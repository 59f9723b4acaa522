use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::fence::FetchFence;
use crate::services::logging::Logger;
use crate::state::{Action, AppState};

#[derive(Clone, PartialEq)]
pub struct UseGoalsActions {
    /// Fetch the goal list for the given child id.
    pub refresh: Callback<String>,
}

/// Loads goals for the selected child. The loaded list is tagged with the
/// child id so the store can drop responses for a child that is no longer
/// selected.
#[hook]
pub fn use_goals(api_client: &ApiClient, store: UseReducerDispatcher<AppState>) -> UseGoalsActions {
    let fence = use_mut_ref(FetchFence::new);

    let refresh = {
        let api_client = api_client.clone();
        let store = store.clone();
        let fence = fence.clone();

        use_callback((), move |child_id: String, _| {
            let api_client = api_client.clone();
            let store = store.clone();
            let fence = fence.clone();
            let token = fence.borrow().issue();

            spawn_local(async move {
                let result = api_client.list_goals(&child_id).await;
                if !fence.borrow().is_current(token) {
                    return;
                }
                match result {
                    Ok(goals) => {
                        store.dispatch(Action::GoalsLoaded { child_id, goals });
                    }
                    Err(error) => {
                        Logger::error("goals", &error);
                        store.dispatch(Action::FetchFailed("Could not load goals".to_string()));
                    }
                }
            });
        })
    };

    UseGoalsActions { refresh }
}
