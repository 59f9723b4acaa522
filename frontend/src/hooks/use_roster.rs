use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::fence::FetchFence;
use crate::services::logging::Logger;
use crate::state::{Action, AppState};

#[derive(Clone, PartialEq)]
pub struct UseRosterActions {
    pub refresh: Callback<()>,
}

/// Loads the three core entity lists (children, users, sessions). The initial
/// load runs on mount; `refresh` re-runs it after any mutation. The three
/// fetches run concurrently and their results are applied together.
#[hook]
pub fn use_roster(api_client: &ApiClient, store: UseReducerDispatcher<AppState>) -> UseRosterActions {
    let fence = use_mut_ref(FetchFence::new);

    let refresh = {
        let api_client = api_client.clone();
        let store = store.clone();
        let fence = fence.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let store = store.clone();
            let fence = fence.clone();
            let token = fence.borrow().issue();

            spawn_local(async move {
                let (children, users, sessions) = futures::join!(
                    api_client.list_children(),
                    api_client.list_users(),
                    api_client.list_sessions(),
                );
                if !fence.borrow().is_current(token) {
                    return;
                }
                match (children, users, sessions) {
                    (Ok(children), Ok(users), Ok(sessions)) => {
                        Logger::info(
                            "roster",
                            &format!(
                                "Loaded {} children, {} users, {} sessions",
                                children.len(),
                                users.len(),
                                sessions.len()
                            ),
                        );
                        store.dispatch(Action::RosterLoaded {
                            children,
                            users,
                            sessions,
                        });
                    }
                    (children, users, sessions) => {
                        for error in [children.err(), users.err(), sessions.err()]
                            .into_iter()
                            .flatten()
                        {
                            Logger::error("roster", &error);
                        }
                        store.dispatch(Action::FetchFailed(
                            "Could not load the latest center data".to_string(),
                        ));
                    }
                }
            });
        })
    };

    // Initial load on mount.
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    UseRosterActions { refresh }
}
