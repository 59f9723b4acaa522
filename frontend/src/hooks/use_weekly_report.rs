use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::fence::FetchFence;
use crate::services::logging::Logger;
use crate::state::{Action, AppState};

#[derive(Clone, PartialEq)]
pub struct UseWeeklyReportActions {
    /// Fetch the weekly report for the given parent id.
    pub refresh: Callback<String>,
}

/// Loads the per-parent weekly activity report. Only ever invoked for
/// parent-role viewers; the store clears report state for everyone else.
#[hook]
pub fn use_weekly_report(
    api_client: &ApiClient,
    store: UseReducerDispatcher<AppState>,
) -> UseWeeklyReportActions {
    let fence = use_mut_ref(FetchFence::new);

    let refresh = {
        let api_client = api_client.clone();
        let store = store.clone();
        let fence = fence.clone();

        use_callback((), move |parent_id: String, _| {
            let api_client = api_client.clone();
            let store = store.clone();
            let fence = fence.clone();
            let token = fence.borrow().issue();

            spawn_local(async move {
                let result = api_client.weekly_report(&parent_id).await;
                if !fence.borrow().is_current(token) {
                    return;
                }
                match result {
                    Ok(report) => {
                        store.dispatch(Action::ReportLoaded(report));
                    }
                    Err(error) => {
                        Logger::error("reports", &error);
                        store.dispatch(Action::FetchFailed(
                            "Could not load the weekly report".to_string(),
                        ));
                    }
                }
            });
        })
    };

    UseWeeklyReportActions { refresh }
}
