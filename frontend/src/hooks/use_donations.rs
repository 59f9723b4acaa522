use shared::DonationScope;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::fence::FetchFence;
use crate::services::logging::Logger;
use crate::state::{Action, AppState};

#[derive(Clone, PartialEq)]
pub struct UseDonationsActions {
    /// Fetch the donation list and summary for the given scope.
    pub refresh: Callback<DonationScope>,
}

/// Loads donations and the aggregate summary, donor-scoped when the viewer is
/// a donor.
#[hook]
pub fn use_donations(
    api_client: &ApiClient,
    store: UseReducerDispatcher<AppState>,
) -> UseDonationsActions {
    let fence = use_mut_ref(FetchFence::new);

    let refresh = {
        let api_client = api_client.clone();
        let store = store.clone();
        let fence = fence.clone();

        use_callback((), move |scope: DonationScope, _| {
            let api_client = api_client.clone();
            let store = store.clone();
            let fence = fence.clone();
            let token = fence.borrow().issue();

            spawn_local(async move {
                let donations = api_client.list_donations(&scope).await;
                let summary = api_client.donation_summary(&scope).await;
                if !fence.borrow().is_current(token) {
                    return;
                }
                match (donations, summary) {
                    (Ok(donations), Ok(summary)) => {
                        store.dispatch(Action::DonationsLoaded { donations, summary });
                    }
                    (donations, summary) => {
                        for error in [donations.err(), summary.err()].into_iter().flatten() {
                            Logger::error("donations", &error);
                        }
                        store.dispatch(Action::FetchFailed(
                            "Could not load donations".to_string(),
                        ));
                    }
                }
            });
        })
    };

    UseDonationsActions { refresh }
}
