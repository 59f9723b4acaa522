use chrono::Local;
use shared::{Child, Donation, DonationDraft, DonationSummary, Role};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::child_first_name;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct DonorViewProps {
    pub role: Option<Role>,
    /// Full child list for the optional earmark picker.
    pub child_list: Vec<Child>,
    pub donations: Vec<Donation>,
    pub summary: DonationSummary,
    /// Current user's id, attributed as the donor on new donations.
    pub donor_id: Option<String>,
    /// Emitted after a successful donation; the owner re-fetches the list and
    /// summary.
    pub on_created: Callback<()>,
}

/// Impact summary, donation form for donors/admins, and the donation list.
#[function_component(DonorView)]
pub fn donor_view(props: &DonorViewProps) -> Html {
    let draft = use_state(DonationDraft::default);
    let is_submitting = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);
    let api_client = ApiClient::new();

    let on_amount_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(DonationDraft {
                amount: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_message_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(DonationDraft {
                message: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_child_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.set(DonationDraft {
                child_id: select.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let form_error = form_error.clone();
        let on_created = props.on_created.clone();
        let donor_id = props.donor_id.clone();
        let api_client = api_client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let draft = draft.clone();
            let is_submitting = is_submitting.clone();
            let form_error = form_error.clone();
            let on_created = on_created.clone();
            let donor_id = donor_id.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                is_submitting.set(true);
                form_error.set(None);

                let today = Local::now().format("%Y-%m-%d").to_string();
                let request = draft.to_request(donor_id, today);

                match api_client.create_donation(request).await {
                    Ok(()) => {
                        draft.set(DonationDraft::default());
                        is_submitting.set(false);
                        on_created.emit(());
                    }
                    Err(error) => {
                        Logger::error("donations", &error);
                        is_submitting.set(false);
                        form_error.set(Some(format!("Failed to record donation: {}", error)));
                    }
                }
            });
        })
    };

    let can_donate = matches!(props.role, Some(Role::Donor | Role::Admin));

    let donation_form = if can_donate {
        html! {
            <>
                <h3>{"Make a Donation"}</h3>
                {if let Some(error) = (*form_error).clone() {
                    html! { <div class="form-message error">{error}</div> }
                } else {
                    html! {}
                }}
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="donation-amount">{"Amount"}</label>
                        <input
                            id="donation-amount"
                            type="number"
                            step="0.01"
                            value={draft.amount.clone()}
                            onchange={on_amount_change}
                            disabled={*is_submitting}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="donation-message">{"Message (optional)"}</label>
                        <input
                            id="donation-message"
                            type="text"
                            value={draft.message.clone()}
                            onchange={on_message_change}
                            disabled={*is_submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label for="donation-child">{"Support a child (optional)"}</label>
                        <select id="donation-child" onchange={on_child_change} disabled={*is_submitting}>
                            <option value="" selected={draft.child_id.is_empty()}>{"None"}</option>
                            {for props.child_list.iter().map(|child| {
                                html! {
                                    <option value={child.id.clone()} selected={draft.child_id == child.id}>
                                        {child.full_name()}
                                    </option>
                                }
                            })}
                        </select>
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                        {if *is_submitting { "Donating..." } else { "Donate" }}
                    </button>
                </form>
            </>
        }
    } else {
        html! {}
    };

    html! {
        <section class="two-column">
            <div class="card">
                <h2>{"Impact Summary"}</h2>
                <p class="stat-value">{format!("${:.2}", props.summary.total)}</p>
                <p class="stat-label">{format!("{} donations", props.summary.count)}</p>
                {donation_form}
            </div>
            <div class="card">
                <h2>{"Donations"}</h2>
                <ul class="entity-list">
                    {for props.donations.iter().map(|donation| {
                        html! {
                            <li>
                                <p class="entity-title">
                                    {format!("${:.2}", donation.amount)}
                                    <span class="entity-date">{format!(" {}", donation.date)}</span>
                                </p>
                                {if let Some(child_id) = donation.child_id.as_ref() {
                                    html! {
                                        <p class="entity-detail">
                                            {format!("For child: {}", child_first_name(&props.child_list, child_id))}
                                        </p>
                                    }
                                } else {
                                    html! {}
                                }}
                                {if let Some(message) = donation.message.as_ref() {
                                    html! { <p class="entity-message">{format!("\u{201c}{}\u{201d}", message)}</p> }
                                } else {
                                    html! {}
                                }}
                            </li>
                        }
                    })}
                </ul>
            </div>
        </section>
    }
}
