use shared::{Child, ChildDraft, Role};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ChildrenViewProps {
    pub role: Option<Role>,
    /// Children already filtered to what the viewer may see.
    pub child_list: Vec<Child>,
    /// Emitted after a successful create; the owner reloads the roster and
    /// stays on this view.
    pub on_created: Callback<()>,
}

/// Children roster plus the creation form for admins and therapists.
#[function_component(ChildrenView)]
pub fn children_view(props: &ChildrenViewProps) -> Html {
    let draft = use_state(ChildDraft::default);
    let is_submitting = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);
    let api_client = ApiClient::new();

    let on_first_name_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ChildDraft {
                first_name: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_last_name_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ChildDraft {
                last_name: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_diagnosis_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ChildDraft {
                diagnosis: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let form_error = form_error.clone();
        let on_created = props.on_created.clone();
        let api_client = api_client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if !draft.is_valid() {
                form_error.set(Some("First and last name are required".to_string()));
                return;
            }

            let draft = draft.clone();
            let is_submitting = is_submitting.clone();
            let form_error = form_error.clone();
            let on_created = on_created.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                is_submitting.set(true);
                form_error.set(None);

                match api_client.create_child(draft.to_request()).await {
                    Ok(()) => {
                        draft.set(ChildDraft::default());
                        is_submitting.set(false);
                        on_created.emit(());
                    }
                    Err(error) => {
                        Logger::error("children", &error);
                        is_submitting.set(false);
                        form_error.set(Some(format!("Failed to create child: {}", error)));
                    }
                }
            });
        })
    };

    let can_create = matches!(props.role, Some(Role::Admin | Role::Therapist));

    let form = if can_create {
        html! {
            <div class="card">
                <h2>{"Add Child"}</h2>
                {if let Some(error) = (*form_error).clone() {
                    html! { <div class="form-message error">{error}</div> }
                } else {
                    html! {}
                }}
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="child-first-name">{"First name"}</label>
                        <input
                            id="child-first-name"
                            type="text"
                            value={draft.first_name.clone()}
                            onchange={on_first_name_change}
                            disabled={*is_submitting}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="child-last-name">{"Last name"}</label>
                        <input
                            id="child-last-name"
                            type="text"
                            value={draft.last_name.clone()}
                            onchange={on_last_name_change}
                            disabled={*is_submitting}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="child-diagnosis">{"Diagnosis"}</label>
                        <input
                            id="child-diagnosis"
                            type="text"
                            value={draft.diagnosis.clone()}
                            onchange={on_diagnosis_change}
                            disabled={*is_submitting}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                        {if *is_submitting { "Saving..." } else { "Save" }}
                    </button>
                </form>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <section class="two-column">
            {form}
            <div class="card">
                <h2>{"Children"}</h2>
                <ul class="entity-list">
                    {for props.child_list.iter().map(|child| {
                        html! {
                            <li>
                                <p class="entity-title">{child.full_name()}</p>
                                <p class="entity-detail">
                                    {child
                                        .diagnosis
                                        .clone()
                                        .filter(|d| !d.is_empty())
                                        .unwrap_or_else(|| "No diagnosis".to_string())}
                                </p>
                            </li>
                        }
                    })}
                </ul>
            </div>
        </section>
    }
}
