use shared::{Child, Role, Session, SessionDraft, User};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{child_first_name, user_name};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct SessionsViewProps {
    pub role: Option<Role>,
    /// Full child list for the session form's picker.
    pub child_list: Vec<Child>,
    /// Sessions already filtered to what the viewer may see.
    pub sessions: Vec<Session>,
    pub users: Vec<User>,
    pub therapist_list: Vec<User>,
    /// Emitted after a successful create; the owner reloads the roster.
    pub on_created: Callback<()>,
}

/// Recent sessions plus the logging form for therapists and admins.
#[function_component(SessionsView)]
pub fn sessions_view(props: &SessionsViewProps) -> Html {
    let draft = use_state(SessionDraft::default);
    let is_submitting = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);
    let api_client = ApiClient::new();

    let on_child_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.set(SessionDraft {
                child_id: select.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_therapist_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.set(SessionDraft {
                therapist_id: select.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_date_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(SessionDraft {
                date: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_duration_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(SessionDraft {
                duration_minutes: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_notes_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(SessionDraft {
                notes: input.value(),
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
                form_error.set(Some("Child, therapist and date are required".to_string()));
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

                match api_client.create_session(draft.to_request()).await {
                    Ok(()) => {
                        draft.set(SessionDraft::default());
                        is_submitting.set(false);
                        on_created.emit(());
                    }
                    Err(error) => {
                        Logger::error("sessions", &error);
                        is_submitting.set(false);
                        form_error.set(Some(format!("Failed to log session: {}", error)));
                    }
                }
            });
        })
    };

    let can_log = matches!(props.role, Some(Role::Therapist | Role::Admin));

    let form = if can_log {
        html! {
            <div class="card">
                <h2>{"Log Session"}</h2>
                {if let Some(error) = (*form_error).clone() {
                    html! { <div class="form-message error">{error}</div> }
                } else {
                    html! {}
                }}
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="session-child">{"Child"}</label>
                        <select id="session-child" onchange={on_child_change} disabled={*is_submitting} required=true>
                            <option value="" selected={draft.child_id.is_empty()}>{"Select child"}</option>
                            {for props.child_list.iter().map(|child| {
                                html! {
                                    <option value={child.id.clone()} selected={draft.child_id == child.id}>
                                        {child.full_name()}
                                    </option>
                                }
                            })}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="session-therapist">{"Therapist"}</label>
                        <select id="session-therapist" onchange={on_therapist_change} disabled={*is_submitting} required=true>
                            <option value="" selected={draft.therapist_id.is_empty()}>{"Select therapist"}</option>
                            {for props.therapist_list.iter().map(|therapist| {
                                html! {
                                    <option value={therapist.id.clone()} selected={draft.therapist_id == therapist.id}>
                                        {&therapist.name}
                                    </option>
                                }
                            })}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="session-date">{"Date"}</label>
                        <input
                            id="session-date"
                            type="date"
                            value={draft.date.clone()}
                            onchange={on_date_change}
                            disabled={*is_submitting}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="session-duration">{"Duration (min)"}</label>
                        <input
                            id="session-duration"
                            type="number"
                            value={draft.duration_minutes.clone()}
                            onchange={on_duration_change}
                            disabled={*is_submitting}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="session-notes">{"Notes"}</label>
                        <textarea
                            id="session-notes"
                            value={draft.notes.clone()}
                            onchange={on_notes_change}
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
                <h2>{"Recent Sessions"}</h2>
                <ul class="entity-list">
                    {for props.sessions.iter().map(|session| {
                        html! {
                            <li>
                                <p class="entity-title">
                                    {format!(
                                        "{} - {}",
                                        child_first_name(&props.child_list, &session.child_id),
                                        user_name(&props.users, &session.therapist_id)
                                    )}
                                </p>
                                <p class="entity-detail">
                                    {format!("{} • {} min", session.date, session.duration_minutes)}
                                </p>
                            </li>
                        }
                    })}
                </ul>
            </div>
        </section>
    }
}
