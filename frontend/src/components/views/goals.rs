use gloo::dialogs::alert;
use shared::{
    Child, Goal, GoalDraft, ProgressDraft, RecordProgressRequest, Role, Session, User,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{child_first_name, user_name};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct GoalsViewProps {
    pub role: Option<Role>,
    /// Children already filtered to what the viewer may see.
    pub child_list: Vec<Child>,
    /// Sessions already filtered to what the viewer may see.
    pub sessions: Vec<Session>,
    pub users: Vec<User>,
    /// Goals for the selected child.
    pub goals: Vec<Goal>,
    pub selected_child_id: Option<String>,
    pub on_select_child: Callback<String>,
    /// Emitted with the child id after a goal is created; the owner refreshes
    /// that child's goal list.
    pub on_goal_created: Callback<String>,
    /// Emitted after progress is recorded; the owner reloads the roster.
    pub on_progress_recorded: Callback<()>,
}

/// Goal management: child selector, goal creation for therapists/admins, and
/// the per-session progress form.
#[function_component(GoalsView)]
pub fn goals_view(props: &GoalsViewProps) -> Html {
    let goal_draft = use_state(GoalDraft::default);
    let progress_draft = use_state(ProgressDraft::default);
    let goal_error = use_state(|| Option::<String>::None);
    let api_client = ApiClient::new();

    let selected_child = props.selected_child_id.clone().unwrap_or_default();

    let on_child_change = {
        let on_select_child = props.on_select_child.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            if !value.is_empty() {
                on_select_child.emit(value);
            }
        })
    };

    let on_title_change = {
        let goal_draft = goal_draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            goal_draft.set(GoalDraft {
                title: input.value(),
                ..(*goal_draft).clone()
            });
        })
    };

    let on_description_change = {
        let goal_draft = goal_draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            goal_draft.set(GoalDraft {
                description: input.value(),
                ..(*goal_draft).clone()
            });
        })
    };

    let on_target_change = {
        let goal_draft = goal_draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            goal_draft.set(GoalDraft {
                target_metric: input.value(),
                ..(*goal_draft).clone()
            });
        })
    };

    let on_goal_submit = {
        let goal_draft = goal_draft.clone();
        let goal_error = goal_error.clone();
        let on_goal_created = props.on_goal_created.clone();
        let selected_child = selected_child.clone();
        let api_client = api_client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let draft = GoalDraft {
                child_id: selected_child.clone(),
                ..(*goal_draft).clone()
            };
            if !draft.is_valid() {
                return;
            }

            let goal_draft = goal_draft.clone();
            let goal_error = goal_error.clone();
            let on_goal_created = on_goal_created.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                goal_error.set(None);
                match api_client.create_goal(draft.to_request()).await {
                    Ok(()) => {
                        goal_draft.set(draft.reset_keeping_child());
                        on_goal_created.emit(draft.child_id.clone());
                    }
                    Err(error) => {
                        Logger::error("goals", &error);
                        goal_error.set(Some(format!("Failed to add goal: {}", error)));
                    }
                }
            });
        })
    };

    let on_session_change = {
        let progress_draft = progress_draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            progress_draft.set(ProgressDraft {
                session_id: select.value(),
                ..(*progress_draft).clone()
            });
        })
    };

    let on_goal_change = {
        let progress_draft = progress_draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            progress_draft.set(ProgressDraft {
                goal_id: select.value(),
                ..(*progress_draft).clone()
            });
        })
    };

    let on_rating_change = {
        let progress_draft = progress_draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let rating = input.value().trim().parse().unwrap_or(progress_draft.rating);
            progress_draft.set(ProgressDraft {
                rating,
                ..(*progress_draft).clone()
            });
        })
    };

    let on_comment_change = {
        let progress_draft = progress_draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            progress_draft.set(ProgressDraft {
                comment: input.value(),
                ..(*progress_draft).clone()
            });
        })
    };

    let on_progress_submit = {
        let progress_draft = progress_draft.clone();
        let on_progress_recorded = props.on_progress_recorded.clone();
        let selected_child = selected_child.clone();
        let api_client = api_client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let draft = ProgressDraft {
                child_id: selected_child.clone(),
                ..(*progress_draft).clone()
            };
            // Local precondition: without a session and goal no request goes out.
            let item = match draft.validate() {
                Ok(item) => item,
                Err(error) => {
                    alert(&error.to_string());
                    return;
                }
            };

            let progress_draft = progress_draft.clone();
            let on_progress_recorded = on_progress_recorded.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                let request = RecordProgressRequest { items: vec![item] };
                match api_client.record_progress(&draft.session_id, request).await {
                    Ok(()) => {
                        alert("Progress added");
                        progress_draft.set(draft.reset_keeping_child());
                        on_progress_recorded.emit(());
                    }
                    Err(error) => {
                        Logger::error("goals", &error);
                    }
                }
            });
        })
    };

    let can_edit = matches!(props.role, Some(Role::Therapist | Role::Admin));
    let goal_submit_disabled = selected_child.is_empty() || goal_draft.title.trim().is_empty();

    // Sessions offered in the progress picker are narrowed to the selected child.
    let progress_sessions: Vec<&Session> = props
        .sessions
        .iter()
        .filter(|s| selected_child.is_empty() || s.child_id == selected_child)
        .collect();

    let goal_form = if can_edit {
        html! {
            <form class="goal-form" onsubmit={on_goal_submit}>
                {if let Some(error) = (*goal_error).clone() {
                    html! { <div class="form-message error">{error}</div> }
                } else {
                    html! {}
                }}
                <div class="form-group">
                    <label for="goal-title">{"New goal title"}</label>
                    <input
                        id="goal-title"
                        type="text"
                        placeholder="e.g., Eye contact"
                        value={goal_draft.title.clone()}
                        onchange={on_title_change}
                    />
                </div>
                <div class="form-group">
                    <input
                        type="text"
                        placeholder="Description"
                        value={goal_draft.description.clone()}
                        onchange={on_description_change}
                    />
                </div>
                <div class="form-group">
                    <input
                        type="text"
                        placeholder="Target metric"
                        value={goal_draft.target_metric.clone()}
                        onchange={on_target_change}
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled={goal_submit_disabled}>
                    {"Add Goal"}
                </button>
            </form>
        }
    } else {
        html! {}
    };

    html! {
        <section class="two-column">
            <div class="card">
                <h2>{"Goals"}</h2>
                <div class="form-group">
                    <label for="goal-child">{"Child"}</label>
                    <select id="goal-child" onchange={on_child_change}>
                        <option value="" selected={selected_child.is_empty()}>{"Select child"}</option>
                        {for props.child_list.iter().map(|child| {
                            html! {
                                <option value={child.id.clone()} selected={selected_child == child.id}>
                                    {child.full_name()}
                                </option>
                            }
                        })}
                    </select>
                </div>
                {goal_form}
                <ul class="entity-list">
                    {for props.goals.iter().map(|goal| {
                        html! {
                            <li>
                                <p class="entity-title">{&goal.title}</p>
                                {if !goal.target_metric.is_empty() {
                                    html! { <p class="entity-detail">{format!("Target: {}", goal.target_metric)}</p> }
                                } else {
                                    html! {}
                                }}
                                {if !goal.description.is_empty() {
                                    html! { <p class="entity-detail">{&goal.description}</p> }
                                } else {
                                    html! {}
                                }}
                            </li>
                        }
                    })}
                </ul>
            </div>
            <div class="card">
                <h2>{"Log Progress"}</h2>
                <form onsubmit={on_progress_submit}>
                    <div class="form-group">
                        <label for="progress-session">{"Session"}</label>
                        <select id="progress-session" onchange={on_session_change}>
                            <option value="" selected={progress_draft.session_id.is_empty()}>{"Select session"}</option>
                            {for progress_sessions.iter().map(|session| {
                                let label = format!(
                                    "{} • {} - {}",
                                    session.date,
                                    child_first_name(&props.child_list, &session.child_id),
                                    user_name(&props.users, &session.therapist_id)
                                );
                                html! {
                                    <option
                                        value={session.id.clone()}
                                        selected={progress_draft.session_id == session.id}
                                    >
                                        {label}
                                    </option>
                                }
                            })}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="progress-goal">{"Goal"}</label>
                        <select id="progress-goal" onchange={on_goal_change}>
                            <option value="" selected={progress_draft.goal_id.is_empty()}>{"Select goal"}</option>
                            {for props.goals.iter().map(|goal| {
                                html! {
                                    <option
                                        value={goal.id.clone()}
                                        selected={progress_draft.goal_id == goal.id}
                                    >
                                        {&goal.title}
                                    </option>
                                }
                            })}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="progress-rating">{"Rating (1-5)"}</label>
                        <input
                            id="progress-rating"
                            type="number"
                            min="1"
                            max="5"
                            value={progress_draft.rating.to_string()}
                            onchange={on_rating_change}
                        />
                    </div>
                    <div class="form-group">
                        <label for="progress-comment">{"Comment"}</label>
                        <textarea
                            id="progress-comment"
                            value={progress_draft.comment.clone()}
                            onchange={on_comment_change}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">{"Save Progress"}</button>
                </form>
            </div>
        </section>
    }
}
