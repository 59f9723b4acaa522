use gloo::dialogs::alert;
use shared::{AuthDraft, Role, User};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::AuthMode;

#[derive(Properties, PartialEq)]
pub struct AuthModalProps {
    pub mode: AuthMode,
    pub on_success: Callback<User>,
    pub on_switch_mode: Callback<AuthMode>,
    pub on_close: Callback<()>,
}

/// Inline login/signup modal. On success the server-returned identity becomes
/// the current user; on failure a blocking alert fires and the form stays open
/// for another attempt.
#[function_component(AuthModal)]
pub fn auth_modal(props: &AuthModalProps) -> Html {
    let draft = use_state(AuthDraft::default);
    let is_submitting = use_state(|| false);
    let api_client = ApiClient::new();

    let on_name_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(AuthDraft {
                name: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_email_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(AuthDraft {
                email: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_username_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(AuthDraft {
                username: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_password_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(AuthDraft {
                password: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_role_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let role = Role::parse(&select.value()).unwrap_or(Role::Parent);
            draft.set(AuthDraft {
                role,
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let on_success = props.on_success.clone();
        let mode = props.mode;
        let api_client = api_client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let draft = draft.clone();
            let is_submitting = is_submitting.clone();
            let on_success = on_success.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                is_submitting.set(true);

                let result = match mode {
                    AuthMode::Signup => api_client.signup(draft.to_signup_request()).await,
                    AuthMode::Login => api_client.login(draft.to_login_request()).await,
                };

                match result {
                    Ok(mut identity) => {
                        // Some signup responses omit the username; fall back to
                        // what was just typed.
                        if identity.username.is_empty() {
                            identity.username = draft.username.clone();
                        }
                        is_submitting.set(false);
                        on_success.emit(identity);
                    }
                    Err(error) => {
                        Logger::warn("auth", &error);
                        is_submitting.set(false);
                        alert(match mode {
                            AuthMode::Signup => "Signup failed",
                            AuthMode::Login => "Login failed",
                        });
                    }
                }
            });
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_toggle_mode = {
        let on_switch_mode = props.on_switch_mode.clone();
        let mode = props.mode;
        Callback::from(move |_: MouseEvent| {
            on_switch_mode.emit(match mode {
                AuthMode::Login => AuthMode::Signup,
                AuthMode::Signup => AuthMode::Login,
            });
        })
    };

    let title = match props.mode {
        AuthMode::Login => "Login",
        AuthMode::Signup => "Create Account",
    };

    let signup_fields = if props.mode == AuthMode::Signup {
        html! {
            <>
                <div class="form-group">
                    <label for="auth-name">{"Name"}</label>
                    <input
                        id="auth-name"
                        type="text"
                        value={draft.name.clone()}
                        onchange={on_name_change}
                        disabled={*is_submitting}
                        required=true
                    />
                </div>
                <div class="form-group">
                    <label for="auth-email">{"Email"}</label>
                    <input
                        id="auth-email"
                        type="email"
                        value={draft.email.clone()}
                        onchange={on_email_change}
                        disabled={*is_submitting}
                        required=true
                    />
                </div>
            </>
        }
    } else {
        html! {}
    };

    let role_field = if props.mode == AuthMode::Signup {
        html! {
            <div class="form-group">
                <label for="auth-role">{"Role"}</label>
                <select id="auth-role" onchange={on_role_change} disabled={*is_submitting}>
                    {for Role::ALL.iter().map(|role| {
                        html! {
                            <option
                                value={role.as_str()}
                                selected={*role == draft.role}
                            >
                                {role.as_str()}
                            </option>
                        }
                    })}
                </select>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button class="modal-close" onclick={on_close_click}>{"✕"}</button>
                </div>
                <form class="modal-body" onsubmit={on_submit}>
                    {signup_fields}
                    <div class="form-group">
                        <label for="auth-username">{"Username"}</label>
                        <input
                            id="auth-username"
                            type="text"
                            value={draft.username.clone()}
                            onchange={on_username_change}
                            disabled={*is_submitting}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="auth-password">{"Password"}</label>
                        <input
                            id="auth-password"
                            type="password"
                            value={draft.password.clone()}
                            onchange={on_password_change}
                            disabled={*is_submitting}
                            required=true
                        />
                    </div>
                    {role_field}
                    <div class="modal-actions">
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {match props.mode {
                                AuthMode::Login => "Login",
                                AuthMode::Signup => "Create",
                            }}
                        </button>
                        <button type="button" class="btn-link" onclick={on_toggle_mode}>
                            {match props.mode {
                                AuthMode::Login => "Create an account",
                                AuthMode::Signup => "Have an account? Login",
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
