use shared::User;
use yew::prelude::*;

use crate::state::View;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current_user: Option<User>,
    pub view: View,
    pub on_navigate: Callback<View>,
    pub on_login_click: Callback<()>,
    pub on_logout: Callback<()>,
}

/// Brand bar with the current user badge and the role-gated navigation.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let role = props.current_user.as_ref().map(|u| u.role);

    let nav_buttons = View::ALL
        .into_iter()
        .filter(|view| view.visible_for(role))
        .map(|view| {
            let on_navigate = props.on_navigate.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(view));
            let class = if view == props.view {
                "nav-btn active"
            } else {
                "nav-btn"
            };
            html! {
                <button {class} {onclick}>{view.label()}</button>
            }
        })
        .collect::<Html>();

    let account = match props.current_user.as_ref() {
        Some(user) => {
            let on_logout = props.on_logout.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_logout.emit(()));
            html! {
                <div class="account">
                    <span class="account-name">
                        {format!("Hi, {}", user.name)}
                        <span class="role-badge">{user.role.as_str()}</span>
                    </span>
                    <button class="btn btn-secondary" {onclick}>{"Logout"}</button>
                </div>
            }
        }
        None => {
            let on_login = props.on_login_click.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_login.emit(()));
            html! {
                <button class="btn btn-primary" {onclick}>{"Login"}</button>
            }
        }
    };

    html! {
        <header class="header">
            <div class="container header-row">
                <h1>{"Therapy Center"}</h1>
                {account}
            </div>
            <div class="container">
                <nav class="nav">
                    {nav_buttons}
                </nav>
            </div>
        </header>
    }
}
