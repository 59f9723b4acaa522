use shared::User;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UsersViewProps {
    pub users: Vec<User>,
    pub signed_in: bool,
    pub on_signup_click: Callback<()>,
}

/// Card grid of all accounts, with a signup entry point for anonymous
/// visitors.
#[function_component(UsersView)]
pub fn users_view(props: &UsersViewProps) -> Html {
    let signup_button = if props.signed_in {
        html! {}
    } else {
        let on_signup = props.on_signup_click.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_signup.emit(()));
        html! {
            <button class="btn btn-success" {onclick}>{"Create account"}</button>
        }
    };

    html! {
        <section class="card">
            <div class="card-header-row">
                <h2>{"Users"}</h2>
                {signup_button}
            </div>
            <div class="user-grid">
                {for props.users.iter().map(|user| {
                    html! {
                        <div class="user-card">
                            <p class="user-name">{&user.name}</p>
                            <p class="user-email">{&user.email}</p>
                            <span class="role-badge">{user.role.as_str()}</span>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}
