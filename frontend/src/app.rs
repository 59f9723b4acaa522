use shared::{therapists, visible_children, visible_sessions, DonationScope, Role, User};
use yew::prelude::*;

use crate::components::auth_modal::AuthModal;
use crate::components::error_banner::ErrorBanner;
use crate::components::header::Header;
use crate::components::views::{
    ChildrenView, DashboardView, DonorView, GoalsView, ReportsView, SessionsView, UsersView,
};
use crate::hooks::{use_donations, use_goals, use_roster, use_weekly_report};
use crate::services::api::ApiClient;
use crate::state::{Action, AppState, AuthMode, View};

/// Root component: owns the store, runs the view-entry data effects, and
/// renders one of the seven views.
#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(AppState::default);
    let api_client = ApiClient::new();

    let roster = use_roster(&api_client, store.dispatcher());
    let goals = use_goals(&api_client, store.dispatcher());
    let donations = use_donations(&api_client, store.dispatcher());
    let report = use_weekly_report(&api_client, store.dispatcher());

    let current_user = store.current_user.clone();
    let role = current_user.as_ref().map(|u| u.role);
    let user_id = current_user.as_ref().map(|u| u.id.clone());

    // Entering the goals view (or changing the selected child while there)
    // refreshes that child's goals.
    {
        let refresh_goals = goals.refresh.clone();

        use_effect_with(
            (store.view, store.selected_child_id.clone()),
            move |(view, selected_child)| {
                if *view == View::Goals {
                    if let Some(child_id) = selected_child.clone() {
                        refresh_goals.emit(child_id);
                    }
                }
                || ()
            },
        );
    }

    // Entering donor/reports (or changing the user while there) refreshes that
    // view's data. The selected child is irrelevant to both, so changing it
    // must not re-fetch here.
    {
        let store = store.clone();
        let refresh_donations = donations.refresh.clone();
        let refresh_report = report.refresh.clone();

        use_effect_with((store.view, user_id.clone()), move |(view, _)| {
            match view {
                View::Donor => {
                    refresh_donations.emit(DonationScope::for_viewer(store.current_user.as_ref()));
                }
                View::Reports => {
                    if let Some(user) = store.current_user.as_ref() {
                        if user.role == Role::Parent {
                            refresh_report.emit(user.id.clone());
                        }
                    }
                }
                _ => {}
            }
            || ()
        });
    }

    let on_navigate = {
        let store = store.clone();
        Callback::from(move |view: View| store.dispatch(Action::Navigate(view)))
    };

    let on_login_click = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::OpenAuth(AuthMode::Login)))
    };

    let on_open_signup = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::OpenAuth(AuthMode::Signup)))
    };

    let on_switch_mode = {
        let store = store.clone();
        Callback::from(move |mode: AuthMode| store.dispatch(Action::OpenAuth(mode)))
    };

    let on_auth_close = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::CloseAuth))
    };

    let on_authenticated = {
        let store = store.clone();
        Callback::from(move |user: User| store.dispatch(Action::LoggedIn(user)))
    };

    let on_logout = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::LoggedOut))
    };

    let on_dismiss_error = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::DismissError))
    };

    let on_select_child = {
        let store = store.clone();
        Callback::from(move |child_id: String| store.dispatch(Action::SelectChild(child_id)))
    };

    // Creates invalidate the local cache: reload everything, then land on the
    // list the new record belongs to.
    let on_child_created = {
        let store = store.clone();
        let refresh = roster.refresh.clone();
        Callback::from(move |_| {
            refresh.emit(());
            store.dispatch(Action::Navigate(View::Children));
        })
    };

    let on_session_created = {
        let store = store.clone();
        let refresh = roster.refresh.clone();
        Callback::from(move |_| {
            refresh.emit(());
            store.dispatch(Action::Navigate(View::Sessions));
        })
    };

    let on_goal_created = {
        let refresh = goals.refresh.clone();
        Callback::from(move |child_id: String| refresh.emit(child_id))
    };

    let on_progress_recorded = {
        let refresh = roster.refresh.clone();
        Callback::from(move |_| refresh.emit(()))
    };

    let on_donation_created = {
        let store = store.clone();
        let refresh = donations.refresh.clone();
        Callback::from(move |_| {
            refresh.emit(DonationScope::for_viewer(store.current_user.as_ref()));
        })
    };

    let children_visible = visible_children(&store.children, current_user.as_ref());
    let sessions_visible = visible_sessions(&store.sessions, &store.children, current_user.as_ref());
    let therapist_list = therapists(&store.users);

    let body = match store.view {
        View::Dashboard => html! {
            <DashboardView
                child_count={children_visible.len()}
                user_count={store.users.len()}
                session_count={sessions_visible.len()}
                therapist_count={therapist_list.len()}
            />
        },
        View::Children => html! {
            <ChildrenView
                role={role}
                child_list={children_visible.clone()}
                on_created={on_child_created}
            />
        },
        View::Sessions => html! {
            <SessionsView
                role={role}
                child_list={store.children.clone()}
                sessions={sessions_visible.clone()}
                users={store.users.clone()}
                therapist_list={therapist_list.clone()}
                on_created={on_session_created}
            />
        },
        View::Goals => html! {
            <GoalsView
                role={role}
                child_list={children_visible.clone()}
                sessions={sessions_visible.clone()}
                users={store.users.clone()}
                goals={store.goals.clone()}
                selected_child_id={store.selected_child_id.clone()}
                on_select_child={on_select_child}
                on_goal_created={on_goal_created}
                on_progress_recorded={on_progress_recorded}
            />
        },
        View::Donor => html! {
            <DonorView
                role={role}
                child_list={store.children.clone()}
                donations={store.donations.clone()}
                summary={store.donation_summary.clone()}
                donor_id={user_id.clone()}
                on_created={on_donation_created}
            />
        },
        View::Users => html! {
            <UsersView
                users={store.users.clone()}
                signed_in={current_user.is_some()}
                on_signup_click={on_open_signup}
            />
        },
        View::Reports => {
            if role == Some(Role::Parent) {
                html! { <ReportsView report={store.weekly_report.clone()} /> }
            } else {
                html! {}
            }
        }
    };

    let auth_modal = if let Some(mode) = store.auth_modal {
        html! {
            <AuthModal
                {mode}
                on_success={on_authenticated}
                on_switch_mode={on_switch_mode}
                on_close={on_auth_close}
            />
        }
    } else {
        html! {}
    };

    html! {
        <>
            <Header
                current_user={current_user.clone()}
                view={store.view}
                on_navigate={on_navigate}
                on_login_click={on_login_click}
                on_logout={on_logout}
            />
            <ErrorBanner message={store.last_error.clone()} on_dismiss={on_dismiss_error} />
            <main class="main">
                <div class="container">
                    {body}
                </div>
            </main>
            {auth_modal}
        </>
    }
}
