use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
}

/// Dismissible banner for background refresh failures.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };

    let on_dismiss = props.on_dismiss.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_dismiss.emit(()));

    html! {
        <div class="error-banner">
            <span>{message}</span>
            <button class="error-banner-dismiss" {onclick}>{"✕"}</button>
        </div>
    }
}
