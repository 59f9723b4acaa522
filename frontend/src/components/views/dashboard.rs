use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub child_count: usize,
    pub user_count: usize,
    pub session_count: usize,
    pub therapist_count: usize,
}

/// Landing view: headline counts over the viewer's visible data.
#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let cards = [
        ("Children", props.child_count),
        ("Users", props.user_count),
        ("Sessions", props.session_count),
        ("Therapists", props.therapist_count),
    ];

    html! {
        <section class="stat-grid">
            {for cards.iter().map(|(label, count)| {
                html! {
                    <div class="card stat-card">
                        <p class="stat-label">{*label}</p>
                        <p class="stat-value">{*count}</p>
                    </div>
                }
            })}
        </section>
    }
}
