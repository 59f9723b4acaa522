use shared::WeeklyReport;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReportsViewProps {
    pub report: Option<WeeklyReport>,
}

/// Weekly activity report for the signed-in parent.
#[function_component(ReportsView)]
pub fn reports_view(props: &ReportsViewProps) -> Html {
    let body = match props.report.as_ref() {
        None => html! {
            <p class="empty-note">{"No data yet."}</p>
        },
        Some(report) => html! {
            <div class="report">
                <div class="stat-grid">
                    <div class="stat-card">
                        <p class="stat-label">{"Total Sessions"}</p>
                        <p class="stat-value">{report.total_sessions}</p>
                    </div>
                    <div class="stat-card">
                        <p class="stat-label">{"Progress Updates"}</p>
                        <p class="stat-value">{report.total_progress_updates}</p>
                    </div>
                </div>
                <ul class="entity-list">
                    {for report.children.iter().map(|row| {
                        html! {
                            <li>
                                <p class="entity-title">{&row.name}</p>
                                <p class="entity-detail">
                                    {format!(
                                        "{} sessions • {} goals • {} updates",
                                        row.sessions, row.goals, row.progress_updates
                                    )}
                                </p>
                            </li>
                        }
                    })}
                </ul>
            </div>
        },
    };

    html! {
        <section class="card">
            <h2>{"Weekly Report"}</h2>
            {body}
        </section>
    }
}
