use dioxus::prelude::*;

use crate::core::config;
use crate::report::{ChartOptions, FetchState, ReportFetch, SummaryViewModel, TrendChart};

#[component]
pub fn SummaryReport(id: u64) -> Element {
    let mut fetch = use_signal(|| ReportFetch::<api::SessionReport>::new(id));

    use_effect(use_reactive((&id,), move |(id,)| {
        let token = fetch.write().begin(id);
        spawn(async move {
            let result = config::report_client()
                .report(id)
                .await
                .map_err(|err| err.to_string());
            fetch.write().resolve(token, result);
        });
    }));

    let state = fetch.read().state().clone();
    let body = match state {
        FetchState::Loading => rsx! {
            p { class: "page__placeholder", "Loading report…" }
        },
        FetchState::Error(reason) => rsx! {
            p { class: "page__error", "Error loading report: {reason}" }
        },
        FetchState::Ready(payload) => render_summary(&SummaryViewModel::from_raw(&payload)),
    };

    rsx! {
        section { class: "page page-report",
            h1 { "Session Report for Session #{id}" }
            {body}
            p { class: "page__nav",
                a { href: "/", "Back to Sessions" }
            }
        }
    }
}

fn render_summary(vm: &SummaryViewModel) -> Element {
    rsx! {
        div { class: "report-summary",
            h2 { "Summary Statistics" }
            ul { class: "report-summary__stats",
                for (label, value) in vm.stats.iter() {
                    li {
                        span { class: "report-summary__label", "{label}" }
                        span { class: "report-summary__value", "{value}" }
                    }
                }
            }
        }
        div { class: "chart-container",
            h2 { "Heart Rate Over Time" }
            TrendChart { series: vm.heart_rate.clone(), options: ChartOptions::auto() }
        }
        div { class: "chart-container",
            h2 { "Oxygen Saturation Over Time" }
            TrendChart { series: vm.oxygen.clone(), options: ChartOptions::auto() }
        }
    }
}
