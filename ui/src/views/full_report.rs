use dioxus::prelude::*;

use crate::core::{
    config,
    series::RenderMode,
};
use crate::report::{
    ChartOptions, FetchState, ReportFetch, ReportViewModel, RowView, SectionView, TrendChart,
};

#[component]
pub fn FullReport(id: u64) -> Element {
    let mut fetch = use_signal(|| ReportFetch::<api::FullReport>::new(id));

    use_effect(use_reactive((&id,), move |(id,)| {
        let token = fetch.write().begin(id);
        spawn(async move {
            let result = config::report_client()
                .full_report(id)
                .await
                .map_err(|err| err.to_string());
            fetch.write().resolve(token, result);
        });
    }));

    let state = fetch.read().state().clone();
    let body = match state {
        FetchState::Loading => rsx! {
            p { class: "page__placeholder", "Loading full session report…" }
        },
        FetchState::Error(reason) => rsx! {
            p { class: "page__error", "Error loading session report: {reason}" }
        },
        FetchState::Ready(payload) => render_report(&ReportViewModel::from_raw(&payload)),
    };

    rsx! {
        section { class: "page page-full-report",
            h1 { "Sleep Study Report" }
            {body}
            p { class: "page__nav",
                a { href: "/", "Back to Sessions" }
            }
        }
    }
}

fn render_report(vm: &ReportViewModel) -> Element {
    // Stepped series ride the fixed ordinal position axis; everything else
    // scales to its own data.
    let charts: Vec<_> = vm
        .series
        .iter()
        .map(|series| {
            let options = if series.mode == RenderMode::Stepped {
                ChartOptions::position_axis()
            } else {
                ChartOptions::auto()
            };
            (series.clone(), options)
        })
        .collect();

    rsx! {
        for section in vm.sections.iter() {
            {render_section(section)}
        }

        h2 { "Trend Overview (Graphical Data)" }
        for (series, options) in charts.into_iter() {
            div { class: "chart-container",
                h3 { "{series.label}" }
                TrendChart { series, options }
            }
        }
    }
}

fn render_section(section: &SectionView) -> Element {
    rsx! {
        h2 { "{section.title}" }
        table { class: "report-table",
            if !section.columns.is_empty() {
                thead {
                    tr {
                        th { "Parameter" }
                        for column in section.columns.iter() {
                            th { "{column}" }
                        }
                    }
                }
            }
            tbody {
                for row in section.rows.iter() {
                    {render_row(row, section.columns.len())}
                }
            }
        }
    }
}

fn render_row(row: &RowView, columns: usize) -> Element {
    // A single-cell row in a multi-column table spans the full width.
    let colspan = if columns > 1 && row.cells.len() == 1 {
        columns
    } else {
        1
    };
    rsx! {
        tr {
            td { class: "report-table__label", "{row.label}" }
            for cell in row.cells.iter() {
                td { class: "report-table__value", colspan: "{colspan}", "{cell}" }
            }
        }
    }
}
