use dioxus::prelude::*;
use time::{macros::format_description, PrimitiveDateTime};

use crate::core::config;

#[component]
pub fn Sessions() -> Element {
    let sessions = use_resource(|| async { config::report_client().sessions().await });

    let body = match &*sessions.read_unchecked() {
        None => rsx! {
            p { class: "page__placeholder", "Loading sessions…" }
        },
        Some(Err(err)) => rsx! {
            p { class: "page__error", "Could not load sessions: {err}" }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "page__placeholder", "No recorded sessions yet." }
        },
        Some(Ok(list)) => {
            let entries: Vec<SessionEntry> = list
                .iter()
                .map(|session| SessionEntry {
                    id: session.id,
                    started: format_start_time(session.start_time.as_deref()),
                })
                .collect();
            rsx! {
                ul { class: "sessions-list",
                    for entry in entries.into_iter() {
                        li { key: "{entry.id}",
                            a {
                                class: "sessions-list__link",
                                href: "/session/{entry.id}/full_report",
                                "Session #{entry.id} started at {entry.started}"
                            }
                            a {
                                class: "sessions-list__summary",
                                href: "/session/{entry.id}/report",
                                "summary"
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "page page-sessions",
            h1 { "Your Recording Sessions" }
            {body}
        }
    }
}

#[derive(Clone)]
struct SessionEntry {
    id: u64,
    started: String,
}

/// Display a backend timestamp. The backend has served both the HTTP-date
/// form (`Sat, 01 Mar 2025 22:41:09 GMT`) and plain `YYYY-MM-DD HH:MM:SS`
/// over time, so try both and fall back to the raw string rather than
/// hiding the session.
fn format_start_time(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "an unknown time".to_string();
    };

    let display = format_description!("[year]-[month]-[day] [hour]:[minute]");
    let http_date = format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
    );
    let mysql = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

    for format in [http_date, mysql] {
        if let Ok(ts) = PrimitiveDateTime::parse(raw, &format) {
            if let Ok(label) = ts.format(&display) {
                return label;
            }
        }
    }
    raw.to_string()
}
