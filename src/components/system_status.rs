//! System Status Component
//!
//! Subsystem health panel with an aggregate banner and per-subsystem rows.

use leptos::*;
use serde::{Deserialize, Serialize};

/// Health of a single monitored subsystem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusItem {
    pub id: String,
    pub name: String,
    pub level: StatusLevel,
    /// Optional one-line note shown under the name.
    pub detail: Option<String>,
    pub latency_ms: Option<u32>,
}

/// Subsystem health level
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Operational,
    Degraded,
    Outage,
    #[default]
    Unknown,
}

impl StatusLevel {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            StatusLevel::Operational => "Operational",
            StatusLevel::Degraded => "Degraded",
            StatusLevel::Outage => "Outage",
            StatusLevel::Unknown => "Unknown",
        }
    }

    /// CSS class for the status dot
    pub fn dot_class(&self) -> &'static str {
        match self {
            StatusLevel::Operational => "healthy",
            StatusLevel::Degraded => "degraded",
            StatusLevel::Outage => "unhealthy",
            StatusLevel::Unknown => "unknown",
        }
    }

    /// CSS class for text color
    pub fn text_class(&self) -> &'static str {
        match self {
            StatusLevel::Operational => "text-green-400",
            StatusLevel::Degraded => "text-amber-400",
            StatusLevel::Outage => "text-red-400",
            StatusLevel::Unknown => "text-theme-muted",
        }
    }
}

/// Aggregate level across every reported subsystem.
fn overall(items: &[StatusItem]) -> StatusLevel {
    if items.is_empty() {
        return StatusLevel::Unknown;
    }

    if items.iter().any(|i| i.level == StatusLevel::Outage) {
        return StatusLevel::Outage;
    }

    if items.iter().any(|i| i.level == StatusLevel::Degraded) {
        return StatusLevel::Degraded;
    }

    if items.iter().all(|i| i.level == StatusLevel::Operational) {
        return StatusLevel::Operational;
    }

    if items.iter().any(|i| i.level == StatusLevel::Operational) {
        // Some operational, some unreported
        StatusLevel::Degraded
    } else {
        // No signal from any subsystem
        StatusLevel::Unknown
    }
}

fn summary_label(level: StatusLevel) -> &'static str {
    match level {
        StatusLevel::Operational => "All systems operational",
        StatusLevel::Degraded => "Degraded performance",
        StatusLevel::Outage => "Service outage",
        StatusLevel::Unknown => "Status unknown",
    }
}

/// Subsystem health panel
#[component]
pub fn SystemStatus(
    #[prop(into)] items: Vec<StatusItem>,
    #[prop(default = "System Status")] title: &'static str,
) -> impl IntoView {
    let summary = overall(&items);

    view! {
        <div class="bg-theme-surface rounded-xl border border-theme-border p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold text-theme">{title}</h2>
                <div class="flex items-center gap-2">
                    <span class=format!("status-dot {}", summary.dot_class())></span>
                    <span class=format!("text-sm {}", summary.text_class())>{summary_label(summary)}</span>
                </div>
            </div>

            {if items.is_empty() {
                view! {
                    <div class="text-center py-8">
                        <p class="text-theme-secondary">"No subsystems reported"</p>
                        <p class="text-sm text-theme-muted mt-1">"Subsystem health will appear here once monitored"</p>
                    </div>
                }.into_view()
            } else {
                view! {
                    <div class="divide-y divide-theme-border">
                        {items.into_iter().map(|item| view! {
                            <StatusRow item=item />
                        }).collect::<Vec<_>>()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn StatusRow(item: StatusItem) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 py-2.5">
            <span class=format!("status-dot {}", item.level.dot_class())></span>
            <div class="flex-1 min-w-0">
                <p class="text-sm text-theme truncate">{item.name}</p>
                {item.detail.map(|d| view! { <p class="text-xs text-theme-muted truncate">{d}</p> })}
            </div>
            {item.latency_ms.map(|ms| view! {
                <span class="text-xs text-theme-secondary font-mono">{format!("{}ms", ms)}</span>
            })}
            <span class=format!("text-xs {}", item.level.text_class())>{item.level.label()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, level: StatusLevel) -> StatusItem {
        StatusItem {
            id: id.to_string(),
            name: id.to_string(),
            level,
            detail: None,
            latency_ms: None,
        }
    }

    #[test]
    fn test_overall_empty_is_unknown() {
        assert_eq!(overall(&[]), StatusLevel::Unknown);
    }

    #[test]
    fn test_overall_outage_wins() {
        let items = vec![
            item("a", StatusLevel::Operational),
            item("b", StatusLevel::Outage),
            item("c", StatusLevel::Degraded),
        ];
        assert_eq!(overall(&items), StatusLevel::Outage);
    }

    #[test]
    fn test_overall_degraded_beats_operational() {
        let items = vec![
            item("a", StatusLevel::Operational),
            item("b", StatusLevel::Degraded),
        ];
        assert_eq!(overall(&items), StatusLevel::Degraded);
    }

    #[test]
    fn test_overall_all_operational() {
        let items = vec![
            item("a", StatusLevel::Operational),
            item("b", StatusLevel::Operational),
        ];
        assert_eq!(overall(&items), StatusLevel::Operational);
    }

    #[test]
    fn test_overall_partial_coverage_is_degraded() {
        let items = vec![
            item("a", StatusLevel::Operational),
            item("b", StatusLevel::Unknown),
        ];
        assert_eq!(overall(&items), StatusLevel::Degraded);
    }

    #[test]
    fn test_overall_all_unknown() {
        let items = vec![item("a", StatusLevel::Unknown), item("b", StatusLevel::Unknown)];
        assert_eq!(overall(&items), StatusLevel::Unknown);
    }

    #[test]
    fn test_status_level_serde_names() {
        assert_eq!(serde_json::to_string(&StatusLevel::Operational).unwrap(), "\"operational\"");
        assert_eq!(serde_json::to_string(&StatusLevel::Outage).unwrap(), "\"outage\"");

        let parsed: StatusLevel = serde_json::from_str("\"degraded\"").unwrap();
        assert_eq!(parsed, StatusLevel::Degraded);
    }

    #[test]
    fn test_status_item_minimal_json() {
        let json = r#"{"id":"mail","name":"Mail gateway","level":"operational"}"#;
        let item: StatusItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.level, StatusLevel::Operational);
        assert_eq!(item.detail, None);
        assert_eq!(item.latency_ms, None);
    }
}
