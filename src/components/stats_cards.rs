//! Stats Cards Component
//!
//! A responsive grid of key-figure cards with optional trend indicators.

use leptos::*;
use serde::{Deserialize, Serialize};

/// A single key figure rendered by [`StatsCards`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatItem {
    pub id: String,
    /// Short caption above the value ("Active users").
    pub label: String,
    /// Pre-formatted display value ("1,284", "99.98").
    pub value: String,
    pub unit: Option<String>,
    /// Percent change against the previous period; sign picks the marker.
    pub trend: Option<f64>,
}

/// Key-figure card grid
#[component]
pub fn StatsCards(
    #[prop(into)] items: Vec<StatItem>,
    #[prop(into, optional)] on_select: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
            {if items.is_empty() {
                view! {
                    <div class="col-span-full text-center py-8">
                        <p class="text-theme-secondary">"No stats to display"</p>
                        <p class="text-sm text-theme-muted mt-1">"Key figures will appear here once reported"</p>
                    </div>
                }.into_view()
            } else {
                items.into_iter().map(|item| view! {
                    <StatCard item=item on_select=on_select />
                }).collect::<Vec<_>>().into_view()
            }}
        </div>
    }
}

#[component]
fn StatCard(
    item: StatItem,
    #[prop(optional_no_strip)] on_select: Option<Callback<String>>,
) -> impl IntoView {
    let StatItem { id, label, value, unit, trend } = item;
    let click_id = id;

    view! {
        <div
            class="bg-theme-surface rounded-xl border border-theme-border p-5 hover:border-accent/50 transition-colors cursor-pointer"
            on:click=move |_| {
                if let Some(cb) = on_select {
                    cb.call(click_id.clone());
                }
            }
        >
            <p class="text-sm text-theme-secondary mb-1">{label}</p>
            <div class="flex items-baseline gap-2">
                <span class="text-2xl font-bold text-theme">{value}</span>
                {unit.map(|u| view! { <span class="text-sm text-theme-muted">{u}</span> })}
                {trend.map(|t| {
                    let (marker, color) = if t >= 0.0 {
                        ("↑", "text-green-400")
                    } else {
                        ("↓", "text-red-400")
                    };
                    view! {
                        <span class=format!("text-sm {}", color)>{marker} " " {trend_label(t)}</span>
                    }
                })}
            </div>
        </div>
    }
}

/// Trend percentage with an explicit sign ("+12.4%", "-3.1%").
fn trend_label(trend: f64) -> String {
    format!("{:+.1}%", trend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_label_signs() {
        assert_eq!(trend_label(12.4), "+12.4%");
        assert_eq!(trend_label(-3.1), "-3.1%");
        assert_eq!(trend_label(0.0), "+0.0%");
    }

    #[test]
    fn test_stat_item_minimal_json() {
        let json = r#"{"id":"s1","label":"Active users","value":"1,284"}"#;
        let item: StatItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.label, "Active users");
        assert_eq!(item.unit, None);
        assert_eq!(item.trend, None);
    }

    #[test]
    fn test_stat_item_roundtrip() {
        let item = StatItem {
            id: "uptime".to_string(),
            label: "Uptime".to_string(),
            value: "99.98".to_string(),
            unit: Some("%".to_string()),
            trend: Some(-0.5),
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"unit\":\"%\""));

        let parsed: StatItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }
}
