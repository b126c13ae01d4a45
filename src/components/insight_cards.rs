//! Insight Cards Component

use chrono::{DateTime, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::format::relative_time;

/// An analytics insight rendered by [`InsightCards`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsightItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Insight card grid
#[component]
pub fn InsightCards(
    #[prop(into)] items: Vec<InsightItem>,
    #[prop(into, optional)] on_open: Option<Callback<String>>,
) -> impl IntoView {
    let now = Utc::now();

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
            {if items.is_empty() {
                view! {
                    <div class="col-span-full text-center py-8">
                        <p class="text-theme-secondary">"No insights yet"</p>
                        <p class="text-sm text-theme-muted mt-1">"Insights will appear here as they are generated"</p>
                    </div>
                }.into_view()
            } else {
                items.into_iter().map(|item| view! {
                    <InsightCard item=item now=now on_open=on_open />
                }).collect::<Vec<_>>().into_view()
            }}
        </div>
    }
}

#[component]
fn InsightCard(
    item: InsightItem,
    now: DateTime<Utc>,
    #[prop(optional_no_strip)] on_open: Option<Callback<String>>,
) -> impl IntoView {
    let InsightItem { id, title, summary, tags, timestamp } = item;
    let open_id = id;

    view! {
        <div
            class="bg-theme-surface rounded-xl border border-theme-border p-5 hover:border-accent/50 transition-colors cursor-pointer"
            on:click=move |_| {
                if let Some(cb) = on_open {
                    cb.call(open_id.clone());
                }
            }
        >
            <h3 class="font-medium text-theme mb-1">{title}</h3>
            <p class="text-sm text-theme-secondary line-clamp-2 mb-3">{summary}</p>
            <div class="flex items-center justify-between">
                <div class="flex flex-wrap gap-1.5">
                    {tags.into_iter().map(|tag| view! {
                        <span class="px-2 py-0.5 bg-theme-surface-hover text-theme-secondary text-xs rounded-full">{tag}</span>
                    }).collect::<Vec<_>>()}
                </div>
                {timestamp.map(|ts| view! {
                    <span class="text-xs text-theme-muted">{relative_time(ts, now)}</span>
                })}
            </div>
        </div>
    }
}
