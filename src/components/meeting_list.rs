//! Meeting List Component

use chrono::{DateTime, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::format::time_range;

/// A scheduled meeting rendered by [`NxMeetingList`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeetingItem {
    pub id: String,
    pub title: String,
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub organizer: Option<String>,
    #[serde(default)]
    pub attendees: u32,
}

impl MeetingItem {
    /// Whether the meeting is live at `now` (start inclusive, end exclusive).
    pub fn is_ongoing(&self, now: DateTime<Utc>) -> bool {
        self.start_time <= now && now < self.end_time
    }

    /// Whether the meeting has not started yet at `now`.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        now < self.start_time
    }
}

/// Order meetings by start time, earliest first.
fn chronological(mut items: Vec<MeetingItem>) -> Vec<MeetingItem> {
    items.sort_by_key(|m| m.start_time);
    items
}

/// Meeting schedule list
#[component]
pub fn NxMeetingList(
    #[prop(into)] items: Vec<MeetingItem>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let now = Utc::now();
    let items = chronological(items);

    view! {
        <div class="bg-theme-surface rounded-xl border border-theme-border overflow-hidden">
            <div class="flex items-center justify-between px-4 py-4">
                <h2 class="text-lg font-semibold text-theme">"Meetings"</h2>
                <span class="text-sm text-theme-secondary">{items.len()} " scheduled"</span>
            </div>

            {if items.is_empty() {
                view! {
                    <div class="p-8 text-center">
                        <p class="text-theme-secondary">"No meetings scheduled"</p>
                        <p class="text-sm text-theme-muted mt-1">"Your schedule is clear"</p>
                    </div>
                }.into_view()
            } else {
                view! {
                    <div class="divide-y divide-theme-border border-t border-theme-border">
                        {items.into_iter().map(|item| view! {
                            <MeetingRow item=item now=now on_select=on_select />
                        }).collect::<Vec<_>>()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn MeetingRow(
    item: MeetingItem,
    now: DateTime<Utc>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let ongoing = item.is_ongoing(now);
    let ended = !ongoing && !item.is_upcoming(now);
    let slot = time_range(item.start_time, item.end_time);
    let MeetingItem { id, title, location, organizer, attendees, .. } = item;
    let select_id = id;

    let row_class = if ended {
        "flex items-center gap-4 px-4 py-3 hover:bg-theme-surface-hover transition-colors cursor-pointer opacity-60"
    } else {
        "flex items-center gap-4 px-4 py-3 hover:bg-theme-surface-hover transition-colors cursor-pointer"
    };

    view! {
        <div
            class=row_class
            on:click=move |_| on_select.call(select_id.clone())
        >
            <div class="w-28 flex-shrink-0 text-sm text-theme-secondary font-mono">{slot}</div>
            <div class="flex-1 min-w-0">
                <div class="flex items-center gap-2">
                    <p class="text-sm text-theme truncate">{title}</p>
                    {ongoing.then(|| view! {
                        <span class="px-2 py-0.5 bg-green-500/20 text-green-400 text-xs rounded-full">"In progress"</span>
                    })}
                </div>
                <div class="flex items-center gap-2 mt-0.5 text-xs text-theme-muted">
                    {location.map(|l| view! { <span>{l}</span> })}
                    {organizer.map(|o| view! { <span>"by " {o}</span> })}
                </div>
            </div>
            <span class="text-xs text-theme-secondary">{attendees} " attending"</span>
        </div>
    }
}
