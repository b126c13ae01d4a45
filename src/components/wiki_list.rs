//! Wiki List Component
//!
//! Knowledge-base entries with type filter tabs.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::{compact_count, relative_time};

/// A knowledge-base entry rendered by [`NxWikiList`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WikiItem {
    pub id: String,
    pub title: String,
    pub wiki_type: WikiType,
    pub author: Option<String>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub views: u32,
}

/// Kind of knowledge-base entry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WikiType {
    #[default]
    Article,
    Guide,
    Faq,
    Announcement,
}

impl WikiType {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            WikiType::Article => "Article",
            WikiType::Guide => "Guide",
            WikiType::Faq => "FAQ",
            WikiType::Announcement => "Announcement",
        }
    }

    /// CSS classes for the type badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            WikiType::Article => "bg-blue-500/20 text-blue-400 border-blue-500/30",
            WikiType::Guide => "bg-green-500/20 text-green-400 border-green-500/30",
            WikiType::Faq => "bg-amber-500/20 text-amber-400 border-amber-500/30",
            WikiType::Announcement => "bg-violet-500/20 text-violet-400 border-violet-500/30",
        }
    }

    /// Wire name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            WikiType::Article => "article",
            WikiType::Guide => "guide",
            WikiType::Faq => "faq",
            WikiType::Announcement => "announcement",
        }
    }

    /// Every type, in tab order
    pub fn all() -> &'static [WikiType] {
        &[
            WikiType::Article,
            WikiType::Guide,
            WikiType::Faq,
            WikiType::Announcement,
        ]
    }
}

impl fmt::Display for WikiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown wiki type name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown wiki type: {0}")]
pub struct ParseWikiTypeError(pub String);

impl FromStr for WikiType {
    type Err = ParseWikiTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(WikiType::Article),
            "guide" => Ok(WikiType::Guide),
            "faq" => Ok(WikiType::Faq),
            "announcement" => Ok(WikiType::Announcement),
            other => Err(ParseWikiTypeError(other.to_string())),
        }
    }
}

/// Apply the type filter to the full entry set; `None` keeps everything.
fn filter_entries(items: &[WikiItem], wiki_type: Option<WikiType>) -> Vec<WikiItem> {
    items
        .iter()
        .filter(|item| wiki_type.map(|t| item.wiki_type == t).unwrap_or(true))
        .cloned()
        .collect()
}

/// Knowledge-base list with type filter tabs
#[component]
pub fn NxWikiList(
    #[prop(into)] items: Vec<WikiItem>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let (type_filter, set_type_filter) = create_signal(Option::<WikiType>::None);
    let now = Utc::now();

    let all_items = items;
    let filtered = move || filter_entries(&all_items, type_filter.get());

    view! {
        <div class="bg-theme-surface rounded-xl border border-theme-border overflow-hidden">
            <div class="px-4 pt-4">
                <h2 class="text-lg font-semibold text-theme">"Knowledge Base"</h2>
            </div>

            // Type filter tabs
            <div class="flex gap-1 px-4 py-3 border-b border-theme-border">
                <button
                    class=move || tab_class(type_filter.get().is_none())
                    on:click=move |_| set_type_filter.set(None)
                >
                    "All"
                </button>
                {WikiType::all().iter().map(|&t| {
                    view! {
                        <button
                            class=move || tab_class(type_filter.get() == Some(t))
                            on:click=move |_| set_type_filter.set(Some(t))
                        >
                            {t.label()}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>

            {move || {
                let list = filtered();
                if list.is_empty() {
                    view! {
                        <div class="p-8 text-center">
                            <p class="text-theme-secondary">"No entries found"</p>
                            <p class="text-sm text-theme-muted mt-1">"Try a different type filter"</p>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="divide-y divide-theme-border">
                            {list.into_iter().map(|item| view! {
                                <WikiRow item=item now=now on_select=on_select />
                            }).collect::<Vec<_>>()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

fn tab_class(selected: bool) -> &'static str {
    if selected {
        "px-3 py-1.5 text-sm font-medium rounded-md bg-accent text-white transition-colors"
    } else {
        "px-3 py-1.5 text-sm font-medium rounded-md text-theme-secondary hover:text-theme transition-colors"
    }
}

#[component]
fn WikiRow(
    item: WikiItem,
    now: DateTime<Utc>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let WikiItem { id, title, wiki_type, author, updated_at, views } = item;
    let select_id = id;

    view! {
        <div
            class="flex items-center gap-3 px-4 py-3 hover:bg-theme-surface-hover transition-colors cursor-pointer"
            on:click=move |_| on_select.call(select_id.clone())
        >
            <span class=format!("px-2 py-0.5 text-xs rounded-full border {}", wiki_type.badge_class())>
                {wiki_type.label()}
            </span>
            <div class="flex-1 min-w-0">
                <p class="text-sm text-theme truncate">{title}</p>
                <div class="flex items-center gap-2 mt-0.5 text-xs text-theme-muted">
                    {author.map(|a| view! { <span>{a}</span> })}
                    <span>{relative_time(updated_at, now)}</span>
                </div>
            </div>
            <span class="text-xs text-theme-secondary">{compact_count(views)} " views"</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, wiki_type: WikiType) -> WikiItem {
        WikiItem {
            id: id.to_string(),
            title: id.to_string(),
            wiki_type,
            author: None,
            updated_at: Utc::now(),
            views: 0,
        }
    }

    #[test]
    fn test_filter_entries_by_type() {
        let items = vec![
            entry("kb-1", WikiType::Guide),
            entry("kb-2", WikiType::Article),
            entry("kb-3", WikiType::Guide),
        ];

        let guides = filter_entries(&items, Some(WikiType::Guide));
        let ids: Vec<&str> = guides.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["kb-1", "kb-3"]);

        assert!(filter_entries(&items, Some(WikiType::Faq)).is_empty());
        assert_eq!(filter_entries(&items, None).len(), 3);
    }

    #[test]
    fn test_wiki_type_parse_roundtrip() {
        for &t in WikiType::all() {
            assert_eq!(t.as_str().parse::<WikiType>().unwrap(), t);
        }
    }

    #[test]
    fn test_wiki_type_parse_unknown() {
        let err = "memo".parse::<WikiType>().unwrap_err();
        assert_eq!(err, ParseWikiTypeError("memo".to_string()));
        assert_eq!(err.to_string(), "unknown wiki type: memo");
    }

    #[test]
    fn test_wiki_type_display_matches_serde() {
        for &t in WikiType::all() {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t));
        }
    }

    #[test]
    fn test_wiki_item_minimal_json() {
        let json = r#"{
            "id": "kb-101",
            "title": "Expense policy",
            "wiki_type": "announcement",
            "updated_at": "2026-08-20T08:00:00Z"
        }"#;

        let item: WikiItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.wiki_type, WikiType::Announcement);
        assert_eq!(item.author, None);
        assert_eq!(item.views, 0);
    }
}
