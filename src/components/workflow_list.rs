//! Workflow List Component
//!
//! Approval inbox with summary stat pills and per-item state badges.

use chrono::{DateTime, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::format::relative_time;

/// An approval item rendered by [`NxWorkflowList`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowItem {
    pub id: String,
    pub title: String,
    /// Workflow kind ("Expense", "Leave", "Procurement").
    pub category: String,
    pub state: WorkflowState,
    pub submitter: Option<String>,
    pub submitted_at: DateTime<Utc>,
    /// Name of the step the item currently sits at.
    pub current_step: Option<String>,
}

/// Approval state of a workflow item
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowState {
    #[default]
    Pending,
    Approved,
    Rejected,
    Returned,
}

impl WorkflowState {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowState::Pending => "Pending",
            WorkflowState::Approved => "Approved",
            WorkflowState::Rejected => "Rejected",
            WorkflowState::Returned => "Returned",
        }
    }

    /// CSS classes for the state badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            WorkflowState::Pending => "bg-amber-500/20 text-amber-400 border-amber-500/30",
            WorkflowState::Approved => "bg-green-500/20 text-green-400 border-green-500/30",
            WorkflowState::Rejected => "bg-red-500/20 text-red-400 border-red-500/30",
            WorkflowState::Returned => "bg-blue-500/20 text-blue-400 border-blue-500/30",
        }
    }
}

/// A pre-aggregated summary figure shown above the list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStat {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub count: u32,
}

/// Approval inbox with summary pills
#[component]
pub fn NxWorkflowList(
    #[prop(into)] stats: Vec<WorkflowStat>,
    #[prop(into)] items: Vec<WorkflowItem>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let now = Utc::now();

    view! {
        <div class="bg-theme-surface rounded-xl border border-theme-border overflow-hidden">
            <div class="px-4 pt-4">
                <h2 class="text-lg font-semibold text-theme">"Approvals"</h2>
            </div>

            // Summary pills
            {(!stats.is_empty()).then(|| view! {
                <div class="flex flex-wrap gap-2 px-4 py-3">
                    {stats.into_iter().map(|stat| view! {
                        <div class="flex items-center gap-2 px-3 py-1.5 bg-theme-surface-hover rounded-full">
                            <span class="text-sm font-semibold text-theme">{stat.count}</span>
                            <span class="text-xs text-theme-secondary">{stat.label}</span>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            })}

            {if items.is_empty() {
                view! {
                    <div class="p-8 text-center">
                        <p class="text-theme-secondary">"Nothing waiting for you"</p>
                        <p class="text-sm text-theme-muted mt-1">"Items that need your approval will appear here"</p>
                    </div>
                }.into_view()
            } else {
                view! {
                    <div class="divide-y divide-theme-border border-t border-theme-border">
                        {items.into_iter().map(|item| view! {
                            <WorkflowRow item=item now=now on_select=on_select />
                        }).collect::<Vec<_>>()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn WorkflowRow(
    item: WorkflowItem,
    now: DateTime<Utc>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let WorkflowItem { id, title, category, state, submitter, submitted_at, current_step } = item;
    let select_id = id;

    view! {
        <div
            class="flex items-center gap-3 px-4 py-3 hover:bg-theme-surface-hover transition-colors cursor-pointer"
            on:click=move |_| on_select.call(select_id.clone())
        >
            <span class=format!("px-2 py-0.5 text-xs rounded-full border {}", state.badge_class())>
                {state.label()}
            </span>
            <div class="flex-1 min-w-0">
                <p class="text-sm text-theme truncate">{title}</p>
                <div class="flex items-center gap-2 mt-0.5 text-xs text-theme-muted">
                    <span>{category}</span>
                    {submitter.map(|s| view! { <span>"from " {s}</span> })}
                    <span>{relative_time(submitted_at, now)}</span>
                </div>
            </div>
            {current_step.map(|step| view! {
                <span class="text-xs text-theme-secondary">{step}</span>
            })}
        </div>
    }
}
