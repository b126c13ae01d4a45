//! Contact List Component
//!
//! Company directory with a department rail and name search.

use leptos::*;
use serde::{Deserialize, Serialize};

/// A directory entry rendered by [`NxContactList`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactItem {
    pub id: String,
    pub name: String,
    /// Job title, not to be confused with the department name.
    pub title: Option<String>,
    pub dept_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactItem {
    /// Uppercase initials for the avatar circle ("Mira Vasquez" gives "MV").
    pub fn initials(&self) -> String {
        let mut letters = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase();
        if letters.is_empty() {
            letters.push('?');
        }
        letters
    }

    /// Case-insensitive match against name, job title, and email.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.title.as_ref().map(|t| t.to_lowercase().contains(&q)).unwrap_or(false)
            || self.email.as_ref().map(|e| e.to_lowercase().contains(&q)).unwrap_or(false)
    }
}

/// A department shown in the rail of [`NxContactList`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeptItem {
    pub id: String,
    pub name: String,
}

/// Pair each department with the number of contacts assigned to it.
fn dept_counts(depts: Vec<DeptItem>, contacts: &[ContactItem]) -> Vec<(String, String, usize)> {
    depts
        .into_iter()
        .map(|d| {
            let count = contacts
                .iter()
                .filter(|c| c.dept_id.as_deref() == Some(d.id.as_str()))
                .count();
            (d.id, d.name, count)
        })
        .collect()
}

/// Apply the search query and department filter to the full contact set.
fn filter_contacts(
    contacts: &[ContactItem],
    query: &str,
    dept_id: Option<&str>,
) -> Vec<ContactItem> {
    contacts
        .iter()
        .filter(|c| c.matches(query))
        .filter(|c| dept_id.map(|d| c.dept_id.as_deref() == Some(d)).unwrap_or(true))
        .cloned()
        .collect()
}

/// Directory browser with department rail and search
#[component]
pub fn NxContactList(
    #[prop(into)] contacts: Vec<ContactItem>,
    #[prop(into)] depts: Vec<DeptItem>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let (search, set_search) = create_signal(String::new());
    let (dept_filter, set_dept_filter) = create_signal(Option::<String>::None);

    let total = contacts.len();
    let dept_rail = dept_counts(depts, &contacts);

    let all_contacts = contacts;
    let filtered = move || {
        let q = search.get();
        let dept = dept_filter.get();
        filter_contacts(&all_contacts, &q, dept.as_deref())
    };

    view! {
        <div class="bg-theme-surface rounded-xl border border-theme-border overflow-hidden">
            <div class="flex items-center justify-between px-4 py-4 border-b border-theme-border">
                <h2 class="text-lg font-semibold text-theme">"People"</h2>
                <input
                    type="text"
                    class="input max-w-xs"
                    placeholder="Search people..."
                    prop:value=move || search.get()
                    on:input=move |e| set_search.set(event_target_value(&e))
                />
            </div>

            <div class="flex">
                // Department rail
                <div class="w-48 flex-shrink-0 border-r border-theme-border p-2 space-y-1">
                    <button
                        class=move || rail_class(dept_filter.get().is_none())
                        on:click=move |_| set_dept_filter.set(None)
                    >
                        <span class="flex-1 text-left truncate">"All departments"</span>
                        <span class="text-xs text-theme-muted">{total}</span>
                    </button>
                    {dept_rail.into_iter().map(|(id, name, count)| {
                        let active_id = id.clone();
                        view! {
                            <button
                                class=move || rail_class(dept_filter.get().as_deref() == Some(active_id.as_str()))
                                on:click=move |_| set_dept_filter.set(Some(id.clone()))
                            >
                                <span class="flex-1 text-left truncate">{name}</span>
                                <span class="text-xs text-theme-muted">{count}</span>
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div class="flex-1 min-w-0">
                    {move || {
                        let list = filtered();
                        if list.is_empty() {
                            view! {
                                <div class="p-8 text-center">
                                    <p class="text-theme-secondary">"No people found"</p>
                                    <p class="text-sm text-theme-muted mt-1">"Try adjusting your search or department filter"</p>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <div class="divide-y divide-theme-border">
                                    {list.into_iter().map(|item| view! {
                                        <ContactRow item=item on_select=on_select />
                                    }).collect::<Vec<_>>()}
                                </div>
                            }.into_view()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

fn rail_class(selected: bool) -> &'static str {
    if selected {
        "w-full flex items-center gap-2 px-3 py-1.5 text-sm rounded-md bg-theme-surface-hover text-theme transition-colors"
    } else {
        "w-full flex items-center gap-2 px-3 py-1.5 text-sm rounded-md text-theme-secondary hover:text-theme transition-colors"
    }
}

#[component]
fn ContactRow(item: ContactItem, #[prop(into)] on_select: Callback<String>) -> impl IntoView {
    let initials = item.initials();
    let ContactItem { id, name, title, email, phone, .. } = item;
    let select_id = id;

    view! {
        <div
            class="flex items-center gap-3 px-4 py-2.5 hover:bg-theme-surface-hover transition-colors cursor-pointer"
            on:click=move |_| on_select.call(select_id.clone())
        >
            <div class="w-8 h-8 rounded-full bg-theme-surface-hover flex items-center justify-center text-xs font-medium text-theme-secondary">
                {initials}
            </div>
            <div class="flex-1 min-w-0">
                <p class="text-sm text-theme truncate">{name}</p>
                {title.map(|t| view! { <p class="text-xs text-theme-muted truncate">{t}</p> })}
            </div>
            <div class="text-right text-xs text-theme-secondary">
                {email.map(|e| view! { <p class="font-mono">{e}</p> })}
                {phone.map(|p| view! { <p class="text-theme-muted">{p}</p> })}
            </div>
        </div>
    }
}
