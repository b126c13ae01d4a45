//! Component Showcase
//!
//! A gallery page that renders every component with sample data. The
//! binary mounts this view; it doubles as a living preview while styling.

use chrono::{Duration, Utc};
use leptos::*;

use crate::components::contact_list::{ContactItem, DeptItem, NxContactList};
use crate::components::insight_cards::{InsightCards, InsightItem};
use crate::components::meeting_list::{MeetingItem, NxMeetingList};
use crate::components::stats_cards::{StatItem, StatsCards};
use crate::components::system_status::{StatusItem, StatusLevel, SystemStatus};
use crate::components::wiki_list::{NxWikiList, WikiItem, WikiType};
use crate::components::workflow_list::{NxWorkflowList, WorkflowItem, WorkflowStat, WorkflowState};

/// Gallery of every component with sample data
#[component]
pub fn Showcase() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-bg p-6">
            <div class="max-w-5xl mx-auto space-y-8">
                <div>
                    <h1 class="text-2xl font-bold text-theme">"Nexus UI"</h1>
                    <p class="text-theme-secondary mt-1">"Design-system component preview"</p>
                </div>

                <Section title="Stats cards">
                    <StatsCards
                        items=sample_stats()
                        on_select=Callback::new(|id: String| tracing::info!("stat selected: {}", id))
                    />
                </Section>

                <Section title="System status">
                    <SystemStatus items=sample_status() />
                </Section>

                <Section title="Insight cards">
                    <InsightCards
                        items=sample_insights()
                        on_open=Callback::new(|id: String| tracing::info!("insight opened: {}", id))
                    />
                </Section>

                <Section title="Wiki list">
                    <NxWikiList
                        items=sample_wiki()
                        on_select=Callback::new(|id: String| tracing::info!("wiki entry selected: {}", id))
                    />
                </Section>

                <Section title="Contact list">
                    <NxContactList
                        contacts=sample_contacts()
                        depts=sample_depts()
                        on_select=Callback::new(|id: String| tracing::info!("contact selected: {}", id))
                    />
                </Section>

                <Section title="Meeting list">
                    <NxMeetingList
                        items=sample_meetings()
                        on_select=Callback::new(|id: String| tracing::info!("meeting selected: {}", id))
                    />
                </Section>

                <Section title="Workflow list">
                    <NxWorkflowList
                        stats=sample_workflow_stats()
                        items=sample_workflows()
                        on_select=Callback::new(|id: String| tracing::info!("workflow item selected: {}", id))
                    />
                </Section>
            </div>
        </div>
    }
}

#[component]
fn Section(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section>
            <h2 class="text-sm font-medium text-theme-muted uppercase tracking-wider mb-3">{title}</h2>
            {children()}
        </section>
    }
}

fn sample_stats() -> Vec<StatItem> {
    vec![
        StatItem {
            id: "active-users".into(),
            label: "Active users".into(),
            value: "1,284".into(),
            unit: None,
            trend: Some(12.4),
        },
        StatItem {
            id: "open-approvals".into(),
            label: "Open approvals".into(),
            value: "6".into(),
            unit: None,
            trend: Some(-25.0),
        },
        StatItem {
            id: "wiki-views".into(),
            label: "Wiki views".into(),
            value: "48.2".into(),
            unit: Some("k".into()),
            trend: Some(3.8),
        },
        StatItem {
            id: "uptime".into(),
            label: "Uptime".into(),
            value: "99.98".into(),
            unit: Some("%".into()),
            trend: None,
        },
    ]
}

fn sample_status() -> Vec<StatusItem> {
    vec![
        StatusItem {
            id: "sso".into(),
            name: "Single sign-on".into(),
            level: StatusLevel::Operational,
            detail: None,
            latency_ms: Some(42),
        },
        StatusItem {
            id: "mail".into(),
            name: "Mail gateway".into(),
            level: StatusLevel::Degraded,
            detail: Some("Delivery delayed up to 10 minutes".into()),
            latency_ms: Some(870),
        },
        StatusItem {
            id: "docs".into(),
            name: "Document storage".into(),
            level: StatusLevel::Operational,
            detail: None,
            latency_ms: Some(118),
        },
        StatusItem {
            id: "search".into(),
            name: "Search index".into(),
            level: StatusLevel::Operational,
            detail: None,
            latency_ms: None,
        },
    ]
}

fn sample_insights() -> Vec<InsightItem> {
    let now = Utc::now();
    vec![
        InsightItem {
            id: "ins-1".into(),
            title: "Login spike on Monday".into(),
            summary: "Sign-ins doubled after the quarterly letter went out; capacity held up.".into(),
            tags: vec!["auth".into(), "traffic".into()],
            timestamp: Some(now - Duration::hours(3)),
        },
        InsightItem {
            id: "ins-2".into(),
            title: "Stale wiki pages".into(),
            summary: "14 guides have not been updated in six months and still rank in search.".into(),
            tags: vec!["wiki".into(), "content".into()],
            timestamp: Some(now - Duration::days(1)),
        },
        InsightItem {
            id: "ins-3".into(),
            title: "Approval backlog shrinking".into(),
            summary: "Median time to approve an expense dropped from 3 days to 1.2 days.".into(),
            tags: vec!["workflow".into()],
            timestamp: Some(now - Duration::days(2)),
        },
    ]
}

fn sample_wiki() -> Vec<WikiItem> {
    let now = Utc::now();
    vec![
        WikiItem {
            id: "kb-101".into(),
            title: "Expense policy 2026".into(),
            wiki_type: WikiType::Announcement,
            author: Some("Finance team".into()),
            updated_at: now - Duration::hours(2),
            views: 4_820,
        },
        WikiItem {
            id: "kb-88".into(),
            title: "Setting up VPN access".into(),
            wiki_type: WikiType::Guide,
            author: Some("IT helpdesk".into()),
            updated_at: now - Duration::days(3),
            views: 12_400,
        },
        WikiItem {
            id: "kb-54".into(),
            title: "How performance reviews work".into(),
            wiki_type: WikiType::Faq,
            author: None,
            updated_at: now - Duration::days(12),
            views: 980,
        },
        WikiItem {
            id: "kb-23".into(),
            title: "Architecture of the billing pipeline".into(),
            wiki_type: WikiType::Article,
            author: Some("Mira Vasquez".into()),
            updated_at: now - Duration::days(30),
            views: 310,
        },
    ]
}

fn sample_depts() -> Vec<DeptItem> {
    vec![
        DeptItem { id: "eng".into(), name: "Engineering".into() },
        DeptItem { id: "people".into(), name: "People".into() },
        DeptItem { id: "finance".into(), name: "Finance".into() },
    ]
}

fn sample_contacts() -> Vec<ContactItem> {
    vec![
        ContactItem {
            id: "c-1".into(),
            name: "Mira Vasquez".into(),
            title: Some("Staff Engineer".into()),
            dept_id: Some("eng".into()),
            email: Some("mira@nexus.example".into()),
            phone: None,
        },
        ContactItem {
            id: "c-2".into(),
            name: "Jonas Ek".into(),
            title: Some("Platform Lead".into()),
            dept_id: Some("eng".into()),
            email: Some("jonas@nexus.example".into()),
            phone: Some("+46 70 123 45 67".into()),
        },
        ContactItem {
            id: "c-3".into(),
            name: "Priya Natarajan".into(),
            title: Some("People Partner".into()),
            dept_id: Some("people".into()),
            email: Some("priya@nexus.example".into()),
            phone: None,
        },
        ContactItem {
            id: "c-4".into(),
            name: "Tomás Oliveira".into(),
            title: Some("Controller".into()),
            dept_id: Some("finance".into()),
            email: Some("tomas@nexus.example".into()),
            phone: Some("+351 21 555 0199".into()),
        },
        ContactItem {
            id: "c-5".into(),
            name: "Ana Kovač".into(),
            title: None,
            dept_id: None,
            email: Some("ana@nexus.example".into()),
            phone: None,
        },
    ]
}

fn sample_meetings() -> Vec<MeetingItem> {
    let now = Utc::now();
    vec![
        MeetingItem {
            id: "m-1".into(),
            title: "Platform weekly".into(),
            location: Some("Room 4A".into()),
            start_time: now - Duration::minutes(10),
            end_time: now + Duration::minutes(20),
            organizer: Some("Jonas Ek".into()),
            attendees: 9,
        },
        MeetingItem {
            id: "m-2".into(),
            title: "Design review: approvals v2".into(),
            location: Some("Video call".into()),
            start_time: now + Duration::hours(2),
            end_time: now + Duration::hours(3),
            organizer: Some("Mira Vasquez".into()),
            attendees: 6,
        },
        MeetingItem {
            id: "m-3".into(),
            title: "All hands".into(),
            location: Some("Auditorium".into()),
            start_time: now + Duration::hours(26),
            end_time: now + Duration::hours(27),
            organizer: None,
            attendees: 240,
        },
    ]
}

fn sample_workflow_stats() -> Vec<WorkflowStat> {
    vec![
        WorkflowStat { key: "pending".into(), label: "Pending".into(), count: 6 },
        WorkflowStat { key: "approved-week".into(), label: "Approved this week".into(), count: 18 },
        WorkflowStat { key: "returned".into(), label: "Returned".into(), count: 2 },
    ]
}

fn sample_workflows() -> Vec<WorkflowItem> {
    let now = Utc::now();
    vec![
        WorkflowItem {
            id: "wf-31".into(),
            title: "Team offsite budget".into(),
            category: "Expense".into(),
            state: WorkflowState::Pending,
            submitter: Some("Priya Natarajan".into()),
            submitted_at: now - Duration::hours(5),
            current_step: Some("Finance review".into()),
        },
        WorkflowItem {
            id: "wf-29".into(),
            title: "Parental leave request".into(),
            category: "Leave".into(),
            state: WorkflowState::Approved,
            submitter: Some("Jonas Ek".into()),
            submitted_at: now - Duration::days(1),
            current_step: None,
        },
        WorkflowItem {
            id: "wf-27".into(),
            title: "New monitor for onboarding desk".into(),
            category: "Procurement".into(),
            state: WorkflowState::Returned,
            submitter: Some("Ana Kovač".into()),
            submitted_at: now - Duration::days(2),
            current_step: Some("Needs quote attached".into()),
        },
        WorkflowItem {
            id: "wf-22".into(),
            title: "Conference travel".into(),
            category: "Expense".into(),
            state: WorkflowState::Rejected,
            submitter: Some("Tomás Oliveira".into()),
            submitted_at: now - Duration::days(4),
            current_step: None,
        },
    ]
}
