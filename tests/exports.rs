//! Import-surface tests.
//!
//! Consumers import everything from the crate root, so these tests pin two
//! things: the full set of root re-exports compiles as one import, and each
//! re-exported name is the same item as the one declared in its module.

use nexus_ui::components::{
    contact_list, insight_cards, meeting_list, stats_cards, system_status, wiki_list,
    workflow_list,
};
use nexus_ui::{
    ContactItem, DeptItem, InsightCards, InsightItem, MeetingItem, NxContactList, NxMeetingList,
    NxWikiList, NxWorkflowList, StatItem, StatsCards, StatusItem, StatusLevel, SystemStatus,
    WikiItem, WikiType, WorkflowItem, WorkflowStat, WorkflowState,
};

/// Compiles only if both arguments are the same item.
fn same_item<T>(_: T, _: T) {}

#[test]
fn component_reexports_match_module_items() {
    same_item(StatsCards, stats_cards::StatsCards);
    same_item(SystemStatus, system_status::SystemStatus);
    same_item(InsightCards, insight_cards::InsightCards);
    same_item(NxWikiList, wiki_list::NxWikiList);
    same_item(NxContactList, contact_list::NxContactList);
    same_item(NxMeetingList, meeting_list::NxMeetingList);
    same_item(NxWorkflowList, workflow_list::NxWorkflowList);
}

#[test]
fn stat_item_reexport_matches_module_type() {
    let item: StatItem = stats_cards::StatItem {
        id: "s1".to_string(),
        label: "Active users".to_string(),
        value: "1,284".to_string(),
        unit: None,
        trend: Some(12.4),
    };
    assert_eq!(item.label, "Active users");
}

#[test]
fn status_reexports_match_module_types() {
    let level: StatusLevel = system_status::StatusLevel::Degraded;
    let item: StatusItem = system_status::StatusItem {
        id: "mail".to_string(),
        name: "Mail gateway".to_string(),
        level,
        detail: None,
        latency_ms: Some(870),
    };
    assert_eq!(item.level.label(), "Degraded");
}

#[test]
fn insight_item_reexport_matches_module_type() {
    let item: InsightItem = insight_cards::InsightItem {
        id: "i1".to_string(),
        title: "Login spike".to_string(),
        summary: "Sign-ins doubled this week".to_string(),
        tags: vec!["auth".to_string()],
        timestamp: None,
    };
    assert_eq!(item.tags.len(), 1);
}

#[test]
fn wiki_reexports_match_module_types() {
    let wiki_type: WikiType = wiki_list::WikiType::Guide;
    assert_eq!(wiki_type, "guide".parse::<WikiType>().unwrap());

    let item: WikiItem = serde_json::from_str(
        r#"{
            "id": "kb-88",
            "title": "Setting up VPN access",
            "wiki_type": "guide",
            "updated_at": "2026-08-18T12:00:00Z",
            "views": 12400
        }"#,
    )
    .unwrap();
    assert_eq!(item.wiki_type, wiki_type);
}

#[test]
fn contact_reexports_match_module_types() {
    let dept: DeptItem = contact_list::DeptItem {
        id: "eng".to_string(),
        name: "Engineering".to_string(),
    };
    let contact: ContactItem = contact_list::ContactItem {
        id: "c1".to_string(),
        name: "Mira Vasquez".to_string(),
        title: None,
        dept_id: Some(dept.id.clone()),
        email: None,
        phone: None,
    };
    assert_eq!(contact.dept_id.as_deref(), Some("eng"));
    assert_eq!(contact.initials(), "MV");
}

#[test]
fn meeting_item_reexport_matches_module_type() {
    let item: MeetingItem = serde_json::from_str(
        r#"{
            "id": "m9",
            "title": "All hands",
            "start_time": "2026-08-21T15:00:00Z",
            "end_time": "2026-08-21T16:00:00Z",
            "attendees": 240
        }"#,
    )
    .unwrap();
    let module_view: meeting_list::MeetingItem = item;
    assert_eq!(module_view.attendees, 240);
}

#[test]
fn workflow_reexports_match_module_types() {
    let state: WorkflowState = workflow_list::WorkflowState::Returned;
    let stat: WorkflowStat = workflow_list::WorkflowStat {
        key: "returned".to_string(),
        label: "Returned".to_string(),
        count: 2,
    };
    let item: WorkflowItem = serde_json::from_str(
        r#"{
            "id": "wf-27",
            "title": "New monitor for onboarding desk",
            "category": "Procurement",
            "state": "returned",
            "submitted_at": "2026-08-19T10:00:00Z"
        }"#,
    )
    .unwrap();

    assert_eq!(item.state, state);
    assert_eq!(stat.count, 2);
}
