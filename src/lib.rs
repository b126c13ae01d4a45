//! Nexus Design-System Components
//!
//! Shared UI building blocks for Nexus portal surfaces: dashboard cards,
//! status widgets, and the `Nx` list family. Every component is
//! presentational; data arrives through typed props and selections leave
//! through callbacks, while fetching, routing, and page layout stay with
//! the consuming application.
//!
//! The crate root is the import surface. Consumers use the re-exports
//! below rather than reaching into the module paths:
//!
//! ```
//! use nexus_ui::{StatsCards, StatItem};
//! ```

pub mod components;
mod format;
pub mod showcase;

pub use components::stats_cards::{StatItem, StatsCards};
pub use components::system_status::{StatusItem, StatusLevel, SystemStatus};
pub use components::insight_cards::{InsightCards, InsightItem};

// List components
pub use components::wiki_list::{NxWikiList, WikiItem, WikiType};
pub use components::contact_list::{ContactItem, DeptItem, NxContactList};
pub use components::meeting_list::{MeetingItem, NxMeetingList};
pub use components::workflow_list::{NxWorkflowList, WorkflowItem, WorkflowStat, WorkflowState};
