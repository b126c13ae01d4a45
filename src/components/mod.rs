//! Portal UI Components
//!
//! One module per component, each declaring the component function next to
//! its companion item types:
//! - `stats_cards`: key-figure card grid
//! - `system_status`: subsystem health panel
//! - `insight_cards`: analytics insight cards
//! - `wiki_list`: knowledge-base list
//! - `contact_list`: company directory
//! - `meeting_list`: meeting schedule
//! - `workflow_list`: approval inbox

pub mod stats_cards;
pub mod system_status;
pub mod insight_cards;
pub mod wiki_list;
pub mod contact_list;
pub mod meeting_list;
pub mod workflow_list;
