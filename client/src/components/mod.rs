//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome, chat entries, and dashboard panels from
//! values handed down by the pages; none of them own remote data.

pub mod alert_list;
pub mod chat_message;
pub mod health_banner;
pub mod nav_bar;
pub mod risk_table;
pub mod stat_card;
pub mod suggestion_list;
pub mod supplier_table;
