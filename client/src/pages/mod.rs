//! Page modules for the shell and its two views.
//!
//! ARCHITECTURE
//! ============
//! `shell` owns health and view selection; `chat` and `dashboard` each drive
//! their own fetches and delegate rendering details to `components`.

pub mod chat;
pub mod dashboard;
pub mod shell;
