//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by view (`chat`, `dashboard`, `health`, `ui`) so each page
//! owns and mutates only its own model. Transitions are plain methods so the
//! rules can be tested without a browser.

pub mod chat;
pub mod dashboard;
pub mod health;
pub mod ui;
