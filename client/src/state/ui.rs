//! Shell view selection.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// The page shown in the shell's main area. Exactly one is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Chat,
    Dashboard,
}

impl ActiveView {
    pub const ALL: [Self; 2] = [Self::Chat, Self::Dashboard];

    pub fn label(self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Dashboard => "Dashboard",
        }
    }
}
