/// Core type definitions used across the framework

/// Tab enum for main navigation
///
/// Each tab hosts exactly one view; only the active tab's view is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    RecentGames,
    Season,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::RecentGames, Tab::Season];

    /// Label shown in the tab bar
    pub fn label(self) -> &'static str {
        match self {
            Tab::RecentGames => "Recent Games",
            Tab::Season => "Season Averages",
        }
    }

    /// Position in the tab bar
    pub fn index(self) -> usize {
        match self {
            Tab::RecentGames => 0,
            Tab::Season => 1,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}
