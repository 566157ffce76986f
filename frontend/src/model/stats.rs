/// Summary card shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub title: String,
    pub value: String,
    pub change: String,
    /// Font Awesome class, e.g. `fas fa-users`.
    pub icon: String,
    pub color: TileColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileColor {
    Primary,
    Green,
    Amber,
    Accent,
}

impl TileColor {
    pub fn icon_classes(&self) -> &'static str {
        match self {
            TileColor::Primary => "bg-primary/10 text-primary",
            TileColor::Green => "bg-green-100 text-green-600 dark:bg-green-900/30 dark:text-green-400",
            TileColor::Amber => "bg-amber-100 text-amber-600 dark:bg-amber-900/30 dark:text-amber-400",
            TileColor::Accent => "bg-accent/10 text-accent",
        }
    }
}

impl StatTile {
    pub fn is_negative_change(&self) -> bool {
        self.change.trim_start().starts_with('-')
    }
}
