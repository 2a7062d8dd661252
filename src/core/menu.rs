/// Open/closed state of the mobile navigation menu.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Background scrolling is disabled while the menu is open.
    #[inline]
    pub fn locks_scroll(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// User actions and layout changes the menu reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuTrigger {
    Toggle,
    Close,
    LinkClick,
    /// Click that landed on the menu container itself, not a descendant.
    Backdrop,
    Escape,
    /// The viewport grew past the compact breakpoint.
    LeftCompact,
}

#[derive(Default, Debug)]
pub struct MenuMachine {
    state: MenuState,
}

impl MenuMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Apply `trigger` and return the new state if it changed.
    pub fn handle(&mut self, trigger: MenuTrigger) -> Option<MenuState> {
        let next = match (trigger, self.state) {
            (MenuTrigger::Toggle, MenuState::Closed) => MenuState::Open,
            (MenuTrigger::Toggle, MenuState::Open) => MenuState::Closed,
            (_, MenuState::Open) => MenuState::Closed,
            (_, MenuState::Closed) => return None,
        };
        self.state = next;
        Some(next)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    Wide,
}

/// Tracks which side of the compact breakpoint the viewport is on.
#[derive(Debug)]
pub struct ResponsiveLayout {
    breakpoint_px: f64,
    mode: Option<LayoutMode>,
}

impl ResponsiveLayout {
    pub fn new(breakpoint_px: f64) -> Self {
        Self {
            breakpoint_px,
            mode: None,
        }
    }

    #[inline]
    pub fn mode_for_width(&self, width: f64) -> LayoutMode {
        if width <= self.breakpoint_px {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    /// Current mode; `Wide` until the first measurement.
    pub fn mode(&self) -> LayoutMode {
        self.mode.unwrap_or(LayoutMode::Wide)
    }

    /// Record a viewport width. Returns the mode when it differs from the
    /// previous measurement (or on the first one), `None` otherwise.
    pub fn measure(&mut self, width: f64) -> Option<LayoutMode> {
        let next = self.mode_for_width(width);
        match self.mode.replace(next) {
            Some(prev) if prev == next => None,
            _ => Some(next),
        }
    }
}
