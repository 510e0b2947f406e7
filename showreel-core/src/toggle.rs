//! Page-level toggles: the mobile menu and gallery expansion
//!
//! Each toggle belongs to the one component instance that renders it.

/// Mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Flips the menu between open and closed.
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// Closes the menu, e.g. after a link in it was followed.
    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    /// State reached by pressing the menu button from this state.
    pub fn toggled(self) -> Self {
        let mut next = self;
        next.toggle();
        next
    }

    /// Fragment name used for this state.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuState::Closed => "closed",
            MenuState::Open => "open",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "closed" => Some(MenuState::Closed),
            "open" => Some(MenuState::Open),
            _ => None,
        }
    }
}

/// "Show all" state of a gallery with a limited initial view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded,
}

impl Expansion {
    pub fn as_str(self) -> &'static str {
        match self {
            Expansion::Collapsed => "collapsed",
            Expansion::Expanded => "expanded",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "collapsed" => Some(Expansion::Collapsed),
            "expanded" => Some(Expansion::Expanded),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Expansion::Collapsed => Expansion::Expanded,
            Expansion::Expanded => Expansion::Collapsed,
        }
    }
}

/// Gallery view limited to the first `initial_visible` entries until expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryExpansion {
    initial_visible: usize,
    state: Expansion,
}

impl GalleryExpansion {
    pub fn new(initial_visible: usize) -> Self {
        Self {
            initial_visible,
            state: Expansion::Collapsed,
        }
    }

    pub fn with_state(initial_visible: usize, state: Expansion) -> Self {
        Self {
            initial_visible,
            state,
        }
    }

    pub fn state(&self) -> Expansion {
        self.state
    }

    pub fn initial_visible(&self) -> usize {
        self.initial_visible
    }

    pub fn toggle(&mut self) {
        self.state = self.state.toggled();
    }

    /// Entries shown in the current state.
    pub fn visible<'a, T>(&self, entries: &'a [T]) -> &'a [T] {
        match self.state {
            Expansion::Expanded => entries,
            Expansion::Collapsed => self.preview(entries),
        }
    }

    /// Entries shown in both states. Toggling never touches these.
    pub fn preview<'a, T>(&self, entries: &'a [T]) -> &'a [T] {
        &entries[..entries.len().min(self.initial_visible)]
    }

    /// Entries shown after the preview in the current state; empty while
    /// collapsed.
    pub fn remainder<'a, T>(&self, entries: &'a [T]) -> &'a [T] {
        match self.state {
            Expansion::Expanded => &entries[self.preview(entries).len()..],
            Expansion::Collapsed => &[],
        }
    }

    /// Whether a "show all" control makes sense for a list of this length.
    pub fn is_truncating(&self, total: usize) -> bool {
        total > self.initial_visible
    }

    /// Number of entries hidden in the current state.
    pub fn hidden_count(&self, total: usize) -> usize {
        match self.state {
            Expansion::Expanded => 0,
            Expansion::Collapsed => total.saturating_sub(self.initial_visible),
        }
    }
}
