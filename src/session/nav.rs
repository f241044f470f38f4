use super::Session;

/// Which screen the interactive loop should render next. Derived from the
/// session fields, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    RoleSelect,
    Main,
}

impl Session {
    pub fn screen(&self) -> Screen {
        if !self.logged_in {
            Screen::Login
        } else if self.role.is_none() {
            Screen::RoleSelect
        } else {
            Screen::Main
        }
    }

    /// Consumes the one-shot welcome banner. True exactly once after a
    /// successful login, a no-op afterwards.
    pub fn take_banner(&mut self) -> bool {
        std::mem::take(&mut self.banner_pending)
    }
}
