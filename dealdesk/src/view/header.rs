use super::session::Session;

/// Product name shown in the header.
pub const BRAND: &str = "Assess";

/// Top navigation links. Only the dashboard is wired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItem {
    /// Dashboard, always active.
    Dashboard,
    /// Project list.
    Projects,
    /// Analytics.
    Analytics,
}

impl NavItem {
    /// Links in display order.
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::Projects, Self::Analytics];

    /// Link caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Projects => "Projects",
            Self::Analytics => "Analytics",
        }
    }
}

/// Button on the right side of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    /// Shown when logged out.
    Login,
    /// Shown when logged in.
    Logout,
}

impl HeaderAction {
    /// Button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Logout => "Logout",
        }
    }
}

/// What the header shows for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Name next to the logout button; `None` when logged out.
    pub user_label: Option<String>,
    /// The single action button.
    pub action: HeaderAction,
    /// Highlighted link.
    pub active: NavItem,
}

impl HeaderView {
    /// Header for `session`. A logged-in user with an empty name shows as "User".
    #[must_use]
    pub fn for_session(session: &Session) -> Self {
        match session.user() {
            Some(user) => Self {
                user_label: Some(if user.name.is_empty() {
                    "User".to_string()
                } else {
                    user.name.clone()
                }),
                action: HeaderAction::Logout,
                active: NavItem::Dashboard,
            },
            None => Self {
                user_label: None,
                action: HeaderAction::Login,
                active: NavItem::Dashboard,
            },
        }
    }

    /// One-line text form, e.g. `Assess | [Dashboard] Projects Analytics | ana [Logout]`.
    #[must_use]
    pub fn render(&self) -> String {
        let nav: Vec<String> = NavItem::ALL
            .iter()
            .map(|n| {
                if *n == self.active {
                    format!("[{}]", n.label())
                } else {
                    n.label().to_string()
                }
            })
            .collect();
        let right = match &self.user_label {
            Some(name) => format!("{name} [{}]", self.action.label()),
            None => format!("[{}]", self.action.label()),
        };
        format!("{BRAND} | {} | {right}", nav.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::session::User;

    #[test]
    fn logged_out_header_offers_login() {
        let h = HeaderView::for_session(&Session::new());
        assert_eq!(h.action, HeaderAction::Login);
        assert_eq!(h.render(), "Assess | [Dashboard] Projects Analytics | [Login]");
    }

    #[test]
    fn blank_user_name_falls_back() {
        let mut s = Session::new();
        s.login(User::from_email("@bank.com"));
        let h = HeaderView::for_session(&s);
        assert_eq!(h.user_label.as_deref(), Some("User"));
        assert_eq!(h.action, HeaderAction::Logout);
    }
}
