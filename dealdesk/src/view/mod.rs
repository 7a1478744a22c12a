//! Screen state for the dashboard, one module per screen.
//!
//! Nothing here draws. Each type holds what its screen shows and exposes the
//! user actions as methods; `render` turns the details snapshot into text.

/// Top-level application state.
pub mod app;
/// Create-project modal.
pub mod create;
/// Dashboard sections and project cards.
pub mod dashboard;
/// Navigation bar.
pub mod header;
/// Plain-text renderers for the project details panel.
pub mod render;
/// Login form and the unverified session.
pub mod session;

pub use app::{App, Screen};
pub use create::{CreateProjectForm, FormErrors};
pub use dashboard::{Avatar, DashboardView, FinancialOverview, ProjectCard};
pub use header::{HeaderAction, HeaderView, NavItem};
pub use session::{LoginForm, Session, User};
