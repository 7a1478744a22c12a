use std::sync::Arc;

use dealdesk_core::{DeskError, Project, ProjectId};

use super::create::CreateProjectForm;
use super::dashboard::DashboardView;
use super::header::HeaderView;
use super::session::{LoginForm, Session};
use crate::Desk;
use crate::details::ProjectDetails;

/// Which screen fills the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Login form.
    Login,
    /// Dashboard and project cards.
    Dashboard,
    /// Full-screen project details.
    Details,
}

/// Top-level state: session, project list, modal and opened project.
pub struct App {
    desk: Arc<Desk>,
    session: Session,
    projects: Vec<Project>,
    create: Option<CreateProjectForm>,
    selected: Option<ProjectDetails>,
}

impl App {
    /// Logged-out app over `desk`.
    #[must_use]
    pub fn new(desk: Arc<Desk>) -> Self {
        Self {
            desk,
            session: Session::new(),
            projects: Vec::new(),
            create: None,
            selected: None,
        }
    }

    /// Current screen.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        if !self.session.is_logged_in() {
            Screen::Login
        } else if self.selected.is_some() {
            Screen::Details
        } else {
            Screen::Dashboard
        }
    }

    /// Session state.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Projects as last loaded from the store.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Header for the current session.
    #[must_use]
    pub fn header(&self) -> HeaderView {
        HeaderView::for_session(&self.session)
    }

    /// Dashboard over the loaded projects.
    #[must_use]
    pub fn dashboard(&self) -> DashboardView {
        DashboardView::new(&self.projects)
    }

    /// Submit `form`; on success log in and load the project list.
    pub fn login(&mut self, form: &mut LoginForm) -> bool {
        let Some(user) = form.submit() else {
            return false;
        };
        self.session.login(user);
        self.fetch_projects();
        true
    }

    /// Log out and drop the opened project, which stops its refresh.
    pub fn logout(&mut self) {
        self.selected = None;
        self.create = None;
        self.session.logout();
    }

    /// Reload the project list from the store.
    pub fn fetch_projects(&mut self) {
        self.projects = self.desk.store().get_projects();
        tracing::debug!(count = self.projects.len(), "projects loaded");
    }

    /// Open the create-project modal with a blank form.
    pub fn open_create(&mut self) {
        self.create = Some(CreateProjectForm::new());
    }

    /// Dismiss the modal without saving.
    pub fn close_create(&mut self) {
        self.create = None;
    }

    /// The open modal, if any.
    pub fn create_form(&mut self) -> Option<&mut CreateProjectForm> {
        self.create.as_mut()
    }

    /// Submit the modal.
    ///
    /// Returns `Ok(None)` while the form is closed or has validation errors.
    /// On success the project is appended to the list and the modal closes.
    ///
    /// # Errors
    /// Propagates store errors (malformed tickers); the modal stays open.
    pub fn save_project(&mut self) -> Result<Option<Project>, DeskError> {
        let Some(payload) = self.create.as_mut().and_then(CreateProjectForm::submit) else {
            return Ok(None);
        };
        let project = self
            .desk
            .store()
            .create_project(payload)
            .inspect_err(|e| tracing::error!(error = %e, "error creating project"))?;
        self.projects.push(project.clone());
        self.create = None;
        Ok(Some(project))
    }

    /// Open project `id` full screen, closing any project already open.
    ///
    /// # Errors
    /// Returns `NotFound` if `id` is not in the loaded list.
    pub async fn view_project(&mut self, id: &ProjectId) -> Result<(), DeskError> {
        let project = self
            .projects
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| DeskError::not_found(format!("project {id}")))?;
        self.close_project().await;
        self.selected = Some(ProjectDetails::open(Arc::clone(&self.desk), project).await);
        Ok(())
    }

    /// The opened project.
    #[must_use]
    pub const fn details(&self) -> Option<&ProjectDetails> {
        self.selected.as_ref()
    }

    /// Close the opened project and wait for its refresh task to stop.
    pub async fn close_project(&mut self) {
        if let Some(details) = self.selected.take() {
            details.close().await;
        }
    }
}
