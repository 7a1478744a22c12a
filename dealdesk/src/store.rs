//! In-memory project list for one session.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, TimeZone, Utc};
use dealdesk_core::{
    Collaborator, CollaboratorId, DeskError, NewCollaborator, NewProject, Project, ProjectId,
    ProjectUpdate, Ticker, parse_tickers,
};

/// Label given to freshly created projects.
pub const JUST_NOW: &str = "Just now";

/// Session-scoped project store.
///
/// Construct one per session and share it by `Arc`. Every operation takes the
/// lock for a short, non-awaiting critical section; failed operations leave
/// the stored list untouched.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Mutex<Vec<Project>>,
}

impl ProjectStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the three demo projects.
    #[must_use]
    pub fn with_sample_data() -> Self {
        Self {
            projects: Mutex::new(sample_projects()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Project>> {
        self.projects.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All projects in insertion order.
    #[must_use]
    pub fn get_projects(&self) -> Vec<Project> {
        self.lock().clone()
    }

    /// Number of stored projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when no project is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Project with `id`, or `None`.
    #[must_use]
    pub fn get_project(&self, id: &ProjectId) -> Option<Project> {
        self.lock().iter().find(|p| &p.id == id).cloned()
    }

    /// Store a new project under a fresh id.
    ///
    /// Tickers are trimmed and uppercased; blank and repeated entries are
    /// dropped. The project starts at 0% with the "Just now" label.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a non-blank ticker contains characters outside
    /// `[A-Z0-9.-]`.
    pub fn create_project(&self, input: NewProject) -> Result<Project, DeskError> {
        let tickers = parse_tickers(&input.tickers)?;
        let project = Project {
            id: ProjectId::generate(),
            name: input.name,
            tickers,
            collaborators: input
                .collaborators
                .into_iter()
                .map(new_collaborator)
                .collect(),
            created_at: Utc::now(),
            last_updated: JUST_NOW.to_string(),
            progress: 0,
        };
        self.lock().push(project.clone());
        tracing::info!(project = %project.id, name = %project.name, "project created");
        Ok(project)
    }

    /// Replace the supplied fields of project `id`.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id and `InvalidArg` for malformed
    /// tickers; the store is unchanged in both cases.
    pub fn update_project(&self, id: &ProjectId, update: ProjectUpdate) -> Result<Project, DeskError> {
        let tickers = update
            .tickers
            .as_deref()
            .map(parse_tickers)
            .transpose()?;

        let mut projects = self.lock();
        let project = projects
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| project_not_found(id))?;

        if let Some(name) = update.name {
            project.name = name;
        }
        if let Some(tickers) = tickers {
            project.tickers = tickers;
        }
        if let Some(collaborators) = update.collaborators {
            project.collaborators = collaborators;
        }
        if let Some(label) = update.last_updated {
            project.last_updated = label;
        }
        if let Some(progress) = update.progress {
            project.progress = progress.min(100);
        }
        Ok(project.clone())
    }

    /// Remove project `id`.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id.
    pub fn delete_project(&self, id: &ProjectId) -> Result<(), DeskError> {
        let mut projects = self.lock();
        let index = projects
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| project_not_found(id))?;
        projects.remove(index);
        tracing::info!(project = %id, "project deleted");
        Ok(())
    }

    /// Attach a collaborator to project `id` under a fresh id.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown project.
    pub fn add_collaborator(
        &self,
        id: &ProjectId,
        collaborator: NewCollaborator,
    ) -> Result<Collaborator, DeskError> {
        let mut projects = self.lock();
        let project = projects
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| project_not_found(id))?;
        let added = new_collaborator(collaborator);
        project.collaborators.push(added.clone());
        Ok(added)
    }

    /// Detach collaborator `collaborator` from project `id`.
    ///
    /// # Errors
    /// Returns `NotFound` if either the project or the collaborator is unknown.
    pub fn remove_collaborator(
        &self,
        id: &ProjectId,
        collaborator: &CollaboratorId,
    ) -> Result<(), DeskError> {
        let mut projects = self.lock();
        let project = projects
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| project_not_found(id))?;
        let index = project
            .collaborators
            .iter()
            .position(|c| &c.id == collaborator)
            .ok_or_else(|| DeskError::not_found(format!("collaborator {collaborator}")))?;
        project.collaborators.remove(index);
        Ok(())
    }
}

fn project_not_found(id: &ProjectId) -> DeskError {
    DeskError::not_found(format!("project {id}"))
}

fn new_collaborator(c: NewCollaborator) -> Collaborator {
    Collaborator {
        id: CollaboratorId::generate(),
        name: c.name,
        email: c.email,
    }
}

fn seeded_at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

fn sample_projects() -> Vec<Project> {
    let john = Collaborator {
        id: CollaboratorId::new("1"),
        name: "John Doe".into(),
        email: "john.doe@example.com".into(),
    };
    let jane = Collaborator {
        id: CollaboratorId::new("2"),
        name: "Jane Smith".into(),
        email: "jane.smith@example.com".into(),
    };
    let tickers = |syms: &[&str]| -> Vec<Ticker> {
        syms.iter().filter_map(|s| Ticker::new(s).ok()).collect()
    };

    vec![
        Project {
            id: ProjectId::new("1"),
            name: "Merger Analysis".into(),
            tickers: tickers(&["AAPL", "MSFT"]),
            collaborators: vec![john.clone(), jane],
            created_at: seeded_at(2023, 8, 15, 12, 0),
            last_updated: "2 days ago".into(),
            progress: 75,
        },
        Project {
            id: ProjectId::new("2"),
            name: "Quarterly Report".into(),
            tickers: tickers(&["TSLA"]),
            collaborators: vec![john],
            created_at: seeded_at(2023, 8, 10, 9, 30),
            last_updated: "5 days ago".into(),
            progress: 40,
        },
        Project {
            id: ProjectId::new("3"),
            name: "IPO Valuation".into(),
            tickers: tickers(&["RIVN", "LCID"]),
            collaborators: vec![],
            created_at: seeded_at(2023, 8, 5, 14, 15),
            last_updated: "1 week ago".into(),
            progress: 20,
        },
    ]
}
