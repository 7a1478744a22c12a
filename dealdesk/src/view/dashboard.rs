use dealdesk_core::{Project, ProjectId};

/// Placeholder shown when the store is empty.
pub const NO_PROJECTS: &str = "No projects found. Create your first project to get started.";

const RECENT_CARDS: usize = 3;
const MAX_AVATARS: usize = 3;
// demo figure: every project counts for three calls
const EXPERT_CALLS_PER_PROJECT: usize = 3;

/// Collaborator bubble on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    /// Uppercased first letter of the name.
    pub letter: String,
    /// Full name, shown on hover.
    pub title: String,
}

/// Summary tile for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    /// Project to open when the card is clicked.
    pub id: ProjectId,
    /// Title.
    pub name: String,
    /// "Last updated: ..." value.
    pub last_updated: String,
    /// Ticker badges.
    pub tickers: Vec<String>,
    /// First three collaborators.
    pub avatars: Vec<Avatar>,
    /// "+N" bubble for collaborators beyond the first three.
    pub overflow: Option<String>,
    /// e.g. "75% Complete".
    pub progress_label: String,
}

impl ProjectCard {
    /// Card for `project`.
    #[must_use]
    pub fn new(project: &Project) -> Self {
        let avatars = project
            .collaborators
            .iter()
            .take(MAX_AVATARS)
            .map(|c| Avatar {
                letter: c.name.chars().next().map(|ch| ch.to_uppercase().collect()).unwrap_or_default(),
                title: c.name.clone(),
            })
            .collect();
        let hidden = project.collaborators.len().saturating_sub(MAX_AVATARS);
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            last_updated: project.last_updated.clone(),
            tickers: project.tickers.iter().map(ToString::to_string).collect(),
            avatars,
            overflow: (hidden > 0).then(|| format!("+{hidden}")),
            progress_label: format!("{}% Complete", project.progress),
        }
    }
}

/// "Financial Data Overview" tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FinancialOverview {
    /// Tickers summed over every project; duplicates count twice.
    pub companies_tracked: usize,
    /// Three per project.
    pub expert_calls: usize,
    /// Number of projects.
    pub active_projects: usize,
}

/// Dashboard screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    /// First three projects.
    pub recent: Vec<ProjectCard>,
    /// Every project.
    pub all: Vec<ProjectCard>,
    /// Counter tiles.
    pub overview: FinancialOverview,
}

impl DashboardView {
    /// Dashboard over `projects` in store order.
    #[must_use]
    pub fn new(projects: &[Project]) -> Self {
        let all: Vec<ProjectCard> = projects.iter().map(ProjectCard::new).collect();
        Self {
            recent: all.iter().take(RECENT_CARDS).cloned().collect(),
            all,
            overview: FinancialOverview {
                companies_tracked: projects.iter().map(|p| p.tickers.len()).sum(),
                expert_calls: projects.len() * EXPERT_CALLS_PER_PROJECT,
                active_projects: projects.len(),
            },
        }
    }

    /// True when there is nothing to list; the screen shows [`NO_PROJECTS`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProjectStore;
    use dealdesk_core::{Collaborator, CollaboratorId};

    #[test]
    fn overview_counts_sample_projects() {
        let view = DashboardView::new(&ProjectStore::with_sample_data().get_projects());
        assert_eq!(
            view.overview,
            FinancialOverview {
                companies_tracked: 5,
                expert_calls: 9,
                active_projects: 3,
            }
        );
        assert_eq!(view.recent.len(), 3);
        assert_eq!(view.recent[0].progress_label, "75% Complete");
        assert_eq!(view.recent[0].avatars[1].letter, "J");
    }

    #[test]
    fn extra_collaborators_collapse_into_overflow() {
        let mut project = ProjectStore::with_sample_data().get_projects().remove(2);
        project.collaborators = ["ann", "bo", "cy", "dee", "ed"]
            .iter()
            .enumerate()
            .map(|(i, n)| Collaborator {
                id: CollaboratorId::new(i.to_string()),
                name: (*n).to_string(),
                email: format!("{n}@x.io"),
            })
            .collect();
        let card = ProjectCard::new(&project);
        let letters: Vec<&str> = card.avatars.iter().map(|a| a.letter.as_str()).collect();
        assert_eq!(letters, ["A", "B", "C"]);
        assert_eq!(card.overflow.as_deref(), Some("+2"));
    }

    #[test]
    fn empty_store_shows_placeholder() {
        let view = DashboardView::new(&[]);
        assert!(view.is_empty());
        assert_eq!(view.overview, FinancialOverview::default());
    }
}
