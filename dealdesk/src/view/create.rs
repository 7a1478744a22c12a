use dealdesk_core::{NewCollaborator, NewProject};

/// Error under the name field.
pub const NAME_REQUIRED: &str = "Project name is required";
/// Error above the ticker fields.
pub const TICKER_REQUIRED: &str = "At least one ticker is required";

/// Validation messages, one slot per field group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    /// Name problem.
    pub name: Option<&'static str>,
    /// Ticker problem.
    pub tickers: Option<&'static str>,
}

impl FormErrors {
    /// True when nothing is flagged.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.tickers.is_none()
    }

    /// Flagged messages in field order.
    #[must_use]
    pub fn messages(&self) -> Vec<&'static str> {
        self.name.into_iter().chain(self.tickers).collect()
    }
}

/// Create-project modal.
///
/// Starts with one empty ticker row; rows are uppercased as typed and the
/// last remaining row cannot be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectForm {
    name: String,
    tickers: Vec<String>,
    collaborators: Vec<NewCollaborator>,
    errors: FormErrors,
}

impl Default for CreateProjectForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateProjectForm {
    /// Blank form with a single ticker row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            tickers: vec![String::new()],
            collaborators: Vec::new(),
            errors: FormErrors::default(),
        }
    }

    /// Name field.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ticker rows as displayed.
    #[must_use]
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// Invited collaborators.
    #[must_use]
    pub fn collaborators(&self) -> &[NewCollaborator] {
        &self.collaborators
    }

    /// Messages from the last submit.
    #[must_use]
    pub const fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Edit the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Edit ticker row `index`. Out-of-range rows are ignored.
    pub fn set_ticker(&mut self, index: usize, value: &str) {
        if let Some(row) = self.tickers.get_mut(index) {
            *row = value.to_uppercase();
        }
    }

    /// Append an empty ticker row.
    pub fn add_ticker(&mut self) {
        self.tickers.push(String::new());
    }

    /// Drop ticker row `index` unless it is the only one.
    pub fn remove_ticker(&mut self, index: usize) {
        if self.tickers.len() > 1 && index < self.tickers.len() {
            self.tickers.remove(index);
        }
    }

    /// Add a collaborator to the new project.
    pub fn invite(&mut self, collaborator: NewCollaborator) {
        self.collaborators.push(collaborator);
    }

    fn filled_tickers(&self) -> Vec<String> {
        self.tickers
            .iter()
            .filter(|t| !t.trim().is_empty())
            .cloned()
            .collect()
    }

    /// Re-check every field and store the messages. Returns `true` when valid.
    pub fn validate(&mut self) -> bool {
        self.errors = FormErrors {
            name: self.name.trim().is_empty().then_some(NAME_REQUIRED),
            tickers: self.filled_tickers().is_empty().then_some(TICKER_REQUIRED),
        };
        self.errors.is_empty()
    }

    /// Validate and build the creation payload with blank rows dropped.
    pub fn submit(&mut self) -> Option<NewProject> {
        if !self.validate() {
            return None;
        }
        Some(NewProject {
            name: self.name.clone(),
            tickers: self.filled_tickers(),
            collaborators: self.collaborators.clone(),
        })
    }
}
