//! Aggregated per-ticker data for one opened project.
//!
//! Opening a project fans out seven resource fetches per ticker, waits for
//! every ticker to settle, and commits all seven resource maps in one write.
//! A background task then refreshes only the live-quote map on a fixed
//! period until the details are closed.
//!
//! Full batches and live refreshes can overlap. Every run takes a sequence
//! number when it starts, and each resource map remembers the sequence of its
//! last write, so a run that started earlier never overwrites a newer map.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use dealdesk_core::{
    AnalystRatings, DeskError, DocumentList, ExpertCallList, FinancialData, LiveQuote, NewsFeed,
    PeerComparison, Project, Resource, TaskHandle, Ticker,
};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::Desk;

/// Value for one ticker in a resource map: the record, or the message of the
/// error that failed that ticker's batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Entry<T> {
    /// The fetched record.
    Ready(T),
    /// Error marker for the ticker.
    Failed {
        /// Error text shown in place of the data.
        error: String,
    },
}

impl<T> Entry<T> {
    /// Borrow the record, if any.
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(v) => Some(v),
            Self::Failed { .. } => None,
        }
    }

    /// Error text, if this is a marker.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Ready(_) => None,
            Self::Failed { error } => Some(error),
        }
    }
}

/// Ticker-keyed values of one resource.
pub type ResourceMap<T> = BTreeMap<Ticker, Entry<T>>;

/// Tabs of the details panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    /// Project information and summary counts.
    #[default]
    Overview,
    /// CapIQ statements and ratios.
    Financials,
    /// Live quotes and analyst ratings.
    LiveMarketData,
    /// CapIQ news.
    News,
    /// AlphaSense expert calls.
    ExpertCalls,
    /// AlphaSense documents.
    Documents,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Financials,
        Self::LiveMarketData,
        Self::News,
        Self::ExpertCalls,
        Self::Documents,
    ];

    /// Tab caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Financials => "CapIQ Financials",
            Self::LiveMarketData => "Live Market Data",
            Self::News => "CapIQ News",
            Self::ExpertCalls => "AlphaSense Calls",
            Self::Documents => "AlphaSense Documents",
        }
    }
}

/// Everything fetched for one ticker in a full batch.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerData {
    /// Statements and ratios.
    pub financials: FinancialData,
    /// Latest quote.
    pub live_quote: LiveQuote,
    /// Comparable companies.
    pub peers: PeerComparison,
    /// Analyst tally.
    pub ratings: AnalystRatings,
    /// News feed.
    pub news: NewsFeed,
    /// Expert calls.
    pub expert_calls: ExpertCallList,
    /// Documents.
    pub documents: DocumentList,
}

/// Point-in-time copy of the details state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsSnapshot {
    /// The project being shown.
    pub project: Project,
    /// Statements per ticker.
    pub financials: ResourceMap<FinancialData>,
    /// Quotes per ticker.
    pub live_quotes: ResourceMap<LiveQuote>,
    /// Peers per ticker.
    pub peers: ResourceMap<PeerComparison>,
    /// Ratings per ticker.
    pub ratings: ResourceMap<AnalystRatings>,
    /// News per ticker.
    pub news: ResourceMap<NewsFeed>,
    /// Expert calls per ticker.
    pub expert_calls: ResourceMap<ExpertCallList>,
    /// Documents per ticker.
    pub documents: ResourceMap<DocumentList>,
    /// A full batch is in flight.
    pub loading: bool,
    /// Aggregate error of the last full batch, if every ticker failed.
    pub error: Option<String>,
    /// When data was last refreshed.
    pub last_updated: DateTime<Utc>,
    /// Selected tab.
    pub active_tab: Tab,
}

#[derive(Debug, Default, Clone, Copy)]
struct WriteMarks {
    full: u64,
    live_quotes: u64,
}

#[derive(Debug)]
struct DetailsState {
    snapshot: DetailsSnapshot,
    marks: WriteMarks,
    latest_batch: u64,
}

struct Shared {
    desk: Arc<Desk>,
    project: Project,
    state: RwLock<DetailsState>,
    seq: AtomicU64,
    token: CancellationToken,
}

/// Live view over one project's aggregated ticker data.
///
/// Dropping the details cancels in-flight fetches and the refresh task;
/// [`ProjectDetails::close`] does the same and waits for the task to exit.
pub struct ProjectDetails {
    shared: Arc<Shared>,
    refresher: Option<TaskHandle>,
}

impl ProjectDetails {
    /// Details with empty maps in the loading state. Nothing is fetched until
    /// [`load`](Self::load) or [`start_live_refresh`](Self::start_live_refresh)
    /// is called.
    #[must_use]
    pub fn new(desk: Arc<Desk>, project: Project) -> Self {
        let snapshot = DetailsSnapshot {
            project: project.clone(),
            financials: BTreeMap::new(),
            live_quotes: BTreeMap::new(),
            peers: BTreeMap::new(),
            ratings: BTreeMap::new(),
            news: BTreeMap::new(),
            expert_calls: BTreeMap::new(),
            documents: BTreeMap::new(),
            loading: true,
            error: None,
            last_updated: Utc::now(),
            active_tab: Tab::default(),
        };
        Self {
            shared: Arc::new(Shared {
                desk,
                project,
                state: RwLock::new(DetailsState {
                    snapshot,
                    marks: WriteMarks::default(),
                    latest_batch: 0,
                }),
                seq: AtomicU64::new(1),
                token: CancellationToken::new(),
            }),
            refresher: None,
        }
    }

    /// Open `project`: start the live-quote timer and run the first full batch.
    ///
    /// An all-tickers failure is recorded in the snapshot's `error` field.
    pub async fn open(desk: Arc<Desk>, project: Project) -> Self {
        let mut details = Self::new(desk, project);
        details.start_live_refresh();
        if let Err(e) = details.load().await {
            tracing::warn!(project = %details.shared.project.id, error = %e, "initial load failed");
        }
        details
    }

    /// The project being shown.
    #[must_use]
    pub fn project(&self) -> &Project {
        &self.shared.project
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> DetailsSnapshot {
        self.shared.state.read().await.snapshot.clone()
    }

    /// Select a tab.
    pub async fn set_tab(&self, tab: Tab) {
        self.shared.state.write().await.snapshot.active_tab = tab;
    }

    /// Run a full batch over every ticker and commit the seven maps at once.
    ///
    /// # Errors
    /// Returns `AllTickersFailed` (leaving the maps untouched) when every
    /// ticker failed, and `Cancelled` if the details were closed meanwhile.
    pub async fn load(&self) -> Result<(), DeskError> {
        Arc::clone(&self.shared).load().await
    }

    /// Manual refresh: a full batch plus a fresh "last updated" stamp.
    ///
    /// # Errors
    /// Same as [`load`](Self::load).
    pub async fn refresh(&self) -> Result<(), DeskError> {
        let result = self.load().await;
        if !self.shared.token.is_cancelled() {
            self.shared.state.write().await.snapshot.last_updated = Utc::now();
        }
        result
    }

    /// Re-fetch only the live quotes and stamp "last updated".
    ///
    /// Failures are logged and never surface.
    pub async fn refresh_live(&self) {
        Arc::clone(&self.shared).refresh_live().await;
    }

    /// Spawn the periodic live-quote refresh. The first tick fires one full
    /// period after the call. Calling this again replaces the running task.
    pub fn start_live_refresh(&mut self) {
        let period = self.shared.desk.config().live_refresh_interval;
        let shared = Arc::clone(&self.shared);
        let handle = TaskHandle::spawn(self.shared.token.child_token(), move |token| async move {
            let mut timer = tokio::time::interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    _ = timer.tick() => Arc::clone(&shared).refresh_live().await,
                }
            }
            tracing::debug!(project = %shared.project.id, "live refresh stopped");
        });
        self.refresher = Some(handle);
    }

    /// Whether the refresh task is running.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.refresher.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel in-flight fetches and stop the refresh task.
    pub async fn close(mut self) {
        self.shared.token.cancel();
        if let Some(handle) = self.refresher.take() {
            handle.stop().await;
        }
        tracing::debug!(project = %self.shared.project.id, "details closed");
    }
}

impl Drop for ProjectDetails {
    fn drop(&mut self) {
        self.shared.token.cancel();
    }
}

impl Shared {
    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst)
    }

    async fn load(self: Arc<Self>) -> Result<(), DeskError> {
        let seq = self.next_seq();
        {
            let mut state = self.state.write().await;
            state.latest_batch = seq;
            state.snapshot.loading = true;
            state.snapshot.error = None;
        }

        let batches = join_all(
            self.project
                .tickers
                .iter()
                .map(|t| fetch_ticker(&self.desk, t)),
        );
        let results = tokio::select! {
            () = self.token.cancelled() => return Err(DeskError::Cancelled),
            results = batches => results,
        };

        let mut state = self.state.write().await;
        if self.token.is_cancelled() {
            return Err(DeskError::Cancelled);
        }
        let is_latest = state.latest_batch == seq;
        if is_latest {
            state.snapshot.loading = false;
        }

        if !results.is_empty() && results.iter().all(|(_, r)| r.is_err()) {
            let errors: Vec<DeskError> = results.into_iter().filter_map(|(_, r)| r.err()).collect();
            let aggregate = DeskError::AllTickersFailed(errors);
            tracing::warn!(project = %self.project.id, error = %aggregate, "all tickers failed");
            if seq > state.marks.full {
                // older batches still in flight must not paint data under the error
                state.marks.full = seq;
            }
            if is_latest {
                state.snapshot.error = Some(aggregate.to_string());
            }
            return Err(aggregate);
        }

        if seq > state.marks.full {
            let mut maps = Maps::default();
            for (ticker, result) in results {
                maps.insert(ticker, result);
            }
            let write_quotes = seq > state.marks.live_quotes;
            maps.commit(&mut state.snapshot, write_quotes);
            state.marks.full = seq;
            if write_quotes {
                state.marks.live_quotes = seq;
            }
        } else {
            tracing::debug!(project = %self.project.id, seq, "stale batch discarded");
        }
        Ok(())
    }

    async fn refresh_live(self: Arc<Self>) {
        let seq = self.next_seq();
        let quotes = join_all(self.project.tickers.iter().map(|t| {
            let desk = &self.desk;
            async move {
                let quote = desk
                    .get_live_quote(t)
                    .await
                    .into_result()
                    .inspect_err(|e| tracing::warn!(ticker = %t, error = %e, "live quote refresh failed"));
                (t.clone(), quote)
            }
        }));
        let quotes = tokio::select! {
            () = self.token.cancelled() => return,
            quotes = quotes => quotes,
        };

        let mut state = self.state.write().await;
        if self.token.is_cancelled() {
            return;
        }
        if seq > state.marks.live_quotes {
            state.snapshot.live_quotes = quotes
                .into_iter()
                .map(|(t, q)| (t, entry(q)))
                .collect();
            state.marks.live_quotes = seq;
        }
        state.snapshot.last_updated = Utc::now();
    }
}

/// Fetch all seven resources of one ticker concurrently. Any failure turns
/// the whole ticker into an error.
async fn fetch_ticker(desk: &Desk, ticker: &Ticker) -> (Ticker, Result<TickerData, DeskError>) {
    let (financials, live_quote, peers, ratings, news, expert_calls, documents) = tokio::join!(
        desk.get_financials(ticker),
        desk.get_live_quote(ticker),
        desk.get_peer_comparison(ticker),
        desk.get_analyst_ratings(ticker),
        desk.get_news(ticker),
        desk.get_expert_calls(ticker),
        desk.get_documents(ticker),
    );
    let bundle = (|| -> Result<TickerData, DeskError> {
        Ok(TickerData {
            financials: financials.into_result()?,
            live_quote: live_quote.into_result()?,
            peers: peers.into_result()?,
            ratings: ratings.into_result()?,
            news: news.into_result()?,
            expert_calls: expert_calls.into_result()?,
            documents: documents.into_result()?,
        })
    })();
    if let Err(e) = &bundle {
        tracing::warn!(%ticker, resource = ?failed_resource(e), error = %e, "ticker batch failed");
    }
    (ticker.clone(), bundle)
}

fn failed_resource(e: &DeskError) -> Option<Resource> {
    match e {
        DeskError::ProviderTimeout { resource, .. } | DeskError::Unsupported { resource } => {
            Resource::ALL.into_iter().find(|r| r.as_str() == resource)
        }
        _ => None,
    }
}

fn entry<T>(r: Result<T, DeskError>) -> Entry<T> {
    match r {
        Ok(v) => Entry::Ready(v),
        Err(e) => failed(&e.to_string()),
    }
}

fn failed<T>(error: &str) -> Entry<T> {
    Entry::Failed {
        error: error.to_owned(),
    }
}

#[derive(Default)]
struct Maps {
    financials: ResourceMap<FinancialData>,
    live_quotes: ResourceMap<LiveQuote>,
    peers: ResourceMap<PeerComparison>,
    ratings: ResourceMap<AnalystRatings>,
    news: ResourceMap<NewsFeed>,
    expert_calls: ResourceMap<ExpertCallList>,
    documents: ResourceMap<DocumentList>,
}

impl Maps {
    fn insert(&mut self, ticker: Ticker, result: Result<TickerData, DeskError>) {
        match result {
            Ok(d) => {
                self.financials.insert(ticker.clone(), Entry::Ready(d.financials));
                self.live_quotes.insert(ticker.clone(), Entry::Ready(d.live_quote));
                self.peers.insert(ticker.clone(), Entry::Ready(d.peers));
                self.ratings.insert(ticker.clone(), Entry::Ready(d.ratings));
                self.news.insert(ticker.clone(), Entry::Ready(d.news));
                self.expert_calls.insert(ticker.clone(), Entry::Ready(d.expert_calls));
                self.documents.insert(ticker, Entry::Ready(d.documents));
            }
            Err(e) => {
                let error = e.to_string();
                self.financials.insert(ticker.clone(), failed(&error));
                self.live_quotes.insert(ticker.clone(), failed(&error));
                self.peers.insert(ticker.clone(), failed(&error));
                self.ratings.insert(ticker.clone(), failed(&error));
                self.news.insert(ticker.clone(), failed(&error));
                self.expert_calls.insert(ticker.clone(), failed(&error));
                self.documents.insert(ticker, failed(&error));
            }
        }
    }

    fn commit(self, snapshot: &mut DetailsSnapshot, write_quotes: bool) {
        snapshot.financials = self.financials;
        snapshot.peers = self.peers;
        snapshot.ratings = self.ratings;
        snapshot.news = self.news;
        snapshot.expert_calls = self.expert_calls;
        snapshot.documents = self.documents;
        if write_quotes {
            snapshot.live_quotes = self.live_quotes;
        }
    }
}
