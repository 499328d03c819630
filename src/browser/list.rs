//! List/search state machine for the catalog browser.

use crate::models::book::{Book, BookList, SearchField, ITEMS_PER_PAGE};

use super::{CatalogApi, ClientError};

/// What the list pane is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ListPhase {
    /// No query issued yet; only reachable while a search term is required
    Idle,
    /// A fetch is outstanding
    Searching,
    /// At least one row to show
    Results,
    /// The query succeeded but matched nothing
    NoMatches,
    /// The fetch failed; holds the surfaced message
    Failed(String),
}

/// A fetch the browser wants issued. The sequence number tags the request so
/// completions of superseded fetches can be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub page: i64,
    pub search_term: String,
    pub search_field: SearchField,
}

/// Browser behavior switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfig {
    /// When true, no query runs until a non-empty search term is active.
    /// When false (the default), an empty active term queries every record.
    pub require_search_term: bool,
}

/// Paging and search state of the book list.
///
/// Input values are edited freely; only `submit_search` promotes them to the
/// *active* query that fetches run against.
#[derive(Debug)]
pub struct CatalogBrowser {
    config: BrowserConfig,
    pub input_term: String,
    pub input_field: SearchField,
    active_term: String,
    active_field: SearchField,
    page: i64,
    phase: ListPhase,
    books: Vec<Book>,
    total_count: i64,
    last_seq: u64,
}

impl CatalogBrowser {
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            config,
            input_term: String::new(),
            input_field: SearchField::Title,
            active_term: String::new(),
            active_field: SearchField::Title,
            page: 1,
            phase: ListPhase::Idle,
            books: Vec::new(),
            total_count: 0,
            last_seq: 0,
        }
    }

    /// Issue the initial fetch, or stay idle when a search term is required.
    pub fn start(&mut self) -> Option<FetchRequest> {
        self.issue()
    }

    /// Promote the current input to the active query and fetch its first page.
    pub fn submit_search(&mut self) -> Option<FetchRequest> {
        self.active_term = self.input_term.clone();
        self.active_field = self.input_field;
        self.page = 1;
        self.issue()
    }

    /// Jump to a page of the active query; term and field stay unchanged.
    pub fn select_page(&mut self, page: i64) -> Option<FetchRequest> {
        if page < 1 {
            return None;
        }
        self.page = page;
        self.issue()
    }

    /// Drop the active search and return to the first page of the full list.
    pub fn reset(&mut self) -> Option<FetchRequest> {
        self.active_term.clear();
        self.active_field = SearchField::Title;
        self.page = 1;
        self.issue()
    }

    fn issue(&mut self) -> Option<FetchRequest> {
        if self.config.require_search_term && self.active_term.is_empty() {
            self.phase = ListPhase::Idle;
            self.books.clear();
            self.total_count = 0;
            return None;
        }

        self.last_seq += 1;
        self.phase = ListPhase::Searching;
        Some(FetchRequest {
            seq: self.last_seq,
            page: self.page,
            search_term: self.active_term.clone(),
            search_field: self.active_field,
        })
    }

    /// Feed a fetch completion back in. Completions whose sequence number is
    /// not the latest issued come from superseded fetches and are discarded.
    pub fn fetch_done(&mut self, seq: u64, outcome: Result<BookList, ClientError>) {
        if seq != self.last_seq {
            return;
        }

        match outcome {
            Ok(list) => {
                self.total_count = list.total_count;
                self.books = list.books;
                self.phase = if self.books.is_empty() {
                    ListPhase::NoMatches
                } else {
                    ListPhase::Results
                };
            }
            Err(e) => {
                self.phase = ListPhase::Failed(e.to_string());
            }
        }
    }

    /// Run one issued fetch against the API and feed its result back in.
    pub async fn run_fetch(&mut self, api: &dyn CatalogApi, request: FetchRequest) {
        let outcome = api
            .list_books(request.page, &request.search_term, request.search_field)
            .await;
        self.fetch_done(request.seq, outcome);
    }

    /// Total page count of the active query
    pub fn total_pages(&self) -> i64 {
        (self.total_count + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE
    }

    /// Clickable page numbers, `1..=total_pages`
    pub fn page_numbers(&self) -> Vec<i64> {
        (1..=self.total_pages()).collect()
    }

    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn total_count(&self) -> i64 {
        self.total_count
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn active_term(&self) -> &str {
        &self.active_term
    }

    pub fn active_field(&self) -> SearchField {
        self.active_field
    }
}
