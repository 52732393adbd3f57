//! The search box session: query buffer, provider selection, and submit.
//!
//! [`SearchBar`] owns the text the user is editing and the active provider.
//! Submitting runs the dispatch core once and hands every destination to a
//! [`Navigator`], in order. Blank input sets a shake cue instead of opening
//! anything.

use startpage_search::dispatch::dispatch;
use startpage_search::operators::{self, SearchOperator};
use startpage_search::{favicon_url, Direction, LookupServices, Provider, ProviderRegistry, Resolution};

use crate::config::StartPageConfig;
use crate::error::Result;
use crate::preferences::ProviderPreference;
use crate::storage::KeyValueStore;

/// Opens destination addresses, one new browsing context per call.
pub trait Navigator {
    /// Open `address`.
    ///
    /// # Errors
    ///
    /// Implementations return [`crate::StartPageError::Navigation`] when the
    /// address cannot be handed off.
    fn open(&mut self, address: &str) -> Result<()>;
}

/// What a submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// These addresses were opened, in order.
    Opened(Vec<String>),
    /// Nothing to do; the shake cue was raised.
    Rejected,
}

/// An editing session of the search box.
#[derive(Debug, Clone)]
pub struct SearchBar<'r> {
    registry: &'r ProviderRegistry,
    services: LookupServices,
    preference: ProviderPreference,
    query: String,
    selection: (usize, usize),
    shake: bool,
}

impl<'r> SearchBar<'r> {
    /// Start a session with an already-loaded preference.
    pub fn new(
        registry: &'r ProviderRegistry,
        services: LookupServices,
        preference: ProviderPreference,
    ) -> Self {
        Self {
            registry,
            services,
            preference,
            query: String::new(),
            selection: (0, 0),
            shake: false,
        }
    }

    /// Start a session from configuration, restoring the saved provider.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn from_config<S: KeyValueStore + ?Sized>(
        store: &S,
        registry: &'r ProviderRegistry,
        config: &StartPageConfig,
    ) -> Result<Self> {
        let preference =
            ProviderPreference::load(store, registry, &config.search.default_provider)?;
        Ok(Self::new(registry, config.search.services.clone(), preference))
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query text and put the cursor at its end.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        let end = self.query.chars().count();
        self.selection = (end, end);
    }

    /// Set the selected char range (equal bounds for a plain cursor).
    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.selection = (start, end);
    }

    /// Current cursor position in chars (end of the selection).
    pub fn cursor(&self) -> usize {
        self.selection.1
    }

    /// Splice an operator into the query at the selection.
    pub fn insert_operator(&mut self, operator: &SearchOperator) {
        let (start, end) = self.selection;
        let inserted = operators::insert_at(&self.query, start, end, operator.insert);
        self.query = inserted.text;
        self.selection = (inserted.cursor, inserted.cursor);
    }

    /// Splice the operator with chip `label`. Returns `false` for unknown labels.
    pub fn insert_operator_label(&mut self, label: &str) -> bool {
        match operators::find(label) {
            Some(op) => {
                self.insert_operator(op);
                true
            }
            None => false,
        }
    }

    /// The active provider.
    pub fn provider(&self) -> &'r Provider {
        self.preference.provider(self.registry)
    }

    /// Placeholder text for the empty search box.
    pub fn placeholder(&self) -> String {
        format!("Search {} or paste a URL", self.provider().name)
    }

    /// Icon for the active provider.
    pub fn favicon_url(&self) -> String {
        favicon_url(self.provider())
    }

    /// Step the provider selection and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection cannot be stored.
    pub fn cycle_provider<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        direction: Direction,
    ) -> Result<&'r Provider> {
        self.preference.cycle(store, self.registry, direction)?;
        Ok(self.provider())
    }

    /// Select a provider by key and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StartPageError::UnknownProvider`] for keys outside the catalog.
    pub fn select_provider<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        key: &str,
    ) -> Result<&'r Provider> {
        self.preference.select(store, self.registry, key)?;
        Ok(self.provider())
    }

    /// Whether the rejection cue is raised.
    pub fn is_shaking(&self) -> bool {
        self.shake
    }

    /// Clear the rejection cue, returning whether it was raised.
    pub fn take_shake(&mut self) -> bool {
        std::mem::take(&mut self.shake)
    }

    /// Dispatch the current query.
    ///
    /// On success every destination is opened through `navigator` in order
    /// and the query is cleared. Blank input raises the shake cue and leaves
    /// the query as it was.
    ///
    /// # Errors
    ///
    /// Propagates the first navigator failure; the query is kept so the user
    /// can retry.
    pub fn submit<N: Navigator + ?Sized>(&mut self, navigator: &mut N) -> Result<SubmitOutcome> {
        let config = self.preference.dispatch_config(&self.services);
        let addresses = match dispatch(&self.query, self.registry, &config) {
            Resolution::Dispatch(dispatch) => dispatch.into_addresses(),
            Resolution::Rejected => {
                self.shake = true;
                return Ok(SubmitOutcome::Rejected);
            }
        };
        for address in &addresses {
            navigator.open(address)?;
        }
        self.query.clear();
        self.selection = (0, 0);
        self.shake = false;
        Ok(SubmitOutcome::Opened(addresses))
    }
}
