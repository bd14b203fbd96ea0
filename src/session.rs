//! Explicit session state owning the template, records, and outcomes.
//!
//! All mutable state lives here and is owned by the caller; there is no
//! global state. A new generation run replaces the record set and clears
//! any prior dispatch results.

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use crate::dispatch::outcome::Outcome;
use crate::dispatch::pool::{self, DispatchConfig};
use crate::generate::batch::{self, BatchOptions, Record};
use crate::generate::template::Template;
use crate::ports::clock::Clock;
use crate::ports::http::HttpSender;
use crate::ports::random::RandomSource;

/// One generation/dispatch session.
#[derive(Default)]
pub struct Session {
    template: Option<Template>,
    records: Vec<Record>,
    outcomes: Vec<Outcome>,
    exhausted_claims: usize,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and stores the template text.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not valid JSON; the session keeps
    /// its previous template in that case.
    pub fn load_template(&mut self, text: &str) -> Result<(), String> {
        self.template = Some(Template::parse(text)?);
        Ok(())
    }

    /// Generates a fresh batch, replacing any prior records and clearing
    /// prior outcomes.
    ///
    /// # Errors
    ///
    /// Returns an error when no template is loaded or the template fails
    /// the structural check; the session is left unchanged.
    pub fn generate(
        &mut self,
        options: &BatchOptions,
        clock: &dyn Clock,
        rng: &dyn RandomSource,
    ) -> Result<&[Record], String> {
        let Some(template) = &self.template else {
            return Err("Template JSON is invalid.".to_string());
        };
        let report = batch::generate_batch(template, options, clock, rng)?;
        self.records = report.records;
        self.exhausted_claims = report.exhausted_claims;
        self.outcomes.clear();
        Ok(&self.records)
    }

    /// Adopts records loaded from elsewhere (e.g. a payload directory),
    /// replacing any prior records and clearing prior outcomes.
    pub fn adopt_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.outcomes.clear();
        self.exhausted_claims = 0;
    }

    /// Dispatches the current records, replacing the outcome log.
    ///
    /// `completed` is reset and then bumped after every outcome, so it can
    /// be polled for live progress while this future runs.
    ///
    /// # Errors
    ///
    /// Returns an error when there are no records or the URL is blank; no
    /// network activity happens in either case.
    pub async fn dispatch(
        &mut self,
        sender: Arc<dyn HttpSender>,
        config: &DispatchConfig,
        completed: &Arc<AtomicUsize>,
    ) -> Result<&[Outcome], String> {
        self.outcomes.clear();
        self.outcomes = pool::dispatch_all(sender, &self.records, config, completed).await?;
        Ok(&self.outcomes)
    }

    /// Clears records and outcomes, keeping the template.
    pub fn reset(&mut self) {
        self.records.clear();
        self.outcomes.clear();
        self.exhausted_claims = 0;
    }

    /// The current record batch, in generation order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Outcomes of the most recent dispatch run, in completion order.
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// How many uniqueness claims exhausted their retry budget during the
    /// most recent generation run.
    #[must_use]
    pub fn exhausted_claims(&self) -> usize {
        self.exhausted_claims
    }
}
