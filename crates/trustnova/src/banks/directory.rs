use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info, warn};

use super::domain::{BankOffer, LoanQuery, RecommendationResult};
use super::{loader, ranking, BankDataError};

/// Where the bank table is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankSource {
    Path(PathBuf),
    Inline(String),
}

impl fmt::Display for BankSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankSource::Path(path) => write!(f, "{}", path.display()),
            BankSource::Inline(_) => f.write_str("inline csv"),
        }
    }
}

/// Read-through cache over the bank table.
///
/// The table is parsed on first use and shared read-only afterwards; queries
/// never mutate it. Share one directory between handlers with `Arc`.
#[derive(Debug)]
pub struct BankDirectory {
    source: BankSource,
    cache: RwLock<Option<Arc<Vec<BankOffer>>>>,
}

impl BankDirectory {
    pub fn new(source: BankSource) -> Self {
        Self {
            source,
            cache: RwLock::new(None),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self::new(BankSource::Path(path.as_ref().to_path_buf()))
    }

    pub fn from_csv(csv: impl Into<String>) -> Self {
        Self::new(BankSource::Inline(csv.into()))
    }

    pub fn source(&self) -> &BankSource {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Returns the cached table, loading it on first call.
    pub fn offers(&self) -> Result<Arc<Vec<BankOffer>>, BankDataError> {
        if let Some(offers) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(Arc::clone(offers));
        }

        let mut guard = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(offers) = guard.as_ref() {
            return Ok(Arc::clone(offers));
        }

        let offers = Arc::new(self.load()?);
        info!(source = %self.source, offers = offers.len(), "bank table loaded");
        *guard = Some(Arc::clone(&offers));
        Ok(offers)
    }

    /// Drops the cached table so the next read reloads it.
    pub fn invalidate(&self) {
        let mut guard = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if guard.take().is_some() {
            debug!(source = %self.source, "bank table cache invalidated");
        }
    }

    pub fn loan_types(&self) -> Result<Vec<String>, BankDataError> {
        Ok(loader::loan_types(&self.offers()?))
    }

    /// Ranked recommendations without the fallback listing.
    pub fn recommend(&self, query: &LoanQuery) -> Result<RecommendationResult, BankDataError> {
        let offers = self.offers()?;
        let result = ranking::recommend(&offers, query);
        debug!(
            loan_type = %query.loan_type,
            target_amount = query.target_amount,
            matched = result.matched,
            returned = result.offers.len(),
            "ranked bank offers"
        );
        Ok(result)
    }

    /// Ranked recommendations, or every offer in the table when none match.
    pub fn recommend_or_fallback(
        &self,
        query: &LoanQuery,
    ) -> Result<RecommendationResult, BankDataError> {
        let offers = self.offers()?;
        let result = ranking::recommend(&offers, query);
        if !result.matched {
            warn!(
                loan_type = %query.loan_type,
                target_amount = query.target_amount,
                "no bank offer matched, returning full listing"
            );
        }
        Ok(result.or_fallback(&offers))
    }

    fn load(&self) -> Result<Vec<BankOffer>, BankDataError> {
        match &self.source {
            BankSource::Path(path) => loader::parse_offers(std::fs::File::open(path)?),
            BankSource::Inline(csv) => loader::parse_offers(Cursor::new(csv.as_bytes())),
        }
    }
}
