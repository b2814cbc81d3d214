//! The journal line mutation interface and its guarded decorator.
//!
//! Persistence belongs to the host. This module defines the fixed mutation
//! interface the host implements ([`LineStore`]) and the decorator
//! ([`GuardedLineStore`]) that runs the source-document guards and the
//! row-level constraints before any base operation is reached.

use ledgerguard_shared::types::{CompanyId, Currency, JournalLineId};
use tracing::{info, warn};

use super::error::LineError;
use super::guard::{MutationContext, check_invoice_generated, check_statement_generated};
use super::line::JournalLine;
use super::patch::LinePatch;
use super::validation::check_lines;

/// The base mutation interface supplied by the host persistence layer.
///
/// Implementations run inside the host's transaction; the decorator relies
/// on that for atomic rollback and never delegates a partially-checked
/// batch.
pub trait LineStore {
    /// Fetches lines by id, preserving order.
    fn browse(&self, ids: &[JournalLineId]) -> Result<Vec<JournalLine>, LineError>;

    /// Returns the base currency of a company.
    fn company_currency(&self, company: CompanyId) -> Option<Currency>;

    /// Persists new lines, returning their ids.
    fn create(&mut self, lines: Vec<JournalLine>) -> Result<Vec<JournalLineId>, LineError>;

    /// Applies a patch to the given lines.
    fn write(&mut self, ids: &[JournalLineId], patch: &LinePatch) -> Result<(), LineError>;

    /// Deletes the given lines.
    fn unlink(&mut self, ids: &[JournalLineId]) -> Result<(), LineError>;
}

/// Decorator enforcing guards and constraints in front of a [`LineStore`].
///
/// Every operation checks the whole batch first and only then delegates
/// once, so a failing line aborts the batch before anything is persisted.
#[derive(Debug)]
pub struct GuardedLineStore<S> {
    inner: S,
}

impl<S: LineStore> GuardedLineStore<S> {
    /// Wraps a base store.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Read-only access to the base store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Consumes the decorator, returning the base store.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Creates lines after validating the row-level constraints.
    pub fn create(&mut self, lines: Vec<JournalLine>) -> Result<Vec<JournalLineId>, LineError> {
        check_lines(&lines, |company| self.inner.company_currency(company))?;
        let ids = self.inner.create(lines)?;
        info!(count = ids.len(), "Journal lines created");
        Ok(ids)
    }

    /// Applies a patch after running the source-document guards and
    /// validating the resulting lines.
    pub fn write(
        &mut self,
        ctx: &MutationContext,
        ids: &[JournalLineId],
        patch: &LinePatch,
    ) -> Result<(), LineError> {
        let mut lines = self.inner.browse(ids)?;
        if !ctx.from_parent_object {
            self.guard(&lines, Some(patch), "write")?;
        }
        for line in &mut lines {
            patch.apply(line);
        }
        check_lines(&lines, |company| self.inner.company_currency(company))?;
        self.inner.write(ids, patch)?;
        info!(count = ids.len(), "Journal lines written");
        Ok(())
    }

    /// Deletes lines after running the source-document guards.
    ///
    /// Unlink carries no change set, so any line generated by an invoice or
    /// a bank statement is refused unless the context bypasses the guard.
    pub fn unlink(&mut self, ctx: &MutationContext, ids: &[JournalLineId]) -> Result<(), LineError> {
        let lines = self.inner.browse(ids)?;
        if !ctx.from_parent_object {
            self.guard(&lines, None, "unlink")?;
        }
        self.inner.unlink(ids)?;
        info!(count = ids.len(), "Journal lines unlinked");
        Ok(())
    }

    fn guard(
        &self,
        lines: &[JournalLine],
        patch: Option<&LinePatch>,
        operation: &'static str,
    ) -> Result<(), LineError> {
        check_invoice_generated(lines, patch)
            .and_then(|()| check_statement_generated(lines, patch))
            .inspect_err(|err| {
                warn!(
                    operation,
                    code = err.error_code(),
                    "Journal line mutation refused"
                );
            })
    }
}
