// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::materialize::MaterializationOutcome;
use duty_roster_domain::DomainError;
use thiserror::Error;
use time::Date;

/// A sink failure part way through materializing a sequence of dates.
///
/// Everything in `completed` is durable. Nothing from `failed_date` onward
/// was written.
#[derive(Debug, Error)]
#[error(
    "Materialization stopped at {failed_date} after {} of {planned} occurrences: {source}",
    completed.created_count()
)]
pub struct MaterializationError<E: std::error::Error + 'static> {
    /// Occurrences persisted before the failure.
    pub completed: MaterializationOutcome,
    /// The date whose occurrence failed.
    pub failed_date: Date,
    /// How many occurrences were requested.
    pub planned: usize,
    /// The sink error.
    #[source]
    pub source: E,
}

/// Errors that can occur while expanding a recurring assignment.
#[derive(Debug, Error)]
pub enum CoreError<E: std::error::Error + 'static> {
    /// A domain rule was violated. Raised before any write.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// The sink failed after some occurrences were persisted.
    #[error(transparent)]
    PartialMaterialization(#[from] MaterializationError<E>),
}
