// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use duty_roster::CoreError;
use duty_roster_domain::{DomainError, format_iso_date};
use duty_roster_persistence::PersistenceError;
use thiserror::Error;
use tracing::error;

/// API-level errors.
///
/// These are distinct from domain/core/persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
    /// A recurring assignment was only partly written.
    ///
    /// `created_count` and `dates` describe what is durable.
    #[error(
        "Recurring assignment stopped after {created_count} of {planned} occurrences: {message}"
    )]
    PartialMaterialization {
        /// The storage failure that stopped the expansion.
        message: String,
        /// Occurrences durably written.
        created_count: usize,
        /// Occurrences that were planned.
        planned: usize,
        /// ISO dates of the written occurrences.
        dates: Vec<String>,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    let field: &str = match &err {
        DomainError::InvalidField { field, .. } => *field,
        DomainError::InvalidDutyKind(_) => "duty_type",
        DomainError::InvalidFrequency(_) => "recurrence.frequency",
        DomainError::InvalidEndType(_) => "recurrence.end_type",
        DomainError::InvalidInterval { .. } => "recurrence.interval",
        DomainError::MissingRecurrenceField { field, .. } => {
            return ApiError::InvalidInput {
                field: format!("recurrence.{field}"),
                message,
            };
        }
        DomainError::InvalidWeekdayIndex(_) => "recurrence.custom_days",
        DomainError::DateParseError { .. } => "date",
        DomainError::DateArithmeticOverflow { .. } => {
            return ApiError::DomainRuleViolation {
                rule: String::from("representable_date_range"),
                message,
            };
        }
        DomainError::OccurrenceLimitExceeded { .. } => {
            return ApiError::DomainRuleViolation {
                rule: String::from("max_occurrences"),
                message,
            };
        }
    };

    ApiError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

/// Translates a persistence error into an API error.
///
/// `NotFound` becomes `ResourceNotFound` for `resource_type`; everything else
/// is an internal error and is logged.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError, resource_type: &str) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: resource_type.to_string(),
            message,
        },
        other => {
            error!(resource_type, error = %other, "Persistence operation failed");
            ApiError::Internal {
                message: other.to_string(),
            }
        }
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError<PersistenceError>) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::PartialMaterialization(partial) => {
            error!(
                failed_date = %partial.failed_date,
                created_count = partial.completed.created_count(),
                planned = partial.planned,
                error = %partial.source,
                "Recurring assignment partially written"
            );
            ApiError::PartialMaterialization {
                message: partial.source.to_string(),
                created_count: partial.completed.created_count(),
                planned: partial.planned,
                dates: partial
                    .completed
                    .dates()
                    .into_iter()
                    .map(format_iso_date)
                    .collect(),
            }
        }
    }
}
