//! Per-position check resolution
//!
//! For every position the first matching strategy wins:
//!
//! 1. a custom check config carrying a predicate
//! 2. a type-level validator registered for the expected class
//! 3. the default nominal/primitive check
//!
//! `nullable` lets `null` and `undefined` past both 2 and 3.
//!
//! A position with neither a declared type nor a predicate gets a check
//! that always passes.

use std::sync::Arc;

use rtcheck_sdk::{CustomCheckConfig, ExpectedType, Predicate, TypeCheckError, Value};
use tracing::debug;

use super::message::{CallSite, Position};
use super::{Check, CheckList};
use crate::registry::DeclarationRegistry;

/// Build one check per parameter position.
///
/// The list covers every position that has a declared type or a custom
/// config, whichever list is longer.
pub fn build_param_checks(
    site: &CallSite,
    expected: &[Option<ExpectedType>],
    custom: &[Option<CustomCheckConfig>],
    registry: &DeclarationRegistry,
) -> CheckList {
    let site = Arc::new(site.clone());
    let len = expected.len().max(custom.len());
    let checks = (0..len)
        .map(|index| {
            resolve(
                &site,
                Position::Parameter(index),
                expected.get(index).and_then(Option::as_ref),
                custom.get(index).and_then(Option::as_ref),
                registry,
            )
        })
        .collect();

    debug!(
        owner = site.owner(),
        member = ?site.member(),
        positions = len,
        "built parameter checks"
    );
    CheckList::new(checks)
}

/// Build the check for a method's return value
pub fn build_return_check(
    site: &CallSite,
    expected: Option<&ExpectedType>,
    custom: Option<&CustomCheckConfig>,
    registry: &DeclarationRegistry,
) -> Check {
    debug!(
        owner = site.owner(),
        member = ?site.member(),
        "built return check"
    );
    resolve(
        &Arc::new(site.clone()),
        Position::ReturnValue,
        expected,
        custom,
        registry,
    )
}

fn resolve(
    site: &Arc<CallSite>,
    position: Position,
    expected: Option<&ExpectedType>,
    custom: Option<&CustomCheckConfig>,
    registry: &DeclarationRegistry,
) -> Check {
    if let Some(predicate) = custom.and_then(|c| c.predicate.clone()) {
        return custom_check(site.clone(), position, predicate);
    }

    let nullable = custom.is_some_and(|c| c.nullable);
    let type_validator = expected
        .and_then(ExpectedType::as_class)
        .and_then(|class| registry.type_validator(class));
    if let Some(predicate) = type_validator {
        let check = custom_check(site.clone(), position, predicate);
        return if nullable { skip_nullish(check) } else { check };
    }

    match expected {
        Some(expected) => default_check(site.clone(), position, expected.clone(), nullable),
        None => Arc::new(|_: &Value| -> Result<(), TypeCheckError> { Ok(()) }),
    }
}

/// Nullish values never reach `check`
fn skip_nullish(check: Check) -> Check {
    Arc::new(move |value: &Value| -> Result<(), TypeCheckError> {
        if value.is_nullish() {
            Ok(())
        } else {
            check(value)
        }
    })
}

fn custom_check(site: Arc<CallSite>, position: Position, predicate: Predicate) -> Check {
    Arc::new(move |value: &Value| match predicate(value) {
        Some(message) if !message.is_empty() => Err(TypeCheckError::new(
            site.custom_failure(position, &message),
        )),
        _ => Ok(()),
    })
}

fn default_check(
    site: Arc<CallSite>,
    position: Position,
    expected: ExpectedType,
    nullable: bool,
) -> Check {
    Arc::new(move |value: &Value| {
        if (nullable && value.is_nullish()) || expected.accepts(value) {
            Ok(())
        } else {
            Err(TypeCheckError::new(site.mismatch(position, &expected, value)))
        }
    })
}
