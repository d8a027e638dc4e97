//! Variadic `any`/`all` combinators and their assertions.
//!
//! `any` is an OR across predicates where each predicate is tested
//! against every value: it holds iff some predicate accepts some value.
//! `all` applies one predicate to every value. Both reject structurally
//! invalid arguments (no predicates, no values) with the argument-error
//! kind; their assertion variants report deduplicated expected
//! descriptions and deduplicated observed type names.

use core_values::Value;

use crate::detect::detect;
use crate::error::{InspectError, InspectResult};
use crate::Predicate;

const ANY_FALLBACK: &str = "predicate returns truthy for any value";
const ALL_FALLBACK: &str = "predicate returns truthy for all values";

fn ensure_predicates(predicates: &[Predicate]) -> InspectResult<()> {
    if predicates.is_empty() {
        return Err(InspectError::Argument(
            "Invalid predicate list provided, expected at least one predicate.".to_string(),
        ));
    }
    Ok(())
}

fn ensure_values(values: &[Value]) -> InspectResult<()> {
    if values.is_empty() {
        return Err(InspectError::Argument(
            "Invalid number of values provided, expected at least one value.".to_string(),
        ));
    }
    Ok(())
}

/// Look up the registered description of a predicate; unknown predicates
/// get the generic fallback phrase.
fn description_for(predicate: Predicate, fallback: &'static str) -> String {
    crate::assert::DESCRIPTIONS
        .iter()
        .find(|(known, _)| *known as usize == predicate as usize)
        .map(|(_, description)| (*description).to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Distinct type names observed across the values, in first-seen order.
fn received_type_names(values: &[Value]) -> InspectResult<Vec<String>> {
    let mut names = Vec::new();
    for value in values {
        let name = detect(value)?.to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    Ok(names)
}

/// Join items as a natural-language list with the given conjunction.
fn join_natural(items: &[String], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} {} {}", first, conjunction, second),
        _ => {
            let head = &items[..items.len() - 1];
            format!(
                "{}, {} {}",
                head.join(", "),
                conjunction,
                items[items.len() - 1]
            )
        }
    }
}

/// True iff at least one predicate accepts at least one value.
///
/// # Examples
///
/// ```
/// use core_values::Value;
/// use inspect::{any, is};
///
/// let values = [Value::number(1.0), Value::string("x")];
/// assert_eq!(any(&[is::string], &values), Ok(true));
/// assert_eq!(any(&[is::map, is::set], &values), Ok(false));
/// ```
pub fn any(predicates: &[Predicate], values: &[Value]) -> InspectResult<bool> {
    ensure_predicates(predicates)?;
    ensure_values(values)?;
    Ok(predicates
        .iter()
        .any(|predicate| values.iter().any(|value| predicate(value))))
}

/// True iff the predicate accepts every value.
pub fn all(predicate: Predicate, values: &[Value]) -> InspectResult<bool> {
    ensure_values(values)?;
    Ok(values.iter().all(|value| predicate(value)))
}

/// Asserts that at least one predicate accepts at least one value.
pub fn assert_any(
    predicates: &[Predicate],
    values: &[Value],
    message: Option<&str>,
) -> InspectResult<()> {
    if any(predicates, values)? {
        return Ok(());
    }
    let text = match message {
        Some(custom) => custom.to_string(),
        None => {
            let mut expected = Vec::new();
            for predicate in predicates {
                let description = description_for(*predicate, ANY_FALLBACK);
                if !expected.contains(&description) {
                    expected.push(description);
                }
            }
            multi_value_message(&join_natural(&expected, "or"), values)?
        }
    };
    Err(InspectError::Type(text))
}

/// Asserts that the predicate accepts every value.
pub fn assert_all(
    predicate: Predicate,
    values: &[Value],
    message: Option<&str>,
) -> InspectResult<()> {
    if all(predicate, values)? {
        return Ok(());
    }
    let text = match message {
        Some(custom) => custom.to_string(),
        None => multi_value_message(&description_for(predicate, ALL_FALLBACK), values)?,
    };
    Err(InspectError::Type(text))
}

fn multi_value_message(expected: &str, values: &[Value]) -> InspectResult<String> {
    let received: Vec<String> = received_type_names(values)?
        .into_iter()
        .map(|name| format!("`{}`", name))
        .collect();
    let noun = if received.len() == 1 { "type" } else { "types" };
    Ok(format!(
        "Expected values which are `{}`. Received values of {} {}.",
        expected,
        noun,
        join_natural(&received, "and")
    ))
}
