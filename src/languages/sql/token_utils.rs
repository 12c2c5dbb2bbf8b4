//! Walks from the cursor to the tokens that scope a catalog lookup.
use super::*;
use itertools::Itertools;
use TokenType::{Delimiter, Keyword, Operator, Parenthesis};

fn names(token: &LinkedToken<'_>) -> bool {
    token.is_identifier() || token.is_double_quoted_string()
}

fn string_value(token: &LinkedToken<'_>) -> String {
    token.value().trim_matches('\'').to_string()
}

/// Nearest SELECT at or before `current`.
pub fn select_token<'a>(current: LinkedToken<'a>) -> Option<LinkedToken<'a>> {
    if current.is(Keyword, Some(SELECT)) {
        return Some(current);
    }
    current.get_previous_of_type(Keyword, Some(SELECT))
}

/// The statistic function right after SELECT.
pub fn statistic_token<'a>(current: LinkedToken<'a>) -> Option<LinkedToken<'a>> {
    select_token(current)?
        .get_next_non_whitespace_token()
        .filter(|t| t.is_function())
}

/// The metric the statistic is applied to: `AVG ( <metric>`.
pub fn metric_name_token<'a>(current: LinkedToken<'a>) -> Option<LinkedToken<'a>> {
    statistic_token(current)?
        .get_next_non_whitespace_token()
        .filter(|t| t.is(Parenthesis, Some("(")))?
        .get_next_non_whitespace_token()
        .filter(names)
}

pub fn from_token<'a>(current: LinkedToken<'a>) -> Option<LinkedToken<'a>> {
    select_token(current)
        .and_then(|select| select.get_next_of_type(Keyword, Some(FROM)))
        .or_else(|| current.get_previous_of_type(Keyword, Some(FROM)))
}

/// `FROM "ns"`, `FROM $ns` or the first argument of `FROM SCHEMA("ns", ...)`.
pub fn namespace_token<'a>(current: LinkedToken<'a>) -> Option<LinkedToken<'a>> {
    let next = from_token(current)?.get_next_non_whitespace_token()?;
    let namespace = if next.is(Keyword, Some(SCHEMA)) {
        next.get_next_non_whitespace_token()
            .filter(|t| t.is(Parenthesis, Some("(")))?
            .get_next_non_whitespace_token()?
    } else {
        next
    };
    (namespace.is_double_quoted_string() || namespace.is_variable()).then_some(namespace)
}

/// Unquoted namespace, if the query names one.
pub fn namespace(current: LinkedToken<'_>) -> Option<String> {
    namespace_token(current).map(|t| unquote(t.value()).to_string())
}

pub fn metric_name(current: LinkedToken<'_>) -> Option<String> {
    metric_name_token(current).map(|t| unquote(t.value()).to_string())
}

/// Keys listed after the namespace in `SCHEMA("ns", key, ...)`.
pub fn schema_label_keys(current: LinkedToken<'_>) -> Vec<String> {
    let Some(namespace) = namespace_token(current) else {
        return vec![];
    };
    let in_schema = namespace
        .get_previous_non_whitespace_token()
        .is_some_and(|t| t.is(Parenthesis, Some("(")));
    if !in_schema {
        return vec![];
    }
    namespace
        .get_next_until(Parenthesis, &[Delimiter], Some(")"))
        .iter()
        .filter(|t| names(t))
        .map(|t| unquote(t.value()).to_string())
        .collect()
}

/// `key = 'value'` pairs already written in the WHERE clause.
pub fn where_filters(current: LinkedToken<'_>) -> DimensionFilters {
    let mut filters = DimensionFilters::new();
    let Some(where_token) = current.get_previous_of_type(Keyword, Some(WHERE)) else {
        return filters;
    };
    for (key, operator, value) in where_token.get_next_until(Keyword, &[], None).into_iter().tuple_windows() {
        if names(&key) && operator.is(Operator, Some("=")) && value.is_string() {
            filters
                .entry(unquote(key.value()).to_string())
                .or_default()
                .push(string_value(&value));
        }
    }
    filters
}

/// Keys already listed between `GROUP BY` and the cursor.
pub fn group_by_keys(current: LinkedToken<'_>) -> Vec<String> {
    current
        .get_previous_until(Keyword, &[Delimiter], Some(BY))
        .iter()
        .filter(|t| names(t))
        .map(|t| unquote(t.value()).to_string())
        .collect()
}

/// The dimension key a WHERE value is compared against: `<key> = |`.
pub fn compared_key(current: LinkedToken<'_>) -> Option<String> {
    let start = if current.is_whitespace() || current.is_string() {
        current.get_previous_non_whitespace_token()?
    } else {
        current
    };
    let operator = if start.is_operator() {
        start
    } else {
        start.get_previous_non_whitespace_token()?
    };
    operator
        .get_previous_non_whitespace_token()
        .filter(names)
        .map(|t| unquote(t.value()).to_string())
}
