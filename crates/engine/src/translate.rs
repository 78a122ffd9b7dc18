//! Argument-bag translation into backend requests.
//!
//! Each invocation's untyped arguments are checked against the command's
//! parameter declarations and turned into a [`RequestDescriptor`]. Failure
//! is fail-fast: the first missing required argument stops translation.

use m2a_types::{CommandSpec, ParamKind, ParamPlacement, ParameterSpec, RequestDescriptor};
use m2a_util::{QueryString, resolve_path};
use serde_json::{Map, Value};

use crate::InvocationError;

/// Filter value meaning "no filter", honoured only where a parameter advertises it.
const ALL_SENTINEL: &str = "all";

/// An argument value after kind checking.
#[derive(Debug, Clone, PartialEq)]
enum ArgumentValue {
    Text(String),
    Count(i64),
}

impl ArgumentValue {
    fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Count(count) => count.to_string(),
        }
    }

    fn into_json(self) -> Value {
        match self {
            Self::Text(text) => Value::String(text),
            Self::Count(count) => Value::from(count),
        }
    }
}

/// Build the request descriptor for one invocation of `command`.
///
/// Required arguments must be present, non-empty and of the declared kind.
/// Optional arguments are included only when supplied and non-empty;
/// numeric ones only when strictly positive, and query filters set to
/// `"all"` are omitted. Declared defaults fill in for absent optionals.
pub fn translate(command: &CommandSpec, arguments: &Map<String, Value>) -> Result<RequestDescriptor, InvocationError> {
    let mut path_variables: Vec<(&str, String)> = Vec::new();
    let mut query = QueryString::new();
    let mut body = Map::new();
    let mut optional_body_fields = 0usize;

    for parameter in &command.parameters {
        let value = match read_argument(parameter, arguments.get(parameter.name)) {
            Some(value) => value,
            None if parameter.required => return Err(InvocationError::MissingArgument(parameter.name)),
            None => continue,
        };

        match parameter.placement {
            ParamPlacement::Path => path_variables.push((parameter.name, value.render())),
            ParamPlacement::Query => query.push(parameter.name, value.render()),
            ParamPlacement::Body => {
                if !parameter.required {
                    optional_body_fields += 1;
                }
                body.insert(parameter.name.to_string(), value.into_json());
            }
        }
    }

    if let Some(message) = command.update_guard
        && optional_body_fields == 0
    {
        return Err(InvocationError::NoFieldsToUpdate(message));
    }

    let variables: Vec<(&str, &str)> = path_variables
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .collect();
    let path = query.append_to(&resolve_path(command.path, &variables));

    let mut request = RequestDescriptor::new(command.method, path);
    request.resource_id = command
        .identifier_parameter()
        .and_then(|identifier| path_variables.iter().find(|(name, _)| *name == identifier.name))
        .map(|(_, value)| value.clone());
    if !body.is_empty() {
        request.body = Some(body);
    }
    Ok(request)
}

/// Read one argument, returning `None` when it counts as not provided.
///
/// Defaults only stand in for optional parameters.
fn read_argument(parameter: &ParameterSpec, raw: Option<&Value>) -> Option<ArgumentValue> {
    let supplied = match (parameter.kind, raw) {
        (ParamKind::String, Some(Value::String(text))) if !text.is_empty() => {
            let is_sentinel = parameter.placement == ParamPlacement::Query
                && text == ALL_SENTINEL
                && parameter.allowed_values.contains(&ALL_SENTINEL);
            (!is_sentinel).then(|| ArgumentValue::Text(text.clone()))
        }
        (ParamKind::Number, Some(Value::Number(number))) => number
            .as_f64()
            .map(|float| float.trunc() as i64)
            .filter(|count| *count > 0)
            .map(ArgumentValue::Count),
        _ => None,
    };

    if parameter.required {
        return supplied;
    }
    supplied.or_else(|| {
        parameter.default_value.map(|default| match parameter.kind {
            ParamKind::String => ArgumentValue::Text(default.to_string()),
            ParamKind::Number => default
                .parse::<i64>()
                .map(ArgumentValue::Count)
                .unwrap_or_else(|_| ArgumentValue::Text(default.to_string())),
        })
    })
}
