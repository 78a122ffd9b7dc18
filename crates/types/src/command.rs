use std::{error::Error, fmt, str::FromStr};

use serde::Serialize;

/// HTTP verbs used by the backend endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether non-path arguments travel in the query string rather than a JSON body.
    pub fn carries_query(&self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Get)
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::Delete)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product area a command belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Sources, subscribers, subscriptions and schedules.
    Connect,
    /// Channels, encoder configurations and workflows.
    Live,
    /// Live-to-VOD capture jobs, exports and clips.
    Capture,
    /// VOD assets and playback.
    Vod,
}

impl Domain {
    pub const ALL: [Domain; 4] = [Domain::Connect, Domain::Live, Domain::Capture, Domain::Vod];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Live => "live",
            Self::Capture => "capture",
            Self::Vod => "vod",
        }
    }

    /// Human-readable product name.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Connect => "M2A Connect",
            Self::Live => "M2A Live",
            Self::Capture => "M2A Capture",
            Self::Vod => "M2A VOD",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "connect" => Ok(Self::Connect),
            "live" => Ok(Self::Live),
            "capture" => Ok(Self::Capture),
            "vod" => Ok(Self::Vod),
            _ => Err(ParseDomainError),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDomainError;

impl fmt::Display for ParseDomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid domain; expected one of 'connect', 'live', 'capture' or 'vod'")
    }
}

impl Error for ParseDomainError {}

/// Value kind accepted for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    String,
    Number,
}

impl ParamKind {
    /// JSON-schema type name for this kind.
    pub fn json_type(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

/// Where an argument lands in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamPlacement {
    /// Substituted into the endpoint template placeholder of the same name.
    Path,
    /// Appended to the query string.
    Query,
    /// Inserted as a field of the JSON request body.
    Body,
}

/// Declares a single tool argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    /// Argument name as advertised to callers (e.g., "source_id")
    pub name: &'static str,
    /// Expected value kind
    pub kind: ParamKind,
    /// Whether invocation fails when the argument is absent or empty
    pub required: bool,
    /// Request location; resolved against the owning command by [`CommandSpec::param`]
    pub placement: ParamPlacement,
    /// Human-readable description surfaced in the tool schema
    pub description: &'static str,
    /// Values advertised in the schema; not re-checked at invocation time
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<&'static str>,
    /// Value used when the caller supplies nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<&'static str>,
}

impl ParameterSpec {
    fn new(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            placement: ParamPlacement::Body,
            description: "",
            allowed_values: Vec::new(),
            default_value: None,
        }
    }

    /// Optional string argument.
    pub fn string(name: &'static str) -> Self {
        Self::new(name, ParamKind::String)
    }

    /// Optional numeric argument.
    pub fn number(name: &'static str) -> Self {
        Self::new(name, ParamKind::Number)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn one_of(mut self, values: &[&'static str]) -> Self {
        self.allowed_values = values.to_vec();
        self
    }

    pub fn default_value(mut self, value: &'static str) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// What the caller receives when the backend call succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseShape {
    /// The backend response body, unparsed.
    ///
    /// Tool results travel as text, so invalid UTF-8 sequences are replaced
    /// with U+FFFD; valid UTF-8 bodies pass through byte for byte.
    Passthrough,
    /// A synthesized acknowledgement naming the deleted resource.
    DeletionAck { resource: &'static str },
}

/// Declarative description of one callable tool.
///
/// A command pairs the advertised tool name and argument schema with the
/// backend endpoint it drives. Both the protocol layer (schema advertising)
/// and the translator (request building) read from the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    /// Unique tool name (e.g., "list_sources")
    pub name: &'static str,
    /// Product area
    pub domain: Domain,
    /// Description advertised to callers
    pub summary: &'static str,
    /// HTTP method of the backend endpoint
    pub method: HttpMethod,
    /// Versioned endpoint template (e.g., "/api/v2/connect/sources/{source_id}")
    pub path: &'static str,
    /// Verb phrase used in failure messages (e.g., "list sources")
    pub action: &'static str,
    /// Ordered argument declarations
    pub parameters: Vec<ParameterSpec>,
    /// Success payload handling
    pub response: ResponseShape,
    /// Message reported when an update-style command receives no fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_guard: Option<&'static str>,
}

impl CommandSpec {
    pub fn new(domain: Domain, name: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            name,
            domain,
            summary: "",
            method,
            path,
            action: "",
            parameters: Vec::new(),
            response: ResponseShape::Passthrough,
            update_guard: None,
        }
    }

    pub fn summary(mut self, summary: &'static str) -> Self {
        self.summary = summary;
        self
    }

    pub fn action(mut self, action: &'static str) -> Self {
        self.action = action;
        self
    }

    /// Append a parameter, resolving its placement from the endpoint.
    ///
    /// Names matching a `{placeholder}` in the template are path parameters;
    /// the rest go to the query string for GET/DELETE and to the body otherwise.
    pub fn param(mut self, mut parameter: ParameterSpec) -> Self {
        parameter.placement = if self.path_placeholders().contains(&parameter.name) {
            ParamPlacement::Path
        } else if self.method.carries_query() {
            ParamPlacement::Query
        } else {
            ParamPlacement::Body
        };
        self.parameters.push(parameter);
        self
    }

    pub fn acknowledges_deletion(mut self, resource: &'static str) -> Self {
        self.response = ResponseShape::DeletionAck { resource };
        self
    }

    /// Mark the command as update-style: at least one optional field must be supplied.
    pub fn requires_any_field(mut self, message: &'static str) -> Self {
        self.update_guard = Some(message);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|parameter| parameter.name == name)
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter().filter(|parameter| parameter.required)
    }

    /// The parameter substituted into the endpoint template, if any.
    pub fn identifier_parameter(&self) -> Option<&ParameterSpec> {
        self.parameters
            .iter()
            .find(|parameter| parameter.placement == ParamPlacement::Path)
    }

    /// Placeholder names found in the endpoint template, in order.
    pub fn path_placeholders(&self) -> Vec<&'static str> {
        let mut placeholders = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                break;
            };
            placeholders.push(&after[..end]);
            rest = &after[end + 1..];
        }
        placeholders
    }
}
