use indexmap::IndexMap;
use m2a_types::{CommandSpec, Domain, ParamPlacement};
use once_cell::sync::Lazy;

use crate::{RegistryError, builtin_commands};

static BUILTIN: Lazy<Result<CommandRegistry, RegistryError>> =
    Lazy::new(|| CommandRegistry::from_commands(builtin_commands()));

/// Validated collection of commands keyed by tool name.
///
/// Iteration follows declaration order. Read-only once built, so it can be
/// shared freely across concurrent invocations.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: IndexMap<&'static str, CommandSpec>,
}

impl CommandRegistry {
    /// The process-wide built-in catalog, validated on first access.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use m2a_registry::CommandRegistry;
    ///
    /// let registry = CommandRegistry::builtin().expect("valid catalog");
    /// assert!(registry.get("list_sources").is_some());
    /// ```
    pub fn builtin() -> Result<&'static CommandRegistry, RegistryError> {
        Lazy::force(&BUILTIN).as_ref().map_err(Clone::clone)
    }

    /// Builds a registry, rejecting catalogs that break placement or naming rules.
    pub fn from_commands(commands: Vec<CommandSpec>) -> Result<Self, RegistryError> {
        let mut indexed = IndexMap::with_capacity(commands.len());
        for command in commands {
            validate_command(&command)?;
            if indexed.contains_key(command.name) {
                return Err(RegistryError::DuplicateName(command.name.to_string()));
            }
            indexed.insert(command.name, command);
        }
        Ok(Self { commands: indexed })
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.values()
    }

    pub fn by_domain(&self, domain: Domain) -> impl Iterator<Item = &CommandSpec> {
        self.iter().filter(move |command| command.domain == domain)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn validate_command(command: &CommandSpec) -> Result<(), RegistryError> {
    if command.summary.is_empty() || command.action.is_empty() {
        return Err(RegistryError::MissingDescription(command.name.to_string()));
    }

    if let Some(parameter) = command
        .required_parameters()
        .find(|parameter| parameter.default_value.is_some())
    {
        return Err(RegistryError::RequiredWithDefault {
            command: command.name.to_string(),
            parameter: parameter.name.to_string(),
        });
    }

    for placeholder in command.path_placeholders() {
        let bound = command
            .parameter(placeholder)
            .is_some_and(|parameter| parameter.required && parameter.placement == ParamPlacement::Path);
        if !bound {
            return Err(RegistryError::UnboundPlaceholder {
                command: command.name.to_string(),
                placeholder: placeholder.to_string(),
            });
        }
    }

    if command.update_guard.is_some() {
        let has_optional_field = command
            .parameters
            .iter()
            .any(|parameter| !parameter.required && parameter.placement == ParamPlacement::Body);
        if !has_optional_field {
            return Err(RegistryError::UpdateWithoutFields(command.name.to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use m2a_types::{HttpMethod, ParameterSpec, ResponseShape};

    use super::*;

    fn registry() -> &'static CommandRegistry {
        CommandRegistry::builtin().expect("builtin catalog is valid")
    }

    #[test]
    fn builtin_catalog_has_every_command_with_unique_names() {
        let registry = registry();
        assert_eq!(registry.len(), 37);
        let unique: HashSet<_> = registry.names().collect();
        assert_eq!(unique.len(), registry.len());
    }

    #[test]
    fn domain_counts_match_declaration() {
        let registry = registry();
        assert_eq!(registry.by_domain(Domain::Connect).count(), 14);
        assert_eq!(registry.by_domain(Domain::Live).count(), 11);
        assert_eq!(registry.by_domain(Domain::Capture).count(), 7);
        assert_eq!(registry.by_domain(Domain::Vod).count(), 5);
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let names: Vec<_> = registry().names().take(3).collect();
        assert_eq!(names, ["list_sources", "get_source", "create_source"]);
        assert_eq!(registry().names().last(), Some("get_playback_url"));
    }

    #[test]
    fn deletion_commands_acknowledge_named_resources() {
        let registry = registry();
        let acked: Vec<_> = registry
            .iter()
            .filter_map(|command| match command.response {
                ResponseShape::DeletionAck { resource } => Some((command.name, resource)),
                ResponseShape::Passthrough => None,
            })
            .collect();
        assert_eq!(
            acked,
            [
                ("delete_source", "Source"),
                ("delete_channel", "Channel"),
                ("delete_vod_asset", "VOD asset")
            ]
        );
        assert!(
            registry
                .iter()
                .filter(|command| command.method == HttpMethod::Delete)
                .all(|command| command.response != ResponseShape::Passthrough)
        );
    }

    #[test]
    fn update_guards_carry_their_messages() {
        let registry = registry();
        assert_eq!(
            registry.get("update_source").and_then(|command| command.update_guard),
            Some("at least one field to update is required")
        );
        assert_eq!(
            registry.get("update_vod_metadata").and_then(|command| command.update_guard),
            Some("at least one metadata field is required")
        );
    }

    #[test]
    fn create_clip_sends_capture_id_in_body() {
        let command = registry().get("create_clip").expect("create_clip");
        assert!(command.identifier_parameter().is_none());
        assert_eq!(
            command.parameter("capture_id").map(|parameter| parameter.placement),
            Some(ParamPlacement::Body)
        );
    }

    #[test]
    fn playback_format_is_a_query_parameter_with_default() {
        let command = registry().get("get_playback_url").expect("get_playback_url");
        let format = command.parameter("format").expect("format");
        assert_eq!(format.placement, ParamPlacement::Query);
        assert_eq!(format.default_value, Some("hls"));
        assert_eq!(format.allowed_values, ["hls", "dash", "mp4"]);
    }

    #[test]
    fn rejects_duplicate_names() {
        let command = CommandSpec::new(Domain::Connect, "list_sources", HttpMethod::Get, "/api/v2/connect/sources")
            .summary("List")
            .action("list sources");
        let error = CommandRegistry::from_commands(vec![command.clone(), command]).expect_err("duplicate");
        assert_eq!(error, RegistryError::DuplicateName("list_sources".into()));
    }

    #[test]
    fn rejects_placeholder_without_required_parameter() {
        let command = CommandSpec::new(Domain::Live, "get_channel", HttpMethod::Get, "/api/v3/live/channels/{channel_id}")
            .summary("Get")
            .action("get channel")
            .param(ParameterSpec::string("channel_id"));
        let error = CommandRegistry::from_commands(vec![command]).expect_err("unbound");
        assert!(matches!(error, RegistryError::UnboundPlaceholder { .. }));
        assert_eq!(
            error.to_string(),
            "command 'get_channel' has no required path parameter for placeholder '{channel_id}'"
        );
    }

    #[test]
    fn rejects_required_parameter_with_default() {
        let command = CommandSpec::new(Domain::Vod, "get_playback_url", HttpMethod::Get, "/api/v1/vod/assets/{asset_id}/playback")
            .summary("Get playback")
            .action("get playback URL")
            .param(ParameterSpec::string("asset_id").required())
            .param(ParameterSpec::string("format").required().default_value("hls"));
        let error = CommandRegistry::from_commands(vec![command]).expect_err("required default");
        assert_eq!(
            error,
            RegistryError::RequiredWithDefault {
                command: "get_playback_url".into(),
                parameter: "format".into(),
            }
        );
    }

    #[test]
    fn rejects_update_guard_without_optional_fields() {
        let command = CommandSpec::new(Domain::Vod, "update_vod_metadata", HttpMethod::Put, "/api/v1/vod/assets/{asset_id}")
            .summary("Update")
            .action("update VOD metadata")
            .requires_any_field("at least one metadata field is required")
            .param(ParameterSpec::string("asset_id").required());
        let error = CommandRegistry::from_commands(vec![command]).expect_err("no fields");
        assert_eq!(error, RegistryError::UpdateWithoutFields("update_vod_metadata".into()));
    }
}
