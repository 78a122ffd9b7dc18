use thiserror::Error;

/// Catalog invariant violations detected when a registry is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate command name '{0}'")]
    DuplicateName(String),

    #[error("command '{command}' has no required path parameter for placeholder '{{{placeholder}}}'")]
    UnboundPlaceholder { command: String, placeholder: String },

    #[error("update-style command '{0}' declares no optional field")]
    UpdateWithoutFields(String),

    #[error("command '{command}' declares a default for required parameter '{parameter}'")]
    RequiredWithDefault { command: String, parameter: String },

    #[error("command '{0}' is missing a summary or action phrase")]
    MissingDescription(String),
}
