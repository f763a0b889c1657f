//! Command declarations from the registry snapshot.

use serde::Deserialize;

/// A command signature as declared in the registry.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandDecl {
    /// Command name, unique within a registry snapshot.
    pub name: String,
    /// Ordered parameter list.
    #[serde(default)]
    pub params: Vec<Param>,
}

/// A single command parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Base type name, with pointer/array decoration stripped.
    #[serde(rename = "type")]
    pub ty: String,
    /// Whether the base type is a structure known to the registry.
    #[serde(rename = "struct", default)]
    pub is_struct: bool,
    /// Whether the base type is an opaque handle.
    #[serde(rename = "handle", default)]
    pub is_handle: bool,
    /// Data-flow direction; output parameters are written by the API.
    #[serde(default)]
    pub direction: Direction,
}

impl Param {
    /// Returns true if this parameter is written by the API implementation.
    pub fn is_output(&self) -> bool {
        self.direction == Direction::Out
    }
}

/// Parameter data-flow direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Supplied by the caller.
    #[default]
    In,
    /// Populated by the API implementation.
    Out,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_command(content: &str) -> CommandDecl {
        toml::from_str(content).expect("Failed to parse test command")
    }

    #[test]
    fn test_direction_defaults_to_in() {
        let cmd = parse_command(
            r#"
            name = "Submit"
            params = [{ name = "info", type = "SubmitInfo", struct = true }]
            "#,
        );
        assert_eq!(cmd.params[0].direction, Direction::In);
        assert!(!cmd.params[0].is_output());
    }

    #[test]
    fn test_output_direction() {
        let cmd = parse_command(
            r#"
            name = "GetImageInfo"
            params = [
                { name = "device", type = "Device", handle = true },
                { name = "info", type = "ImageInfo", struct = true, direction = "out" },
            ]
            "#,
        );
        assert!(!cmd.params[0].is_output());
        assert!(cmd.params[1].is_output());
    }

    #[test]
    fn test_command_without_params() {
        let cmd = parse_command(r#"name = "ResetDevice""#);
        assert!(cmd.params.is_empty());
    }
}
