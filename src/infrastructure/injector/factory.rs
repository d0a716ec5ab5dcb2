//! Injector selection by tool name

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::application::ports::KeyInjector;

use super::dry_run::DryRunInjector;
use super::enigo::EnigoInjector;

/// Valid injector tool names, as accepted on the command line and in config
pub const VALID_INJECTOR_TOOLS: &[&str] = &["enigo", "dry-run"];

/// Available key injection backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InjectorTool {
    /// Cross-platform enigo library (default on all platforms)
    #[default]
    Enigo,
    /// Log key events without sending them
    DryRun,
}

impl fmt::Display for InjectorTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectorTool::Enigo => write!(f, "enigo"),
            InjectorTool::DryRun => write!(f, "dry-run"),
        }
    }
}

/// Error type for parsing an injector tool name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseInjectorToolError {
    pub value: String,
}

impl fmt::Display for ParseInjectorToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid injector '{}'. Valid options: {}",
            self.value,
            VALID_INJECTOR_TOOLS.join(", ")
        )
    }
}

impl std::error::Error for ParseInjectorToolError {}

impl FromStr for InjectorTool {
    type Err = ParseInjectorToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "enigo" => Ok(InjectorTool::Enigo),
            "dry-run" | "dryrun" | "dry_run" => Ok(InjectorTool::DryRun),
            _ => Err(ParseInjectorToolError {
                value: s.to_string(),
            }),
        }
    }
}

/// Create the injector adapter for a tool.
///
/// The concrete backend is chosen once here; the runner only ever sees
/// the [`KeyInjector`] port.
pub fn create_injector(tool: InjectorTool) -> Arc<dyn KeyInjector> {
    match tool {
        InjectorTool::Enigo => Arc::new(EnigoInjector::new()),
        InjectorTool::DryRun => Arc::new(DryRunInjector::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injector_tool_display() {
        assert_eq!(InjectorTool::Enigo.to_string(), "enigo");
        assert_eq!(InjectorTool::DryRun.to_string(), "dry-run");
    }

    #[test]
    fn injector_tool_from_str() {
        assert_eq!("enigo".parse::<InjectorTool>().unwrap(), InjectorTool::Enigo);
        assert_eq!("ENIGO".parse::<InjectorTool>().unwrap(), InjectorTool::Enigo);
        assert_eq!("dry-run".parse::<InjectorTool>().unwrap(), InjectorTool::DryRun);
        assert_eq!("dry_run".parse::<InjectorTool>().unwrap(), InjectorTool::DryRun);
    }

    #[test]
    fn injector_tool_from_str_invalid() {
        let err = "xdotool".parse::<InjectorTool>().unwrap_err();
        assert_eq!(err.value, "xdotool");
        assert!(err.to_string().contains("enigo, dry-run"));
    }

    #[test]
    fn injector_tool_default() {
        assert_eq!(InjectorTool::default(), InjectorTool::Enigo);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for name in VALID_INJECTOR_TOOLS {
            let tool: InjectorTool = name.parse().unwrap();
            assert_eq!(tool.to_string(), *name);
        }
    }

    #[tokio::test]
    async fn create_dry_run_injector() {
        let injector = create_injector(InjectorTool::DryRun);
        assert!(injector.inject_unicode('k').await.is_ok());
    }
}
