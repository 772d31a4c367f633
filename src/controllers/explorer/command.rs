use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown navigation command `{name}`, expected one of: {}", NavigationCommand::NAMES.join(", "))]
pub struct ParseNavigationCommandError {
    pub name: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// A single user intent translated into a viewport change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NavigationCommand {
    ZoomIn,
    ZoomOut,
    IncreaseResolution,
    DecreaseResolution,
    Move(Direction),
    ResetView,
}

impl NavigationCommand {
    pub const ALL: [NavigationCommand; 9] = [
        NavigationCommand::ZoomIn,
        NavigationCommand::ZoomOut,
        NavigationCommand::IncreaseResolution,
        NavigationCommand::DecreaseResolution,
        NavigationCommand::Move(Direction::Left),
        NavigationCommand::Move(Direction::Right),
        NavigationCommand::Move(Direction::Up),
        NavigationCommand::Move(Direction::Down),
        NavigationCommand::ResetView,
    ];

    pub const NAMES: [&'static str; 9] = [
        "zoom-in",
        "zoom-out",
        "increase-resolution",
        "decrease-resolution",
        "move-left",
        "move-right",
        "move-up",
        "move-down",
        "reset-view",
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            NavigationCommand::ZoomIn => "zoom-in",
            NavigationCommand::ZoomOut => "zoom-out",
            NavigationCommand::IncreaseResolution => "increase-resolution",
            NavigationCommand::DecreaseResolution => "decrease-resolution",
            NavigationCommand::Move(Direction::Left) => "move-left",
            NavigationCommand::Move(Direction::Right) => "move-right",
            NavigationCommand::Move(Direction::Up) => "move-up",
            NavigationCommand::Move(Direction::Down) => "move-down",
            NavigationCommand::ResetView => "reset-view",
        }
    }
}

impl fmt::Display for NavigationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NavigationCommand {
    type Err = ParseNavigationCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");

        NavigationCommand::ALL
            .into_iter()
            .find(|command| command.name() == name)
            .ok_or_else(|| ParseNavigationCommandError {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_all_commands() {
        for (command, name) in NavigationCommand::ALL.iter().zip(NavigationCommand::NAMES) {
            assert_eq!(command.name(), name);
            assert_eq!(command.to_string(), name);
        }
    }

    #[test]
    fn test_parse_every_name() {
        for command in NavigationCommand::ALL {
            assert_eq!(command.name().parse::<NavigationCommand>(), Ok(command));
        }
    }

    #[test]
    fn test_parse_accepts_spaces_and_case() {
        assert_eq!(
            "Zoom In".parse::<NavigationCommand>(),
            Ok(NavigationCommand::ZoomIn)
        );
        assert_eq!(
            "move_down".parse::<NavigationCommand>(),
            Ok(NavigationCommand::Move(Direction::Down))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_name() {
        let err = "screenshot".parse::<NavigationCommand>().unwrap_err();

        assert_eq!(err.name, "screenshot");
        assert!(err.to_string().starts_with("unknown navigation command `screenshot`"));
        assert!(err.to_string().contains("reset-view"));
    }
}
