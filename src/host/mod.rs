//! Declarative registration table for editor hosts.
//!
//! Hosts read this once at startup to wire file associations, commands, key
//! chords and menu entries. Nothing here is dynamic.

use crate::parser::TokenCategory;
use crate::syntax::{MODE_ASSOCIATIONS, Mode, ModeAssociation};

/// Commands the host exposes to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCommand {
    /// Start or refocus the REPL for the current document
    StartRepl,
    /// Compile the current document
    Compile,
    /// Re-scan the current document's theorem outline
    RefreshOutline,
    /// Re-query the interpreter's compiler backends
    RefreshBackends,
}

/// A command with its key chord and menu label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandBinding {
    pub command: HostCommand,
    /// Key chord in the host's notation
    pub key: &'static str,
    pub menu_label: &'static str,
    /// Modes the command is offered in
    pub modes: &'static [Mode],
}

/// Everything a host registers at startup.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    pub menu_title: &'static str,
    pub modes: &'static [ModeAssociation],
    pub commands: &'static [CommandBinding],
    /// Highlight categories in legend order
    pub highlight_legend: &'static [TokenCategory],
}

const BOTH_MODES: &[Mode] = &[Mode::Cryptol, Mode::Batch];
const SOURCE_ONLY: &[Mode] = &[Mode::Cryptol];

const COMMANDS: &[CommandBinding] = &[
    CommandBinding {
        command: HostCommand::StartRepl,
        key: "C-c C-l",
        menu_label: "Start REPL",
        modes: BOTH_MODES,
    },
    CommandBinding {
        command: HostCommand::Compile,
        key: "C-c C-c",
        menu_label: "Compile",
        modes: SOURCE_ONLY,
    },
    CommandBinding {
        command: HostCommand::RefreshOutline,
        key: "C-c C-o",
        menu_label: "Refresh Theorem Index",
        modes: SOURCE_ONLY,
    },
    CommandBinding {
        command: HostCommand::RefreshBackends,
        key: "C-c C-b",
        menu_label: "Refresh Backends",
        modes: SOURCE_ONLY,
    },
];

const HIGHLIGHT_LEGEND: &[TokenCategory] = &[
    TokenCategory::StringMarker,
    TokenCategory::BuiltinSymbol,
    TokenCategory::OperatorSymbol,
    TokenCategory::ConstantKeyword,
    TokenCategory::TypeKeyword,
    TokenCategory::ControlKeyword,
    TokenCategory::Comment,
];

static REGISTRATION: Registration = Registration {
    menu_title: "Cryptol",
    modes: MODE_ASSOCIATIONS,
    commands: COMMANDS,
    highlight_legend: HIGHLIGHT_LEGEND,
};

/// The registration table.
pub fn registration() -> &'static Registration {
    &REGISTRATION
}

impl Registration {
    /// Commands offered in `mode`.
    pub fn commands_for(&self, mode: Mode) -> impl Iterator<Item = &CommandBinding> {
        self.commands
            .iter()
            .filter(move |binding| binding.modes.contains(&mode))
    }

    /// Command bound to `key`, if any.
    pub fn command_for_key(&self, key: &str) -> Option<HostCommand> {
        self.commands
            .iter()
            .find(|binding| binding.key == key)
            .map(|binding| binding.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        let reg = registration();
        for (i, a) in reg.commands.iter().enumerate() {
            for b in &reg.commands[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn test_legend_matches_highlight_indices() {
        for (index, category) in registration().highlight_legend.iter().enumerate() {
            assert_eq!(category.to_highlight_index() as usize, index);
        }
    }

    #[test]
    fn test_batch_mode_only_offers_repl() {
        let commands: Vec<_> = registration()
            .commands_for(Mode::Batch)
            .map(|b| b.command)
            .collect();
        assert_eq!(commands, vec![HostCommand::StartRepl]);
    }

    #[test]
    fn test_command_for_key() {
        assert_eq!(
            registration().command_for_key("C-c C-l"),
            Some(HostCommand::StartRepl)
        );
        assert_eq!(registration().command_for_key("C-x C-f"), None);
    }
}
