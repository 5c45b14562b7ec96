//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::model::{CursorShape, Rect, Size};

/// What needs repainting before the next present
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Damage {
    /// Nothing changed
    #[default]
    None,
    /// Repaint everything
    Full,
    /// Repaint only these areas
    Areas(Vec<Rect>),
}

impl Damage {
    /// Fold the damage a command implies into this one
    pub fn add(&mut self, cmd: &Cmd) {
        match cmd {
            Cmd::Redraw => *self = Damage::Full,
            Cmd::RedrawAreas(areas) if !areas.is_empty() => match self {
                Damage::Full => {}
                Damage::None => *self = Damage::Areas(areas.clone()),
                Damage::Areas(existing) => existing.extend_from_slice(areas),
            },
            Cmd::Batch(cmds) => cmds.iter().for_each(|c| self.add(c)),
            _ => {}
        }
    }

    pub fn needs_redraw(&self) -> bool {
        match self {
            Damage::None => false,
            Damage::Full => true,
            Damage::Areas(areas) => !areas.is_empty(),
        }
    }
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw (every relayout moves region geometry)
    Redraw,
    /// Request a partial redraw of specific areas (hover and press changes)
    RedrawAreas(Vec<Rect>),
    /// Change the window's pointer cursor
    SetCursor(CursorShape),
    /// The container's minimum size changed; the window should follow
    SetMinimumSize(Size),
    /// Request application exit
    Quit,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Collapse a list of commands, dropping `None`s. Empty input yields `None`.
    pub fn from_cmds(cmds: Vec<Cmd>) -> Option<Cmd> {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::RedrawAreas(areas) => !areas.is_empty(),
            // Cursor changes are applied to the window directly
            Cmd::SetCursor(_) => false,
            Cmd::SetMinimumSize(_) => false,
            Cmd::Quit => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Visit every command, flattening nested batches
    pub fn for_each(self, f: &mut impl FnMut(Cmd)) {
        match self {
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    cmd.for_each(f);
                }
            }
            other => f(other),
        }
    }
}
