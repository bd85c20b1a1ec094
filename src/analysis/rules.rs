//! Points rules and identifier policy for a table run.

use crate::error::{Result, TableError};
use crate::models::IdentifierField;

/// Rules applied while building a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRules {
    /// Points awarded for a win.
    pub win_points: u32,
    /// Points awarded for a draw.
    pub draw_points: u32,
    /// Team field used as the identifier.
    pub identifier: IdentifierField,
    /// Reject an identifier that shows up under two display names
    /// instead of keeping the first name.
    pub strict_names: bool,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            win_points: 3,
            draw_points: 1,
            identifier: IdentifierField::Key,
            strict_names: false,
        }
    }
}

impl TableRules {
    /// Rules of the two-points-for-a-win era.
    pub fn two_points_for_a_win() -> Self {
        Self {
            win_points: 2,
            ..Self::default()
        }
    }

    /// Check that a win is worth at least as much as a draw.
    pub fn validate(&self) -> Result<()> {
        if self.win_points < self.draw_points {
            return Err(TableError::InvalidRules(format!(
                "a win ({} pts) must be worth at least a draw ({} pts)",
                self.win_points, self.draw_points
            )));
        }
        Ok(())
    }
}
