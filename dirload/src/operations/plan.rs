//! Plan types for playlist operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use serde::Serialize;

/// A single action to be taken during plan execution.
///
/// Each action corresponds to one playlist command of the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlanAction {
    /// Append a file at the end of the playlist.
    Append {
        /// The file to append.
        file: String,
    },

    /// Move the playlist entry at `from` in front of the entry at `to`.
    Move {
        /// Index of the entry to move.
        from: usize,
        /// Index of the entry it is moved in front of.
        to: usize,
    },
}

impl PlanAction {
    /// Shorthand for [`PlanAction::Append`].
    #[must_use]
    pub fn append(file: impl Into<String>) -> Self {
        Self::Append { file: file.into() }
    }

    /// Returns a human-readable description of this action.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirload::operations::PlanAction;
    ///
    /// assert_eq!(PlanAction::append("b.mkv").description(), "Append b.mkv to the playlist");
    /// assert_eq!(
    ///     PlanAction::Move { from: 0, to: 3 }.description(),
    ///     "Move playlist entry 0 in front of entry 3"
    /// );
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Append { file } => format!("Append {file} to the playlist"),
            Self::Move { from, to } => {
                format!("Move playlist entry {from} in front of entry {to}")
            }
        }
    }

    /// The player command implementing this action, as an argument vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirload::operations::PlanAction;
    ///
    /// assert_eq!(PlanAction::append("b.mkv").command(), ["loadfile", "b.mkv", "append"]);
    /// assert_eq!(PlanAction::Move { from: 0, to: 2 }.command(), ["playlist-move", "0", "2"]);
    /// ```
    #[must_use]
    pub fn command(&self) -> Vec<String> {
        match self {
            Self::Append { file } => vec!["loadfile".into(), file.clone(), "append".into()],
            Self::Move { from, to } => {
                vec!["playlist-move".into(), from.to_string(), to.to_string()]
            }
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirload::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Autoload /media/show");
    /// assert_eq!(plan.description, "Autoload /media/show");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirload::operations::{OperationPlan, PlanAction};
    ///
    /// let plan = OperationPlan::new("Test").add_action(PlanAction::append("a.mkv"));
    /// assert_eq!(plan.actions.len(), 1);
    /// ```
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
