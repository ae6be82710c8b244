//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to a playlist.

use serde::Serialize;

use crate::error::Result;
use crate::media::PlaylistSink;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
///
/// This struct provides information about what happened during execution,
/// including whether it was a dry run and what actions were taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// Playlist length after execution; unknown in dry-run mode.
    pub playlist_count: Option<usize>,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan, dry_run: bool, playlist_count: Option<usize>) -> Self {
        Self {
            success: true,
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            playlist_count,
        }
    }
}

/// Executes operation plans against a playlist.
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (reporting without changes).
///
/// # Examples
///
/// ```
/// use dirload::operations::{MemoryPlaylist, OperationPlan, PlanAction, PlanExecutor};
///
/// let plan = OperationPlan::new("Autoload")
///     .add_action(PlanAction::append("a.mkv"))
///     .add_action(PlanAction::Move { from: 0, to: 2 });
///
/// let mut playlist = MemoryPlaylist::with_entries(["b.mkv"]);
/// let result = PlanExecutor::new(&mut playlist).execute(&plan).unwrap();
/// assert!(result.success);
/// assert_eq!(playlist.entries(), ["a.mkv", "b.mkv"]);
///
/// let result = PlanExecutor::new(&mut playlist).dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
/// assert_eq!(playlist.entries(), ["a.mkv", "b.mkv"]);
/// ```
pub struct PlanExecutor<'a, S: PlaylistSink + ?Sized> {
    sink: &'a mut S,
    dry_run: bool,
}

impl<'a, S: PlaylistSink + ?Sized> PlanExecutor<'a, S> {
    /// Creates a new plan executor.
    #[must_use]
    pub fn new(sink: &'a mut S) -> Self {
        Self {
            sink,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, the executor reports the plan's actions but does
    /// not touch the playlist.
    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// Actions are applied in order. Execution stops at the first action the
    /// playlist rejects; earlier actions stay applied.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails to execute.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            for action in &plan.actions {
                log::info!("[dry-run] {}", action.description());
            }
            return Ok(ExecutionResult::new(plan, true, None));
        }

        for action in &plan.actions {
            self.execute_action(action)?;
        }

        Ok(ExecutionResult::new(plan, false, Some(self.sink.count())))
    }

    fn execute_action(&mut self, action: &PlanAction) -> Result<()> {
        log::debug!("{}", action.description());
        match action {
            PlanAction::Append { file } => self.sink.append(file),
            PlanAction::Move { from, to } => self.sink.move_entry(*from, *to),
        }
    }
}
