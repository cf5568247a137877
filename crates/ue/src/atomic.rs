//! All-or-nothing execution of state transitions over a revm journal.

use revm::context_interface::journaled_state::JournalTr;

/// Runs `f` against `journal` inside a checkpoint.
///
/// The checkpoint is committed when `f` returns `Ok` and reverted when it
/// returns `Err`, discarding every journaled change `f` made, including
/// changes made before the failing step.
pub fn execute_atomic<J, T, E, F>(journal: &mut J, f: F) -> Result<T, E>
where
    J: JournalTr,
    F: FnOnce(&mut J) -> Result<T, E>,
{
    let checkpoint = journal.checkpoint();
    match f(journal) {
        Ok(value) => {
            journal.checkpoint_commit();
            Ok(value)
        }
        Err(err) => {
            journal.checkpoint_revert(checkpoint);
            Err(err)
        }
    }
}
