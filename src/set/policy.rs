/* src/set/policy.rs */

/// What `parse` does when a single option fails to assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorHandling {
	/// Keep going through the remaining options and report the last failure.
	#[default]
	Continue,
	/// Return the first failure. Options assigned before it stay committed.
	Stop,
}
