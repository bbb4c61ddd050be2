pub mod rules;
pub mod types;

pub use rules::catalog;
pub use types::{IssueRule, IssueType, SolutionId};
