//! Rule model: typed expectations about paths under a project root.

mod model;
mod root;

pub use model::{Category, Rule, RuleKind, RuleScope};
pub use root::{ProjectRoot, normalize_target};
