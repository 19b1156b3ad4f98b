pub mod node;
pub mod label;
pub mod dag;
pub mod walk;
pub mod classify;

pub use node::{CommitNode, IdList};
pub use label::Label;
pub use dag::{Dag, DagStats};
pub use walk::Walker;
pub use classify::classify;
