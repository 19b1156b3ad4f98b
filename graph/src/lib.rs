pub mod core;
pub mod source;
pub mod git_backend;
pub mod export;

pub use core::{classify, CommitNode, Dag, DagStats, IdList, Label, Walker};
pub use git_backend::GitSource;
pub use source::{CommitDetail, CommitSource, SourceError};
