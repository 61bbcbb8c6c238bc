pub mod commit;
pub mod event;
pub mod language;
pub mod repo;

pub use commit::{CommitDetail, CommitSummary};
pub use event::{Event, EventPayload, EventRepo, PushedCommit};
pub use language::{LanguageBytes, LanguageShare, LanguageTally};
pub use repo::RepoSummary;
