//! A stored editor draft.

use serde::{Deserialize, Serialize};

use super::ProgramDocument;

/// An editor draft: a document being authored plus its draft-store ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    pub id: u64,
    pub document: ProgramDocument,
}
