//! Saved programs and editor drafts.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::Library;
use crate::{
    error::{DrillbookError, Result},
    models::{DraftSummary, ProgramDocument, ProgramSummary},
    normalize::WireProgram,
    ports::{DraftStore, ProgramStore},
};

#[async_trait]
impl ProgramStore for Library {
    async fn save_program(&self, program: &WireProgram) -> Result<WireProgram> {
        let program = program.clone();
        let saved = self.with_database(move |db| db.save_program(&program)).await?;
        info!(
            "save_program: '{}' stored with {} weeks",
            saved.title, saved.duration
        );
        Ok(saved)
    }

    async fn get_program(&self, id: u64) -> Result<WireProgram> {
        self.with_database(move |db| db.get_program(id))
            .await?
            .ok_or(DrillbookError::ProgramNotFound { id })
    }

    async fn list_programs(&self) -> Result<Vec<ProgramSummary>> {
        self.with_database(|db| db.list_programs()).await
    }

    async fn delete_program(&self, id: u64) -> Result<()> {
        let deleted = self.with_database(move |db| db.delete_program(id)).await?;
        if !deleted {
            return Err(DrillbookError::ProgramNotFound { id });
        }
        debug!("delete_program: {id}");
        Ok(())
    }
}

#[async_trait]
impl DraftStore for Library {
    async fn create_draft(&self, document: &ProgramDocument) -> Result<u64> {
        let document = document.clone();
        let id = self.with_database(move |db| db.create_draft(&document)).await?;
        debug!("create_draft: {id}");
        Ok(id)
    }

    async fn update_draft(&self, id: u64, document: &ProgramDocument) -> Result<()> {
        let document = document.clone();
        let updated = self
            .with_database(move |db| db.update_draft(id, &document))
            .await?;
        if !updated {
            return Err(DrillbookError::DraftNotFound { id });
        }
        Ok(())
    }

    async fn get_draft(&self, id: u64) -> Result<ProgramDocument> {
        self.with_database(move |db| db.get_draft(id))
            .await?
            .ok_or(DrillbookError::DraftNotFound { id })
    }

    async fn list_drafts(&self) -> Result<Vec<DraftSummary>> {
        self.with_database(|db| db.list_drafts()).await
    }

    async fn delete_draft(&self, id: u64) -> Result<()> {
        let deleted = self.with_database(move |db| db.delete_draft(id)).await?;
        if !deleted {
            return Err(DrillbookError::DraftNotFound { id });
        }
        Ok(())
    }
}

/// Program store seen by an editor saving a stored draft.
///
/// Saving links the draft to the program in the same transaction, so a
/// retried save updates that program instead of inserting another one.
pub(crate) struct DraftProgramStore<'a> {
    pub(crate) library: &'a Library,
    pub(crate) draft_id: u64,
}

#[async_trait]
impl ProgramStore for DraftProgramStore<'_> {
    async fn save_program(&self, program: &WireProgram) -> Result<WireProgram> {
        let program = program.clone();
        let draft_id = self.draft_id;
        let saved = self
            .library
            .with_database(move |db| db.save_draft_program(draft_id, &program))
            .await
            .map_err(|e| {
                warn!("save_program: draft {draft_id} not saved: {e}");
                e
            })?;
        info!(
            "save_program: '{}' stored from draft {draft_id} with {} weeks",
            saved.title, saved.duration
        );
        Ok(saved)
    }

    async fn get_program(&self, id: u64) -> Result<WireProgram> {
        self.library.get_program(id).await
    }

    async fn list_programs(&self) -> Result<Vec<ProgramSummary>> {
        self.library.list_programs().await
    }

    async fn delete_program(&self, id: u64) -> Result<()> {
        self.library.delete_program(id).await
    }
}
