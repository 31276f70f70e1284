//! Video descriptor storage and search.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::VideoDescriptor,
};

const UPSERT_VIDEO_SQL: &str = "INSERT INTO videos (id, title, description, duration, url, thumbnail, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) ON CONFLICT(id) DO UPDATE SET title = excluded.title, description = excluded.description, duration = excluded.duration, url = excluded.url, thumbnail = excluded.thumbnail";
const SELECT_VIDEO_SQL: &str =
    "SELECT id, title, description, duration, url, thumbnail FROM videos WHERE id = ?1";
const SEARCH_VIDEOS_SQL: &str = "SELECT id, title, description, duration, url, thumbnail FROM videos WHERE title LIKE ?1 OR description LIKE ?1 ORDER BY title COLLATE NOCASE, id";
const DELETE_VIDEO_SQL: &str = "DELETE FROM videos WHERE id = ?1";

impl super::Database {
    fn build_video_from_row(row: &rusqlite::Row) -> rusqlite::Result<VideoDescriptor> {
        Ok(VideoDescriptor {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            duration: row.get(3)?,
            url: row.get(4)?,
            thumbnail: row.get(5)?,
        })
    }

    /// Inserts a descriptor, replacing any existing one with the same ID.
    pub fn upsert_video(&mut self, video: &VideoDescriptor) -> Result<()> {
        self.connection
            .execute(
                UPSERT_VIDEO_SQL,
                params![
                    &video.id,
                    &video.title,
                    video.description.as_deref(),
                    video.duration.as_deref(),
                    video.url.as_deref(),
                    video.thumbnail.as_deref(),
                    Timestamp::now().to_string()
                ],
            )
            .db_context("Failed to store video")?;
        Ok(())
    }

    /// Retrieves a descriptor by its external ID.
    pub fn get_video(&self, id: &str) -> Result<Option<VideoDescriptor>> {
        self.connection
            .query_row(SELECT_VIDEO_SQL, params![id], Self::build_video_from_row)
            .optional()
            .db_context("Failed to query video")
    }

    /// Descriptors whose title or description contains `query`
    /// (case-insensitive). An empty query lists every video.
    pub fn search_videos(&self, query: &str) -> Result<Vec<VideoDescriptor>> {
        let mut stmt = self
            .connection
            .prepare(SEARCH_VIDEOS_SQL)
            .db_context("Failed to prepare query")?;

        let pattern = format!("%{}%", query.trim());
        let videos = stmt
            .query_map(params![pattern], Self::build_video_from_row)
            .db_context("Failed to search videos")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch videos")?;

        Ok(videos)
    }

    /// Deletes a descriptor. Returns false when no such video exists.
    pub fn delete_video(&mut self, id: &str) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_VIDEO_SQL, params![id])
            .db_context("Failed to delete video")?;
        Ok(deleted > 0)
    }
}
