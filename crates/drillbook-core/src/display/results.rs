//! Result wrapper types for displaying operation outcomes.
//!
//! Create, update and delete results share one message layout: a status
//! line naming the resource, then (except for deletes) the resource itself.

use std::fmt;

use crate::{
    models::{Draft, Routine, VideoDescriptor},
    normalize::WireProgram,
};

/// A resource that can be named in a result message.
pub trait Labeled {
    /// Lowercase resource noun, e.g. `routine`
    const KIND: &'static str;

    /// Identifier shown in messages.
    fn label_id(&self) -> String;

    /// Human name shown in delete messages.
    fn label_name(&self) -> &str;
}

impl Labeled for Routine {
    const KIND: &'static str = "routine";

    fn label_id(&self) -> String {
        self.id.to_string()
    }

    fn label_name(&self) -> &str {
        &self.name
    }
}

impl Labeled for VideoDescriptor {
    const KIND: &'static str = "video";

    fn label_id(&self) -> String {
        self.id.clone()
    }

    fn label_name(&self) -> &str {
        &self.title
    }
}

impl Labeled for Draft {
    const KIND: &'static str = "draft";

    fn label_id(&self) -> String {
        self.id.to_string()
    }

    fn label_name(&self) -> &str {
        &self.document.title
    }
}

impl Labeled for WireProgram {
    const KIND: &'static str = "program";

    fn label_id(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    fn label_name(&self) -> &str {
        &self.title
    }
}

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use drillbook_core::{display::CreateResult, models::VideoDescriptor};
///
/// let video = VideoDescriptor {
///     id: "yt-42".to_string(),
///     title: "Load and Launch".to_string(),
///     description: None,
///     duration: Some("4:10".to_string()),
///     url: None,
///     thumbnail: None,
/// };
///
/// let output = CreateResult::new(video).to_string();
/// assert!(output.contains("Created video with ID: yt-42"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Labeled + fmt::Display> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created {} with ID: {}",
            T::KIND,
            self.resource.label_id()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The list of changes, when present, is printed before the resource.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Labeled + fmt::Display> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Updated {} with ID: {}",
            T::KIND,
            self.resource.label_id()
        )?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Labeled> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.resource.label_name();
        if name.trim().is_empty() {
            writeln!(f, "Deleted {} (ID: {})", T::KIND, self.resource.label_id())
        } else {
            writeln!(
                f,
                "Deleted {} '{}' (ID: {})",
                T::KIND,
                name,
                self.resource.label_id()
            )
        }
    }
}
