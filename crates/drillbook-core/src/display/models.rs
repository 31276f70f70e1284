//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it through termimad. Weeks
//! are numbered from 1 in every rendering, matching the CLI's week
//! arguments.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{
        Day, Draft, DraftSummary, ExerciseDetails, FocusArea, FocusAreaCount, Item, ItemKind,
        ProgramDocument, ProgramSummary, Routine, VideoDescriptor, Week,
    },
    normalize::{DrillPayload, WireProgram},
};

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ExerciseDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        match (self.sets, self.reps) {
            (Some(sets), Some(reps)) => parts.push(format!("{sets}x{reps}")),
            (Some(sets), None) => parts.push(format!("{sets} sets")),
            (None, Some(reps)) => parts.push(format!("{reps} reps")),
            (None, None) => {}
        }
        if let Some(tempo) = &self.tempo {
            parts.push(format!("tempo {tempo}"));
        }
        if let Some(duration) = &self.duration {
            parts.push(duration.clone());
        }
        f.write_str(&parts.join(", "))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** `{}` ({})", self.title, self.id, self.kind)?;

        match &self.kind {
            ItemKind::Exercise(details) => {
                let summary = details.to_string();
                if !summary.is_empty() {
                    write!(f, " {summary}")?;
                }
            }
            ItemKind::Video(video) => {
                if let Some(duration) = &video.duration {
                    write!(f, " {duration}")?;
                }
            }
            ItemKind::Routine(reference) => write!(f, " routine #{}", reference.routine_id)?,
            ItemKind::Rest => {}
        }

        if let Some(membership) = &self.superset {
            write!(f, " [superset {} #{}]", membership.group, membership.order)?;
        }
        writeln!(f)?;

        if let ItemKind::Exercise(ExerciseDetails {
            notes: Some(notes), ..
        }) = &self.kind
        {
            writeln!(f, "  - Notes: {notes}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#### {}", self.weekday)?;
        writeln!(f)?;
        if self.is_rest_day() {
            writeln!(f, "Rest day")?;
        } else {
            for item in self.authored_items() {
                write!(f, "{item}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {} `{}`", self.position, self.name, self.id)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        if self.collapsed {
            return writeln!(f, "({} items, collapsed)", self.item_count());
        }

        for day in self.days() {
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ProgramDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.title.trim().is_empty() {
            "(untitled)"
        } else {
            self.title.as_str()
        };
        writeln!(f, "# {title}")?;
        writeln!(f)?;

        match &self.focus_area {
            Some(focus) => writeln!(f, "- Focus: {focus}")?,
            None => writeln!(f, "- Focus: (not set)")?,
        }
        writeln!(f, "- Weeks: {}", self.duration())?;
        writeln!(f, "- Items: {}", self.item_count())?;
        if let Some(id) = self.program_id() {
            writeln!(f, "- Saved as program: {id}")?;
        }

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        writeln!(f, "\n## Weeks")?;
        writeln!(f)?;
        for week in self.weeks() {
            write!(f, "{week}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Draft {}", self.id)?;
        writeln!(f)?;
        write!(f, "{}", self.document)
    }
}

impl fmt::Display for WireProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => writeln!(f, "# {id}. {}", self.title)?,
            None => writeln!(f, "# {}", self.title)?,
        }
        writeln!(f)?;
        writeln!(f, "- Focus: {}", self.focus_area)?;
        writeln!(f, "- Weeks: {}", self.duration)?;
        writeln!(f, "- Drills: {}", self.authored_drill_count())?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        for week in &self.weeks {
            writeln!(f, "\n## Week {}: {}", week.week_number, week.title)?;
            writeln!(f)?;
            for day in &week.days {
                let drills: Vec<&str> = day
                    .drills
                    .iter()
                    .map(|drill| match &drill.payload {
                        DrillPayload::Rest => "rest",
                        _ => drill.title.as_str(),
                    })
                    .collect();
                writeln!(f, "- **{}** ({}): {}", day.title, day.day_number, drills.join(", "))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        if self.exercises.is_empty() {
            writeln!(f, "No exercises in this routine.")?;
        } else {
            for (index, exercise) in self.exercises.iter().enumerate() {
                let details = exercise.details.to_string();
                if details.is_empty() {
                    writeln!(f, "{}. {}", index + 1, exercise.title)?;
                } else {
                    writeln!(f, "{}. {} ({details})", index + 1, exercise.title)?;
                }
            }
        }
        writeln!(f)?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}

impl fmt::Display for VideoDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }
        if let Some(duration) = &self.duration {
            writeln!(f, "- **Duration**: {duration}")?;
        }
        if let Some(url) = &self.url {
            writeln!(f, "- **URL**: {url}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ProgramSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }
        writeln!(f, "- **Focus**: {}", self.focus_area)?;
        writeln!(
            f,
            "- **Length**: {} weeks, {} drills",
            self.duration, self.total_drills
        )?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}

impl fmt::Display for DraftSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.title.trim().is_empty() {
            "(untitled)"
        } else {
            self.title.as_str()
        };
        writeln!(f, "## {title} (Draft: {})", self.id)?;
        writeln!(f)?;
        if let Some(program_id) = self.program_id {
            writeln!(f, "- **Editing program**: {program_id}")?;
        }
        writeln!(f, "- **Weeks**: {}", self.duration)?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}

impl fmt::Display for FocusAreaCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.count == 1 { "program" } else { "programs" };
        writeln!(f, "- {} ({} {noun})", self.name, self.count)
    }
}
