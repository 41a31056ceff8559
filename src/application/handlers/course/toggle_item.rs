//! ToggleCourseItemHandler - Flips completion of a lesson, module or lab.

use std::sync::Arc;

use crate::domain::course::{Course, CourseError, ItemSection};
use crate::domain::foundation::{CourseId, DomainError, ItemId, UserId};
use crate::ports::CourseRepository;

use super::load_owned_course;

/// Section and item id arrive as raw path segments.
#[derive(Debug, Clone)]
pub struct ToggleCourseItemCommand {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub section: String,
    pub item_id: String,
}

pub struct ToggleCourseItemHandler {
    courses: Arc<dyn CourseRepository>,
}

impl ToggleCourseItemHandler {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    /// Returns the updated course.
    pub async fn handle(&self, cmd: ToggleCourseItemCommand) -> Result<Course, DomainError> {
        let section: ItemSection = cmd.section.parse()?;
        let mut course =
            load_owned_course(self.courses.as_ref(), &cmd.user_id, &cmd.course_id).await?;

        // An id that cannot be parsed cannot match any item.
        let item_id: ItemId = cmd
            .item_id
            .parse()
            .map_err(|_| CourseError::ItemNotFound(section))?;
        let completed = course.toggle_item(section, &item_id)?;
        self.courses.update(&course).await?;

        tracing::debug!(course_id = %course.id, item_id = %item_id, completed, "course item toggled");
        Ok(course)
    }
}
