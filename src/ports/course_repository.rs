//! Course repository port.
//!
//! Lookups by id do not check ownership; callers compare `Course::user_id`
//! with the caller and report a foreign course as not found.

use async_trait::async_trait;

use crate::domain::course::Course;
use crate::domain::foundation::{CourseId, DomainError, UserId};

/// Repository port for courses.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Save a new course.
    async fn save(&self, course: &Course) -> Result<(), DomainError>;

    /// Overwrite an existing course (items and cached progress).
    ///
    /// # Errors
    ///
    /// - `CourseNotFound` if the course doesn't exist
    async fn update(&self, course: &Course) -> Result<(), DomainError>;

    /// Find a course by id.
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError>;

    /// All courses owned by a user, oldest first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Course>, DomainError>;

    /// Delete a course.
    ///
    /// # Errors
    ///
    /// - `CourseNotFound` if the course doesn't exist
    async fn delete(&self, id: &CourseId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CourseRepository) {}
    }
}
