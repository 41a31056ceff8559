//! DeleteCourseHandler - Command handler for removing a course.

use std::sync::Arc;

use crate::domain::foundation::{CourseId, DomainError, UserId};
use crate::ports::CourseRepository;

use super::load_owned_course;

#[derive(Debug, Clone)]
pub struct DeleteCourseCommand {
    pub user_id: UserId,
    pub course_id: CourseId,
}

pub struct DeleteCourseHandler {
    courses: Arc<dyn CourseRepository>,
}

impl DeleteCourseHandler {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    pub async fn handle(&self, cmd: DeleteCourseCommand) -> Result<(), DomainError> {
        let course = load_owned_course(self.courses.as_ref(), &cmd.user_id, &cmd.course_id).await?;
        self.courses.delete(&course.id).await?;
        tracing::info!(user_id = %cmd.user_id, course_id = %course.id, "course deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Stores;
    use crate::domain::course::Course;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn owner_deletes_course() {
        let stores = Stores::new();
        let owner = UserId::new();
        let course = Course::new(owner, "Art", "AR1", None).unwrap();
        stores.courses.save(&course).await.unwrap();

        DeleteCourseHandler::new(stores.courses())
            .handle(DeleteCourseCommand {
                user_id: owner,
                course_id: course.id,
            })
            .await
            .unwrap();

        assert_eq!(stores.courses.find_by_id(&course.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn other_students_cannot_delete() {
        let stores = Stores::new();
        let course = Course::new(UserId::new(), "Art", "AR1", None).unwrap();
        stores.courses.save(&course).await.unwrap();

        let err = DeleteCourseHandler::new(stores.courses())
            .handle(DeleteCourseCommand {
                user_id: UserId::new(),
                course_id: course.id,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::CourseNotFound);
        assert!(stores.courses.find_by_id(&course.id).await.unwrap().is_some());
    }
}
