use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::course::Course;
use crate::domain::foundation::{CourseId, DomainError, ErrorCode, UserId};
use crate::ports::CourseRepository;

#[derive(Default)]
pub struct InMemoryCourseRepository {
    courses: RwLock<Vec<Course>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found() -> DomainError {
    DomainError::new(ErrorCode::CourseNotFound, "Course not found")
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn save(&self, course: &Course) -> Result<(), DomainError> {
        self.courses.write().await.push(course.clone());
        Ok(())
    }

    async fn update(&self, course: &Course) -> Result<(), DomainError> {
        let mut courses = self.courses.write().await;
        let slot = courses
            .iter_mut()
            .find(|existing| existing.id == course.id)
            .ok_or_else(not_found)?;
        *slot = course.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        Ok(self
            .courses
            .read()
            .await
            .iter()
            .find(|course| &course.id == id)
            .cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Course>, DomainError> {
        let mut owned: Vec<Course> = self
            .courses
            .read()
            .await
            .iter()
            .filter(|course| course.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.as_datetime().cmp(b.created_at.as_datetime()));
        Ok(owned)
    }

    async fn delete(&self, id: &CourseId) -> Result<(), DomainError> {
        let mut courses = self.courses.write().await;
        let before = courses.len();
        courses.retain(|course| &course.id != id);
        if courses.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(user_id: UserId, code: &str) -> Course {
        Course::new(user_id, "Algorithms", code, None).unwrap()
    }

    #[tokio::test]
    async fn find_by_user_keeps_creation_order_and_ownership() {
        let repo = InMemoryCourseRepository::new();
        let owner = UserId::new();
        let first = course(owner, "CS101");
        let second = course(owner, "CS102");
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();
        repo.save(&course(UserId::new(), "OTHER")).await.unwrap();

        let codes: Vec<String> = repo
            .find_by_user(&owner)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.code)
            .collect();
        assert_eq!(codes, vec!["CS101", "CS102"]);
    }

    #[tokio::test]
    async fn update_and_delete_require_existing_course() {
        let repo = InMemoryCourseRepository::new();
        let c = course(UserId::new(), "CS101");

        assert_eq!(repo.update(&c).await.unwrap_err().code, ErrorCode::CourseNotFound);
        assert_eq!(repo.delete(&c.id).await.unwrap_err().code, ErrorCode::CourseNotFound);

        repo.save(&c).await.unwrap();
        repo.delete(&c.id).await.unwrap();
        assert!(repo.find_by_id(&c.id).await.unwrap().is_none());
    }
}
