//! PostgreSQL implementation of CourseRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::course::{Assessment, Course, CourseItem};
use crate::domain::foundation::{CourseId, DomainError, ErrorCode, UserId};
use crate::ports::CourseRepository;

use super::row::{column, percentage, timestamp};

const SELECT_COURSE: &str = r#"
    SELECT id, user_id, title, code, semester, lessons, modules, labs,
           assessments, progress_percent, created_at
    FROM courses
"#;

#[derive(Clone)]
pub struct PostgresCourseRepository {
    pool: PgPool,
}

impl PostgresCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn save(&self, course: &Course) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO courses (
                id, user_id, title, code, semester, lessons, modules, labs,
                assessments, progress_percent, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(course.id.as_uuid())
        .bind(course.user_id.as_uuid())
        .bind(&course.title)
        .bind(&course.code)
        .bind(&course.semester)
        .bind(Json(&course.lessons))
        .bind(Json(&course.modules))
        .bind(Json(&course.labs))
        .bind(Json(&course.assessments))
        .bind(i16::from(course.progress_percent.value()))
        .bind(course.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert course", e))?;

        Ok(())
    }

    async fn update(&self, course: &Course) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE courses SET
                title = $2,
                code = $3,
                semester = $4,
                lessons = $5,
                modules = $6,
                labs = $7,
                assessments = $8,
                progress_percent = $9
            WHERE id = $1
            "#,
        )
        .bind(course.id.as_uuid())
        .bind(&course.title)
        .bind(&course.code)
        .bind(&course.semester)
        .bind(Json(&course.lessons))
        .bind(Json(&course.modules))
        .bind(Json(&course.labs))
        .bind(Json(&course.assessments))
        .bind(i16::from(course.progress_percent.value()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update course", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::CourseNotFound, "Course not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COURSE))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch course", e))?;

        row.map(|row| row_to_course(&row)).transpose()
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Course>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE user_id = $1 ORDER BY created_at ASC, id ASC",
            SELECT_COURSE
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch courses by user", e))?;

        rows.iter().map(row_to_course).collect()
    }

    async fn delete(&self, id: &CourseId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete course", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::CourseNotFound, "Course not found"));
        }

        Ok(())
    }
}

fn row_to_course(row: &PgRow) -> Result<Course, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let user_id: uuid::Uuid = column(row, "user_id")?;
    let lessons: Json<Vec<CourseItem>> = column(row, "lessons")?;
    let modules: Json<Vec<CourseItem>> = column(row, "modules")?;
    let labs: Json<Vec<CourseItem>> = column(row, "labs")?;
    let assessments: Json<Vec<Assessment>> = column(row, "assessments")?;

    Ok(Course {
        id: CourseId::from_uuid(id),
        user_id: UserId::from_uuid(user_id),
        title: column(row, "title")?,
        code: column(row, "code")?,
        semester: column(row, "semester")?,
        lessons: lessons.0,
        modules: modules.0,
        labs: labs.0,
        assessments: assessments.0,
        progress_percent: percentage(row, "progress_percent")?,
        created_at: timestamp(row, "created_at")?,
    })
}
