//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::cognitive::CognitiveProfile;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{DashboardCache, User};
use crate::ports::UserRepository;

use super::row::{column, timestamp};

const SELECT_USER: &str = r#"
    SELECT id, name, email, password_hash, department, year, college, phone,
           enrollment_number, dob, learning_styles, subjects,
           cognitive_profile, dashboard_cache, created_at
    FROM users
"#;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id, name, email, password_hash, department, year, college, phone,
                enrollment_number, dob, learning_styles, subjects,
                cognitive_profile, dashboard_cache, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.department)
        .bind(&user.year)
        .bind(&user.college)
        .bind(&user.phone)
        .bind(&user.enrollment_number)
        .bind(&user.dob)
        .bind(Json(&user.learning_styles))
        .bind(Json(&user.subjects))
        .bind(user.cognitive_profile.as_ref().map(Json))
        .bind(user.dashboard_cache.as_ref().map(Json))
        .bind(user.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let unique = e
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation());
            if unique {
                DomainError::new(ErrorCode::EmailAlreadyExists, "Email already exists")
            } else {
                DomainError::database("Failed to insert user", e)
            }
        })?;

        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                name = $2,
                department = $3,
                year = $4,
                college = $5,
                phone = $6,
                enrollment_number = $7,
                dob = $8,
                learning_styles = $9,
                subjects = $10,
                cognitive_profile = $11,
                dashboard_cache = $12
            WHERE id = $1
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.name)
        .bind(&user.department)
        .bind(&user.year)
        .bind(&user.college)
        .bind(&user.phone)
        .bind(&user.enrollment_number)
        .bind(&user.dob)
        .bind(Json(&user.learning_styles))
        .bind(Json(&user.subjects))
        .bind(user.cognitive_profile.as_ref().map(Json))
        .bind(user.dashboard_cache.as_ref().map(Json))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", user.id),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_USER))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch user", e))?;

        row.map(|row| row_to_user(&row)).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE email = $1", SELECT_USER))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch user by email", e))?;

        row.map(|row| row_to_user(&row)).transpose()
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let learning_styles: Json<Vec<String>> = column(row, "learning_styles")?;
    let subjects: Json<Vec<String>> = column(row, "subjects")?;
    let cognitive_profile: Option<Json<CognitiveProfile>> = column(row, "cognitive_profile")?;
    let dashboard_cache: Option<Json<DashboardCache>> = column(row, "dashboard_cache")?;

    Ok(User {
        id: UserId::from_uuid(id),
        name: column(row, "name")?,
        email: column(row, "email")?,
        password_hash: column(row, "password_hash")?,
        department: column(row, "department")?,
        year: column(row, "year")?,
        college: column(row, "college")?,
        phone: column(row, "phone")?,
        enrollment_number: column(row, "enrollment_number")?,
        dob: column(row, "dob")?,
        learning_styles: learning_styles.0,
        subjects: subjects.0,
        cognitive_profile: cognitive_profile.map(|j| j.0),
        dashboard_cache: dashboard_cache.map(|j| j.0),
        created_at: timestamp(row, "created_at")?,
    })
}
