// src/db/professor_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::common::error::AppError;
use crate::models::professor::{CreateProfessorPayload, Professor, UpdateProfessorPayload};

#[derive(Clone)]
pub struct ProfessorRepository {
    pool: PgPool,
}

impl ProfessorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &CreateProfessorPayload,
    ) -> Result<i32, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO professor (nome_completo, email, telefone) \
             VALUES ($1, $2, $3) RETURNING id_professor",
        )
        .bind(payload.nome_completo.as_deref())
        .bind(payload.email.as_deref())
        .bind(payload.telefone.as_deref())
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<Professor>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let professor = sqlx::query_as::<_, Professor>(
            "SELECT id_professor, nome_completo, email, telefone \
             FROM professor WHERE id_professor = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(professor)
    }

    pub async fn find_all(&self) -> Result<Vec<Professor>, AppError> {
        let professores = sqlx::query_as::<_, Professor>(
            "SELECT id_professor, nome_completo, email, telefone \
             FROM professor ORDER BY nome_completo",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(professores)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i32,
        payload: &UpdateProfessorPayload,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let resultado = sqlx::query(
            "UPDATE professor SET nome_completo = $1, email = $2, telefone = $3 \
             WHERE id_professor = $4",
        )
        .bind(payload.nome_completo.as_deref())
        .bind(payload.email.as_deref())
        .bind(payload.telefone.as_deref())
        .bind(id)
        .execute(executor)
        .await?;

        Ok(resultado.rows_affected())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM professor WHERE id_professor = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
