// src/db/atividade_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::common::error::AppError;
use crate::models::atividade::{Atividade, CreateAtividadePayload, UpdateAtividadePayload};

#[derive(Clone)]
pub struct AtividadeRepository {
    pool: PgPool,
}

impl AtividadeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &CreateAtividadePayload,
    ) -> Result<i32, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO atividade (descricao, data_realizacao) \
             VALUES ($1, $2) RETURNING id_atividade",
        )
        .bind(payload.descricao.as_deref())
        .bind(payload.data_realizacao)
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<Atividade>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let atividade = sqlx::query_as::<_, Atividade>(
            "SELECT id_atividade, descricao, data_realizacao \
             FROM atividade WHERE id_atividade = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(atividade)
    }

    pub async fn find_all(&self) -> Result<Vec<Atividade>, AppError> {
        let atividades = sqlx::query_as::<_, Atividade>(
            "SELECT id_atividade, descricao, data_realizacao \
             FROM atividade ORDER BY data_realizacao",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(atividades)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i32,
        payload: &UpdateAtividadePayload,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let resultado = sqlx::query(
            "UPDATE atividade SET descricao = $1, data_realizacao = $2 WHERE id_atividade = $3",
        )
        .bind(payload.descricao.as_deref())
        .bind(payload.data_realizacao)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(resultado.rows_affected())
    }

    // Os vínculos com alunos caem junto, na mesma transação.
    pub async fn delete_vinculos<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM atividade_aluno WHERE id_atividade = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM atividade WHERE id_atividade = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
