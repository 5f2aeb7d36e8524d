// src/db/turma_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::common::error::AppError;
use crate::models::turma::{CreateTurmaPayload, Turma, UpdateTurmaPayload};

// As leituras resolvem o nome do professor por LEFT JOIN; turma sem
// professor sai com nome_professor nulo.
const SELECT_COM_PROFESSOR: &str =
    "SELECT t.id_turma, t.nome_turma, t.id_professor, p.nome_completo AS nome_professor, \
     t.horario \
     FROM turma t \
     LEFT JOIN professor p ON p.id_professor = t.id_professor";

#[derive(Clone)]
pub struct TurmaRepository {
    pool: PgPool,
}

impl TurmaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &CreateTurmaPayload,
    ) -> Result<i32, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO turma (nome_turma, id_professor, horario) \
             VALUES ($1, $2, $3) RETURNING id_turma",
        )
        .bind(payload.nome_turma.as_deref())
        .bind(payload.id_professor)
        .bind(payload.horario.as_deref())
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: i32) -> Result<Option<Turma>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let turma = sqlx::query_as::<_, Turma>(&format!(
            "{SELECT_COM_PROFESSOR} WHERE t.id_turma = $1"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(turma)
    }

    pub async fn find_all(&self) -> Result<Vec<Turma>, AppError> {
        let turmas = sqlx::query_as::<_, Turma>(&format!(
            "{SELECT_COM_PROFESSOR} ORDER BY t.nome_turma"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(turmas)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i32,
        payload: &UpdateTurmaPayload,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let resultado = sqlx::query(
            "UPDATE turma SET nome_turma = $1, id_professor = $2, horario = $3 \
             WHERE id_turma = $4",
        )
        .bind(payload.nome_turma.as_deref())
        .bind(payload.id_professor)
        .bind(payload.horario.as_deref())
        .bind(id)
        .execute(executor)
        .await?;

        Ok(resultado.rows_affected())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM turma WHERE id_turma = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
