// src/db/atividade_aluno_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::common::error::AppError;
use crate::models::atividade_aluno::AtividadeAluno;

// Tabela de vínculo: não há id gerado, a chave é o par (atividade, aluno).
#[derive(Clone)]
pub struct AtividadeAlunoRepository {
    pool: PgPool,
}

impl AtividadeAlunoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        id_atividade: i32,
        id_aluno: i32,
        desempenho: Option<&str>,
        observacoes: Option<&str>,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            "INSERT INTO atividade_aluno (id_atividade, id_aluno, desempenho, observacoes) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(id_atividade)
        .bind(id_aluno)
        .bind(desempenho)
        .bind(observacoes)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_par<'e, E>(
        &self,
        executor: E,
        id_atividade: i32,
        id_aluno: i32,
    ) -> Result<Option<AtividadeAluno>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let vinculo = sqlx::query_as::<_, AtividadeAluno>(
            "SELECT id_atividade, id_aluno, desempenho, observacoes \
             FROM atividade_aluno WHERE id_atividade = $1 AND id_aluno = $2",
        )
        .bind(id_atividade)
        .bind(id_aluno)
        .fetch_optional(executor)
        .await?;

        Ok(vinculo)
    }

    pub async fn find_all(&self) -> Result<Vec<AtividadeAluno>, AppError> {
        let vinculos = sqlx::query_as::<_, AtividadeAluno>(
            "SELECT id_atividade, id_aluno, desempenho, observacoes \
             FROM atividade_aluno ORDER BY id_atividade, id_aluno",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vinculos)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id_atividade: i32,
        id_aluno: i32,
        desempenho: Option<&str>,
        observacoes: Option<&str>,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let resultado = sqlx::query(
            "UPDATE atividade_aluno SET desempenho = $1, observacoes = $2 \
             WHERE id_atividade = $3 AND id_aluno = $4",
        )
        .bind(desempenho)
        .bind(observacoes)
        .bind(id_atividade)
        .bind(id_aluno)
        .execute(executor)
        .await?;

        Ok(resultado.rows_affected())
    }

    pub async fn delete<'e, E>(
        &self,
        executor: E,
        id_atividade: i32,
        id_aluno: i32,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM atividade_aluno WHERE id_atividade = $1 AND id_aluno = $2")
            .bind(id_atividade)
            .bind(id_aluno)
            .execute(executor)
            .await?;
        Ok(())
    }
}
