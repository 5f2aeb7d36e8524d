// src/db/aluno_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::common::error::AppError;
use crate::models::aluno::{Aluno, CreateAlunoPayload, UpdateAlunoPayload};

const COLUNAS: &str = "id_aluno, nome_completo, data_nascimento, id_turma, nome_responsavel, \
                       telefone_responsavel, email_responsavel, informacoes_adicionais, \
                       endereco, cidade, estado, cep, pais, telefone";

// Repositório da tabela `aluno`: todo o SQL do recurso mora aqui.
#[derive(Clone)]
pub struct AlunoRepository {
    pool: PgPool,
}

impl AlunoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &CreateAlunoPayload,
    ) -> Result<i32, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO aluno (nome_completo, data_nascimento, id_turma, nome_responsavel, \
             telefone_responsavel, email_responsavel, informacoes_adicionais, endereco, cidade, \
             estado, cep, pais, telefone) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING id_aluno",
        )
        .bind(payload.nome_completo.as_deref())
        .bind(payload.data_nascimento)
        .bind(payload.id_turma)
        .bind(payload.nome_responsavel.as_deref())
        .bind(payload.telefone_responsavel.as_deref())
        .bind(payload.email_responsavel.as_deref())
        .bind(payload.informacoes_adicionais.as_deref())
        .bind(payload.endereco.as_deref())
        .bind(payload.cidade.as_deref())
        .bind(payload.estado.as_deref())
        .bind(payload.cep.as_deref())
        .bind(payload.pais.as_deref())
        .bind(payload.telefone.as_deref())
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: i32) -> Result<Option<Aluno>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let aluno = sqlx::query_as::<_, Aluno>(&format!(
            "SELECT {COLUNAS} FROM aluno WHERE id_aluno = $1"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(aluno)
    }

    pub async fn find_all(&self) -> Result<Vec<Aluno>, AppError> {
        let alunos = sqlx::query_as::<_, Aluno>(&format!(
            "SELECT {COLUNAS} FROM aluno ORDER BY nome_completo"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(alunos)
    }

    // Sobrescreve a linha inteira: campo ausente no payload vira NULL.
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i32,
        payload: &UpdateAlunoPayload,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let resultado = sqlx::query(
            "UPDATE aluno SET nome_completo = $1, data_nascimento = $2, id_turma = $3, \
             nome_responsavel = $4, telefone_responsavel = $5, email_responsavel = $6, \
             informacoes_adicionais = $7, endereco = $8, cidade = $9, estado = $10, cep = $11, \
             pais = $12, telefone = $13 \
             WHERE id_aluno = $14",
        )
        .bind(payload.nome_completo.as_deref())
        .bind(payload.data_nascimento)
        .bind(payload.id_turma)
        .bind(payload.nome_responsavel.as_deref())
        .bind(payload.telefone_responsavel.as_deref())
        .bind(payload.email_responsavel.as_deref())
        .bind(payload.informacoes_adicionais.as_deref())
        .bind(payload.endereco.as_deref())
        .bind(payload.cidade.as_deref())
        .bind(payload.estado.as_deref())
        .bind(payload.cep.as_deref())
        .bind(payload.pais.as_deref())
        .bind(payload.telefone.as_deref())
        .bind(id)
        .execute(executor)
        .await?;

        Ok(resultado.rows_affected())
    }

    // A exclusão em cascata é feita explicitamente pelo service, uma
    // dependência por vez, dentro da mesma transação.
    pub async fn delete_pagamentos_do_aluno<'e, E>(
        &self,
        executor: E,
        id_aluno: i32,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM pagamento WHERE id_aluno = $1")
            .bind(id_aluno)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn delete_presencas_do_aluno<'e, E>(
        &self,
        executor: E,
        id_aluno: i32,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM presenca WHERE id_aluno = $1")
            .bind(id_aluno)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn delete_vinculos_de_atividade<'e, E>(
        &self,
        executor: E,
        id_aluno: i32,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM atividade_aluno WHERE id_aluno = $1")
            .bind(id_aluno)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM aluno WHERE id_aluno = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
