// src/services/aluno_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::guards::{self, DependentRule, RefEntity},
    db::AlunoRepository,
    models::aluno::{Aluno, CreateAlunoPayload, UpdateAlunoPayload},
};

#[derive(Clone)]
pub struct AlunoService {
    repo: AlunoRepository,
    pool: PgPool,
}

impl AlunoService {
    pub fn new(repo: AlunoRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn create(&self, payload: &CreateAlunoPayload) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;

        // A turma é opcional, mas quando vem precisa existir.
        if let Some(id_turma) = payload.id_turma {
            guards::ensure_exists(&mut *tx, RefEntity::Turma, id_turma).await?;
        }

        let id = self.repo.create(&mut *tx, payload).await?;

        tx.commit().await?;
        Ok(id)
    }

    pub async fn get(&self, id: i32) -> Result<Aluno, AppError> {
        self.repo
            .find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| RefEntity::Aluno.nao_encontrado())
    }

    pub async fn get_all(&self) -> Result<Vec<Aluno>, AppError> {
        self.repo.find_all().await
    }

    pub async fn update(&self, id: i32, payload: &UpdateAlunoPayload) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        guards::ensure_exists(&mut *tx, RefEntity::Aluno, id).await?;
        if let Some(id_turma) = payload.id_turma {
            guards::ensure_exists(&mut *tx, RefEntity::Turma, id_turma).await?;
        }

        self.repo.update(&mut *tx, id, payload).await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        guards::ensure_exists(&mut *tx, RefEntity::Aluno, id).await?;

        // Pagamento com status exatamente 'pendente' trava a exclusão.
        guards::ensure_no_dependents(&mut *tx, DependentRule::PagamentosPendentesDoAluno, id)
            .await?;

        // Cascata explícita: os registros do aluno caem junto, na mesma transação.
        self.repo.delete_pagamentos_do_aluno(&mut *tx, id).await?;
        self.repo.delete_presencas_do_aluno(&mut *tx, id).await?;
        self.repo.delete_vinculos_de_atividade(&mut *tx, id).await?;
        self.repo.delete(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(())
    }
}
