// src/services/turma_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::guards::{self, DependentRule, RefEntity},
    db::TurmaRepository,
    models::turma::{CreateTurmaPayload, Turma, UpdateTurmaPayload},
};

#[derive(Clone)]
pub struct TurmaService {
    repo: TurmaRepository,
    pool: PgPool,
}

impl TurmaService {
    pub fn new(repo: TurmaRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn create(&self, payload: &CreateTurmaPayload) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;

        if let Some(id_professor) = payload.id_professor {
            guards::ensure_exists(&mut *tx, RefEntity::Professor, id_professor).await?;
        }

        let id = self.repo.create(&mut *tx, payload).await?;

        tx.commit().await?;
        Ok(id)
    }

    pub async fn get(&self, id: i32) -> Result<Turma, AppError> {
        self.repo
            .find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| RefEntity::Turma.nao_encontrado())
    }

    pub async fn get_all(&self) -> Result<Vec<Turma>, AppError> {
        self.repo.find_all().await
    }

    pub async fn update(&self, id: i32, payload: &UpdateTurmaPayload) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        guards::ensure_exists(&mut *tx, RefEntity::Turma, id).await?;
        if let Some(id_professor) = payload.id_professor {
            guards::ensure_exists(&mut *tx, RefEntity::Professor, id_professor).await?;
        }

        self.repo.update(&mut *tx, id, payload).await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        guards::ensure_exists(&mut *tx, RefEntity::Turma, id).await?;

        // Turma com aluno matriculado não pode ser excluída.
        guards::ensure_no_dependents(&mut *tx, DependentRule::AlunosDaTurma, id).await?;

        self.repo.delete(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(())
    }
}
