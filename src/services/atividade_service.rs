// src/services/atividade_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::guards::{self, RefEntity},
    db::AtividadeRepository,
    models::atividade::{Atividade, CreateAtividadePayload, UpdateAtividadePayload},
};

#[derive(Clone)]
pub struct AtividadeService {
    repo: AtividadeRepository,
    pool: PgPool,
}

impl AtividadeService {
    pub fn new(repo: AtividadeRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn create(&self, payload: &CreateAtividadePayload) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;
        let id = self.repo.create(&mut *tx, payload).await?;
        tx.commit().await?;
        Ok(id)
    }

    pub async fn get(&self, id: i32) -> Result<Atividade, AppError> {
        self.repo
            .find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| RefEntity::Atividade.nao_encontrado())
    }

    pub async fn get_all(&self) -> Result<Vec<Atividade>, AppError> {
        self.repo.find_all().await
    }

    pub async fn update(&self, id: i32, payload: &UpdateAtividadePayload) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        guards::ensure_exists(&mut *tx, RefEntity::Atividade, id).await?;
        self.repo.update(&mut *tx, id, payload).await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        guards::ensure_exists(&mut *tx, RefEntity::Atividade, id).await?;

        // Os vínculos com alunos caem junto com a atividade.
        self.repo.delete_vinculos(&mut *tx, id).await?;
        self.repo.delete(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(())
    }
}
