// src/services/professor_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::guards::{self, RefEntity},
    db::ProfessorRepository,
    models::professor::{CreateProfessorPayload, Professor, UpdateProfessorPayload},
};

#[derive(Clone)]
pub struct ProfessorService {
    repo: ProfessorRepository,
    pool: PgPool,
}

impl ProfessorService {
    pub fn new(repo: ProfessorRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn create(&self, payload: &CreateProfessorPayload) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;
        let id = self.repo.create(&mut *tx, payload).await?;
        tx.commit().await?;
        Ok(id)
    }

    pub async fn get(&self, id: i32) -> Result<Professor, AppError> {
        self.repo
            .find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| RefEntity::Professor.nao_encontrado())
    }

    pub async fn get_all(&self) -> Result<Vec<Professor>, AppError> {
        self.repo.find_all().await
    }

    pub async fn update(&self, id: i32, payload: &UpdateProfessorPayload) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        guards::ensure_exists(&mut *tx, RefEntity::Professor, id).await?;
        self.repo.update(&mut *tx, id, payload).await?;

        tx.commit().await?;
        Ok(())
    }

    // Sem guarda de dependentes: turmas e usuários que apontam para o
    // professor deixam a constraint do banco responder.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        guards::ensure_exists(&mut *tx, RefEntity::Professor, id).await?;
        self.repo.delete(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(())
    }
}
