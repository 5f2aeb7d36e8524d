// src/services/presenca_service.rs

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::guards::{self, RefEntity, UniqueRule},
    db::PresencaRepository,
    models::presenca::{FiltrosPresenca, Presenca, UpdatePresencaPayload},
};

#[derive(Clone)]
pub struct PresencaService {
    repo: PresencaRepository,
    pool: PgPool,
}

impl PresencaService {
    pub fn new(repo: PresencaRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn create(
        &self,
        id_aluno: i32,
        data_presenca: NaiveDate,
        presente: bool,
    ) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;

        guards::ensure_exists(&mut *tx, RefEntity::Aluno, id_aluno).await?;

        // Uma presença por aluno por dia; a verificação é da aplicação, o
        // esquema não tem índice para isso.
        guards::ensure_unique(
            &mut *tx,
            UniqueRule::PresencaDiaria {
                id_aluno,
                data: data_presenca,
            },
            None,
        )
        .await?;

        let id = self
            .repo
            .create(&mut *tx, id_aluno, data_presenca, presente)
            .await?;

        tx.commit().await?;
        Ok(id)
    }

    pub async fn get(&self, id: i32) -> Result<Presenca, AppError> {
        self.repo
            .find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| RefEntity::Presenca.nao_encontrado())
    }

    pub async fn get_all(&self, filtros: &FiltrosPresenca) -> Result<Vec<Presenca>, AppError> {
        self.repo.find_all(filtros).await
    }

    pub async fn update(&self, id: i32, payload: &UpdatePresencaPayload) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let atual = self
            .repo
            .find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| RefEntity::Presenca.nao_encontrado())?;

        if let Some(id_aluno) = payload.id_aluno {
            guards::ensure_exists(&mut *tx, RefEntity::Aluno, id_aluno).await?;
        }

        // Merge parcial sobre a linha atual.
        let id_aluno = payload.id_aluno.unwrap_or(atual.id_aluno);
        let data_presenca = payload.data_presenca.unwrap_or(atual.data_presenca);
        let presente = payload.presente.unwrap_or(atual.presente);

        // O par (aluno, data) resultante continua tendo que ser único,
        // ignorando a própria linha.
        guards::ensure_unique(
            &mut *tx,
            UniqueRule::PresencaDiaria {
                id_aluno,
                data: data_presenca,
            },
            Some(id),
        )
        .await?;

        self.repo
            .update(&mut *tx, id, id_aluno, data_presenca, presente)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        guards::ensure_exists(&mut *tx, RefEntity::Presenca, id).await?;
        self.repo.delete(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(())
    }
}
