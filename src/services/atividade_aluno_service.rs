// src/services/atividade_aluno_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::guards::{self, RefEntity},
    db::AtividadeAlunoRepository,
    models::atividade_aluno::{AtividadeAluno, UpdateAtividadeAlunoPayload},
};

// O recurso é identificado pelo par (id_atividade, id_aluno); não há id
// próprio para devolver ao cliente.
const VINCULO_NAO_ENCONTRADO: &str = "Atividade-Aluno não encontrada";

#[derive(Clone)]
pub struct AtividadeAlunoService {
    repo: AtividadeAlunoRepository,
    pool: PgPool,
}

impl AtividadeAlunoService {
    pub fn new(repo: AtividadeAlunoRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn create(
        &self,
        id_atividade: i32,
        id_aluno: i32,
        desempenho: Option<&str>,
        observacoes: Option<&str>,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        // As duas pontas do vínculo precisam existir.
        guards::ensure_exists(&mut *tx, RefEntity::Atividade, id_atividade).await?;
        guards::ensure_exists(&mut *tx, RefEntity::Aluno, id_aluno).await?;

        self.repo
            .create(&mut *tx, id_atividade, id_aluno, desempenho, observacoes)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn get(&self, id_atividade: i32, id_aluno: i32) -> Result<AtividadeAluno, AppError> {
        self.repo
            .find_by_par(&self.pool, id_atividade, id_aluno)
            .await?
            .ok_or(AppError::NaoEncontrado(VINCULO_NAO_ENCONTRADO))
    }

    pub async fn get_all(&self) -> Result<Vec<AtividadeAluno>, AppError> {
        self.repo.find_all().await
    }

    pub async fn update(
        &self,
        id_atividade: i32,
        id_aluno: i32,
        payload: &UpdateAtividadeAlunoPayload,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let atual = self
            .repo
            .find_by_par(&mut *tx, id_atividade, id_aluno)
            .await?
            .ok_or(AppError::NaoEncontrado(VINCULO_NAO_ENCONTRADO))?;

        // Merge parcial: campo não enviado mantém o que está gravado.
        let desempenho = payload.desempenho.as_deref().or(atual.desempenho.as_deref());
        let observacoes = payload
            .observacoes
            .as_deref()
            .or(atual.observacoes.as_deref());

        self.repo
            .update(&mut *tx, id_atividade, id_aluno, desempenho, observacoes)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn delete(&self, id_atividade: i32, id_aluno: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        self.repo
            .find_by_par(&mut *tx, id_atividade, id_aluno)
            .await?
            .ok_or(AppError::NaoEncontrado(VINCULO_NAO_ENCONTRADO))?;

        self.repo.delete(&mut *tx, id_atividade, id_aluno).await?;

        tx.commit().await?;
        Ok(())
    }
}
