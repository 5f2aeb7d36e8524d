// src/services/pagamento_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::guards::{self, RefEntity},
    db::PagamentoRepository,
    models::pagamento::{FiltrosPagamento, Pagamento, UpdatePagamentoPayload},
};

#[derive(Clone)]
pub struct PagamentoService {
    repo: PagamentoRepository,
    pool: PgPool,
}

impl PagamentoService {
    pub fn new(repo: PagamentoRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn create(
        &self,
        id_aluno: i32,
        data_pagamento: NaiveDate,
        valor_pago: Decimal,
        forma_pagamento: Option<&str>,
        referencia: Option<&str>,
        status: Option<&str>,
    ) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;

        guards::ensure_exists(&mut *tx, RefEntity::Aluno, id_aluno).await?;

        // Default com P maiúsculo; a guarda de exclusão compara 'pendente'
        // minúsculo, então um pagamento recém-criado não fica travado.
        let status = status.unwrap_or("Pendente");

        let id = self
            .repo
            .create(
                &mut *tx,
                id_aluno,
                data_pagamento,
                valor_pago,
                forma_pagamento,
                referencia,
                status,
            )
            .await?;

        tx.commit().await?;
        Ok(id)
    }

    pub async fn get(&self, id: i32) -> Result<Pagamento, AppError> {
        self.repo
            .find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| RefEntity::Pagamento.nao_encontrado())
    }

    pub async fn get_all(&self, filtros: &FiltrosPagamento) -> Result<Vec<Pagamento>, AppError> {
        self.repo.find_all(filtros).await
    }

    pub async fn update(&self, id: i32, payload: &UpdatePagamentoPayload) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let atual = self
            .repo
            .find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| RefEntity::Pagamento.nao_encontrado())?;

        if let Some(id_aluno) = payload.id_aluno {
            guards::ensure_exists(&mut *tx, RefEntity::Aluno, id_aluno).await?;
        }

        // Merge parcial sobre a linha atual.
        let id_aluno = payload.id_aluno.unwrap_or(atual.id_aluno);
        let data_pagamento = payload.data_pagamento.unwrap_or(atual.data_pagamento);
        let valor_pago = payload.valor_pago.unwrap_or(atual.valor_pago);
        let forma_pagamento = payload
            .forma_pagamento
            .as_deref()
            .or(atual.forma_pagamento.as_deref());
        let referencia = payload.referencia.as_deref().or(atual.referencia.as_deref());
        let status = payload.status.as_deref().unwrap_or(&atual.status);

        self.repo
            .update(
                &mut *tx,
                id,
                id_aluno,
                data_pagamento,
                valor_pago,
                forma_pagamento,
                referencia,
                status,
            )
            .await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let pagamento = self
            .repo
            .find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| RefEntity::Pagamento.nao_encontrado())?;

        // Comparação herdada, caso-sensível: só 'pendente' minúsculo trava.
        if pagamento.status == "pendente" {
            return Err(AppError::PagamentoPendente);
        }

        self.repo.delete(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(())
    }
}
