// src/db/pagamento_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres, QueryBuilder};

use crate::common::error::AppError;
use crate::models::pagamento::{FiltrosPagamento, Pagamento};

const COLUNAS: &str =
    "id_pagamento, id_aluno, data_pagamento, valor_pago, forma_pagamento, referencia, status";

#[derive(Clone)]
pub struct PagamentoRepository {
    pool: PgPool,
}

impl PagamentoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create<'e, E>(
        &self,
        executor: E,
        id_aluno: i32,
        data_pagamento: NaiveDate,
        valor_pago: Decimal,
        forma_pagamento: Option<&str>,
        referencia: Option<&str>,
        status: &str,
    ) -> Result<i32, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO pagamento (id_aluno, data_pagamento, valor_pago, forma_pagamento, \
             referencia, status) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id_pagamento",
        )
        .bind(id_aluno)
        .bind(data_pagamento)
        .bind(valor_pago)
        .bind(forma_pagamento)
        .bind(referencia)
        .bind(status)
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<Pagamento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pagamento = sqlx::query_as::<_, Pagamento>(&format!(
            "SELECT {COLUNAS} FROM pagamento WHERE id_pagamento = $1"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(pagamento)
    }

    pub async fn find_all(&self, filtros: &FiltrosPagamento) -> Result<Vec<Pagamento>, AppError> {
        let mut consulta = montar_listagem(filtros);

        let pagamentos = consulta
            .build_query_as::<Pagamento>()
            .fetch_all(&self.pool)
            .await?;

        Ok(pagamentos)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i32,
        id_aluno: i32,
        data_pagamento: NaiveDate,
        valor_pago: Decimal,
        forma_pagamento: Option<&str>,
        referencia: Option<&str>,
        status: &str,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let resultado = sqlx::query(
            "UPDATE pagamento SET id_aluno = $1, data_pagamento = $2, valor_pago = $3, \
             forma_pagamento = $4, referencia = $5, status = $6 \
             WHERE id_pagamento = $7",
        )
        .bind(id_aluno)
        .bind(data_pagamento)
        .bind(valor_pago)
        .bind(forma_pagamento)
        .bind(referencia)
        .bind(status)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(resultado.rows_affected())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM pagamento WHERE id_pagamento = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}

// Filtros combinados com AND; filtro ausente fica fora do SQL.
fn montar_listagem<'a>(filtros: &'a FiltrosPagamento) -> QueryBuilder<'a, Postgres> {
    let mut consulta = QueryBuilder::new(format!("SELECT {COLUNAS} FROM pagamento WHERE 1=1"));

    if let Some(id_aluno) = filtros.id_aluno {
        consulta.push(" AND id_aluno = ").push_bind(id_aluno);
    }
    if let Some(status) = &filtros.status {
        consulta.push(" AND status = ").push_bind(status.as_str());
    }
    if let Some(data_inicio) = filtros.data_inicio {
        consulta.push(" AND data_pagamento >= ").push_bind(data_inicio);
    }
    if let Some(data_fim) = filtros.data_fim {
        consulta.push(" AND data_pagamento <= ").push_bind(data_fim);
    }

    consulta.push(" ORDER BY data_pagamento DESC");
    consulta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sem_filtros_lista_tudo_em_ordem_decrescente() {
        let filtros = FiltrosPagamento::default();
        let consulta = montar_listagem(&filtros);
        assert_eq!(
            consulta.sql(),
            format!("SELECT {COLUNAS} FROM pagamento WHERE 1=1 ORDER BY data_pagamento DESC")
        );
    }

    #[test]
    fn status_e_intervalo_entram_como_ands_encadeados() {
        let filtros = FiltrosPagamento {
            id_aluno: None,
            status: Some("Pendente".to_string()),
            data_inicio: NaiveDate::from_ymd_opt(2024, 1, 1),
            data_fim: NaiveDate::from_ymd_opt(2024, 1, 31),
        };

        let consulta = montar_listagem(&filtros);
        let sql = consulta.sql();
        assert!(sql.contains("AND status = $1"));
        assert!(sql.contains("AND data_pagamento >= $2"));
        assert!(sql.contains("AND data_pagamento <= $3"));
        assert!(sql.ends_with("ORDER BY data_pagamento DESC"));
    }

    #[test]
    fn filtro_por_aluno_usa_igualdade() {
        let filtros = FiltrosPagamento {
            id_aluno: Some(7),
            ..FiltrosPagamento::default()
        };

        let consulta = montar_listagem(&filtros);
        assert!(consulta.sql().contains("AND id_aluno = $1"));
    }
}
