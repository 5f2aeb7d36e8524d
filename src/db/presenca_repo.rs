// src/db/presenca_repo.rs

use chrono::NaiveDate;
use sqlx::{Executor, PgPool, Postgres, QueryBuilder};

use crate::common::error::AppError;
use crate::models::presenca::{FiltrosPresenca, Presenca};

#[derive(Clone)]
pub struct PresencaRepository {
    pool: PgPool,
}

impl PresencaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        id_aluno: i32,
        data_presenca: NaiveDate,
        presente: bool,
    ) -> Result<i32, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO presenca (id_aluno, data_presenca, presente) \
             VALUES ($1, $2, $3) RETURNING id_presenca",
        )
        .bind(id_aluno)
        .bind(data_presenca)
        .bind(presente)
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<Presenca>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let presenca = sqlx::query_as::<_, Presenca>(
            "SELECT id_presenca, id_aluno, data_presenca, presente \
             FROM presenca WHERE id_presenca = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(presenca)
    }

    pub async fn find_all(&self, filtros: &FiltrosPresenca) -> Result<Vec<Presenca>, AppError> {
        let mut consulta = montar_listagem(filtros);

        let presencas = consulta
            .build_query_as::<Presenca>()
            .fetch_all(&self.pool)
            .await?;

        Ok(presencas)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i32,
        id_aluno: i32,
        data_presenca: NaiveDate,
        presente: bool,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let resultado = sqlx::query(
            "UPDATE presenca SET id_aluno = $1, data_presenca = $2, presente = $3 \
             WHERE id_presenca = $4",
        )
        .bind(id_aluno)
        .bind(data_presenca)
        .bind(presente)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(resultado.rows_affected())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM presenca WHERE id_presenca = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}

// Filtros combinados com AND; filtro ausente fica fora do SQL.
fn montar_listagem<'a>(filtros: &'a FiltrosPresenca) -> QueryBuilder<'a, Postgres> {
    let mut consulta = QueryBuilder::new(
        "SELECT id_presenca, id_aluno, data_presenca, presente FROM presenca WHERE 1=1",
    );

    if let Some(id_aluno) = filtros.id_aluno {
        consulta.push(" AND id_aluno = ").push_bind(id_aluno);
    }
    if let Some(data_inicio) = filtros.data_inicio {
        consulta.push(" AND data_presenca >= ").push_bind(data_inicio);
    }
    if let Some(data_fim) = filtros.data_fim {
        consulta.push(" AND data_presenca <= ").push_bind(data_fim);
    }
    if let Some(presente) = filtros.presente {
        consulta.push(" AND presente = ").push_bind(presente);
    }

    consulta.push(" ORDER BY data_presenca DESC");
    consulta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sem_filtros_lista_tudo_em_ordem_decrescente() {
        let filtros = FiltrosPresenca::default();
        let consulta = montar_listagem(&filtros);
        assert_eq!(
            consulta.sql(),
            "SELECT id_presenca, id_aluno, data_presenca, presente FROM presenca WHERE 1=1 \
             ORDER BY data_presenca DESC"
        );
    }

    #[test]
    fn cada_filtro_entra_como_um_and() {
        let filtros = FiltrosPresenca {
            id_aluno: Some(7),
            data_inicio: NaiveDate::from_ymd_opt(2024, 1, 1),
            data_fim: NaiveDate::from_ymd_opt(2024, 1, 31),
            presente: Some(true),
        };

        let consulta = montar_listagem(&filtros);
        let sql = consulta.sql();
        assert!(sql.contains("AND id_aluno = $1"));
        assert!(sql.contains("AND data_presenca >= $2"));
        assert!(sql.contains("AND data_presenca <= $3"));
        assert!(sql.contains("AND presente = $4"));
        assert!(sql.ends_with("ORDER BY data_presenca DESC"));
    }

    #[test]
    fn filtro_ausente_fica_fora_do_sql() {
        let filtros = FiltrosPresenca {
            presente: Some(false),
            ..FiltrosPresenca::default()
        };

        let consulta = montar_listagem(&filtros);
        let sql = consulta.sql();
        assert!(!sql.contains("id_aluno ="));
        assert!(!sql.contains("data_presenca >="));
        assert!(sql.contains("AND presente = $1"));
    }
}
