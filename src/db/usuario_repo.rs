// src/db/usuario_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::common::error::AppError;
use crate::models::usuario::Usuario;

const COLUNAS: &str = "id_usuario, login, senha, nivel_acesso, id_professor";

#[derive(Clone)]
pub struct UsuarioRepository {
    pool: PgPool,
}

impl UsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        login: &str,
        senha_hash: &str,
        nivel_acesso: &str,
        id_professor: Option<i32>,
    ) -> Result<i32, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO usuario (login, senha, nivel_acesso, id_professor) \
             VALUES ($1, $2, $3, $4) RETURNING id_usuario",
        )
        .bind(login)
        .bind(senha_hash)
        .bind(nivel_acesso)
        .bind(id_professor)
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<Usuario>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let usuario = sqlx::query_as::<_, Usuario>(&format!(
            "SELECT {COLUNAS} FROM usuario WHERE id_usuario = $1"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(usuario)
    }

    pub async fn find_all(&self) -> Result<Vec<Usuario>, AppError> {
        let usuarios = sqlx::query_as::<_, Usuario>(&format!(
            "SELECT {COLUNAS} FROM usuario ORDER BY login"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(usuarios)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i32,
        login: &str,
        senha_hash: &str,
        nivel_acesso: &str,
        id_professor: Option<i32>,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let resultado = sqlx::query(
            "UPDATE usuario SET login = $1, senha = $2, nivel_acesso = $3, id_professor = $4 \
             WHERE id_usuario = $5",
        )
        .bind(login)
        .bind(senha_hash)
        .bind(nivel_acesso)
        .bind(id_professor)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(resultado.rows_affected())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM usuario WHERE id_usuario = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
