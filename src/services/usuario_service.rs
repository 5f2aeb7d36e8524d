// src/services/usuario_service.rs

use bcrypt::hash;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::guards::{self, RefEntity, UniqueRule},
    db::UsuarioRepository,
    models::usuario::{UpdateUsuarioPayload, Usuario},
};

#[derive(Clone)]
pub struct UsuarioService {
    repo: UsuarioRepository,
    pool: PgPool,
}

// bcrypt é pesado; roda fora do runtime para não bloquear os workers.
async fn hash_senha(senha: String) -> Result<String, AppError> {
    let senha_hash = tokio::task::spawn_blocking(move || hash(&senha, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

    Ok(senha_hash)
}

impl UsuarioService {
    pub fn new(repo: UsuarioRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn create(
        &self,
        login: &str,
        senha: &str,
        nivel_acesso: Option<&str>,
        id_professor: Option<i32>,
    ) -> Result<i32, AppError> {
        // 1. Hashing antes da transação; não toca no banco.
        let senha_hash = hash_senha(senha.to_owned()).await?;

        let mut tx = self.pool.begin().await?;

        // 2. Professor vinculado (quando houver) precisa existir.
        if let Some(id_professor) = id_professor {
            guards::ensure_exists(&mut *tx, RefEntity::Professor, id_professor).await?;
        }

        // 3. Login é único na aplicação; o esquema não impõe.
        guards::ensure_unique(&mut *tx, UniqueRule::Login(login), None).await?;

        let nivel_acesso = nivel_acesso.unwrap_or("usuario");
        let id = self
            .repo
            .create(&mut *tx, login, &senha_hash, nivel_acesso, id_professor)
            .await?;

        tx.commit().await?;
        Ok(id)
    }

    pub async fn get(&self, id: i32) -> Result<Usuario, AppError> {
        self.repo
            .find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| RefEntity::Usuario.nao_encontrado())
    }

    pub async fn get_all(&self) -> Result<Vec<Usuario>, AppError> {
        self.repo.find_all().await
    }

    pub async fn update(&self, id: i32, payload: &UpdateUsuarioPayload) -> Result<(), AppError> {
        // A senha só é re-hasheada quando vem no payload; sem senha nova, o
        // hash gravado permanece.
        let senha_hash = match &payload.senha {
            Some(senha) => Some(hash_senha(senha.clone()).await?),
            None => None,
        };

        let mut tx = self.pool.begin().await?;

        let atual = self
            .repo
            .find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| RefEntity::Usuario.nao_encontrado())?;

        if let Some(id_professor) = payload.id_professor {
            guards::ensure_exists(&mut *tx, RefEntity::Professor, id_professor).await?;
        }

        // Merge parcial sobre a linha atual.
        let login = payload.login.as_deref().unwrap_or(&atual.login);
        let senha = senha_hash.as_deref().unwrap_or(&atual.senha);
        let nivel_acesso = payload.nivel_acesso.as_deref().unwrap_or(&atual.nivel_acesso);
        let id_professor = payload.id_professor.or(atual.id_professor);

        // O login resultante continua único, ignorando a própria linha.
        guards::ensure_unique(&mut *tx, UniqueRule::Login(login), Some(id)).await?;

        self.repo
            .update(&mut *tx, id, login, senha, nivel_acesso, id_professor)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        guards::ensure_exists(&mut *tx, RefEntity::Usuario, id).await?;
        self.repo.delete(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(())
    }
}
