// src/config.rs

use crate::db::{
    AlunoRepository, AtividadeAlunoRepository, AtividadeRepository, PagamentoRepository,
    PresencaRepository, ProfessorRepository, TurmaRepository, UsuarioRepository,
};
use crate::services::{
    AlunoService, AtividadeAlunoService, AtividadeService, PagamentoService, PresencaService,
    ProfessorService, TurmaService, UsuarioService,
};
use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

// Parâmetros de conexão lidos do ambiente. A fábrica de pool recebe esta
// struct; nenhum outro módulo lê variáveis de ambiente do banco.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DbConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(valor) => valor
                .parse()
                .context("DB_MAX_CONNECTIONS deve ser um número inteiro")?,
            Err(_) => 5,
        };

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout: Duration::from_secs(3),
        })
    }

    // Fábrica de conexões: cada requisição adquire a sua deste pool.
    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect(&self.database_url)
            .await
    }
}

// Endereço de escuta do servidor HTTP.
pub fn bind_addr() -> String {
    env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}

// O estado compartilhado que será acessível em toda a aplicação.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub aluno_service: AlunoService,
    pub professor_service: ProfessorService,
    pub turma_service: TurmaService,
    pub atividade_service: AtividadeService,
    pub atividade_aluno_service: AtividadeAlunoService,
    pub presenca_service: PresencaService,
    pub pagamento_service: PagamentoService,
    pub usuario_service: UsuarioService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = DbConfig::from_env()?;
        let db_pool = config.connect().await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let aluno_service =
            AlunoService::new(AlunoRepository::new(db_pool.clone()), db_pool.clone());
        let professor_service =
            ProfessorService::new(ProfessorRepository::new(db_pool.clone()), db_pool.clone());
        let turma_service =
            TurmaService::new(TurmaRepository::new(db_pool.clone()), db_pool.clone());
        let atividade_service =
            AtividadeService::new(AtividadeRepository::new(db_pool.clone()), db_pool.clone());
        let atividade_aluno_service = AtividadeAlunoService::new(
            AtividadeAlunoRepository::new(db_pool.clone()),
            db_pool.clone(),
        );
        let presenca_service =
            PresencaService::new(PresencaRepository::new(db_pool.clone()), db_pool.clone());
        let pagamento_service =
            PagamentoService::new(PagamentoRepository::new(db_pool.clone()), db_pool.clone());
        let usuario_service =
            UsuarioService::new(UsuarioRepository::new(db_pool.clone()), db_pool.clone());

        Ok(Self {
            db_pool,
            aluno_service,
            professor_service,
            turma_service,
            atividade_service,
            atividade_aluno_service,
            presenca_service,
            pagamento_service,
            usuario_service,
        })
    }
}
