// src/common/error.rs

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Cada variante conhece o status HTTP que produz (ver `into_response`).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    Validacao(#[from] validator::ValidationErrors),

    // A mensagem completa ("Aluno não encontrado", "Turma não encontrada", ...)
    // vem de quem detectou a ausência; o gênero varia por entidade.
    #[error("{0}")]
    NaoEncontrado(&'static str),

    #[error("Não é possível excluir a turma pois possui alunos associados")]
    TurmaComAlunos,

    #[error("Não é possível excluir este aluno pois existem pagamentos pendentes associados a ele.")]
    AlunoComPagamentosPendentes,

    #[error("Não é possível excluir um pagamento pendente")]
    PagamentoPendente,

    #[error("Já existe um registro de presença para este aluno nesta data")]
    PresencaDuplicada,

    #[error("Login já existe")]
    LoginJaExiste,

    // Rejeições do axum reconvertidas para o formato {"error": ...} da API.
    #[error("{0}")]
    CorpoInvalido(String),

    #[error("{0}")]
    RotaInvalida(String),

    #[error("{0}")]
    ConsultaInvalida(String),

    // Erros vindos do sqlx: indisponibilidade vira 500, o restante é
    // repassado como veio (contrato de transparência da API).
    #[error("Erro de banco de dados")]
    Banco(#[from] sqlx::Error),

    #[error("Erro de Bcrypt: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("Erro interno do servidor")]
    Interno(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejeicao: JsonRejection) -> Self {
        AppError::CorpoInvalido(rejeicao.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejeicao: PathRejection) -> Self {
        AppError::RotaInvalida(rejeicao.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejeicao: QueryRejection) -> Self {
        AppError::ConsultaInvalida(rejeicao.body_text())
    }
}

// Falhas de conexão/infraestrutura, em oposição a erros retornados pelo
// próprio Postgres ao executar uma consulta.
fn banco_inacessivel(erro: &sqlx::Error) -> bool {
    matches!(
        erro,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_)
    )
}

// Junta as mensagens do validator em um único texto, em ordem estável.
fn mensagens_de_validacao(erros: &validator::ValidationErrors) -> String {
    let mut mensagens: Vec<String> = erros
        .field_errors()
        .values()
        .flat_map(|erros_do_campo| erros_do_campo.iter())
        .filter_map(|erro| erro.message.as_ref().map(|m| m.to_string()))
        .collect();
    mensagens.sort();
    mensagens.dedup();

    if mensagens.is_empty() {
        "Um ou mais campos são inválidos".to_string()
    } else {
        mensagens.join("; ")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validacao(erros) => {
                (StatusCode::BAD_REQUEST, mensagens_de_validacao(&erros))
            }

            AppError::NaoEncontrado(mensagem) => (StatusCode::NOT_FOUND, mensagem.to_string()),

            erro @ (AppError::TurmaComAlunos
            | AppError::AlunoComPagamentosPendentes
            | AppError::PagamentoPendente
            | AppError::PresencaDuplicada
            | AppError::LoginJaExiste) => (StatusCode::BAD_REQUEST, erro.to_string()),

            AppError::CorpoInvalido(detalhe)
            | AppError::RotaInvalida(detalhe)
            | AppError::ConsultaInvalida(detalhe) => (StatusCode::BAD_REQUEST, detalhe),

            AppError::Banco(ref erro) if banco_inacessivel(erro) => {
                tracing::error!("Banco de dados inacessível: {erro}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro ao conectar ao banco de dados".to_string(),
                )
            }

            // Contrato herdado da API antiga: o texto do erro de banco é
            // devolvido como veio, com status 400.
            AppError::Banco(erro) => (StatusCode::BAD_REQUEST, erro.to_string()),

            ref erro @ (AppError::Bcrypt(_) | AppError::Interno(_)) => {
                tracing::error!("Erro interno do servidor: {erro}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn nao_encontrado_responde_404() {
        let resposta = AppError::NaoEncontrado("Aluno não encontrado").into_response();
        assert_eq!(resposta.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflitos_de_integridade_respondem_400() {
        for erro in [
            AppError::TurmaComAlunos,
            AppError::AlunoComPagamentosPendentes,
            AppError::PagamentoPendente,
            AppError::PresencaDuplicada,
            AppError::LoginJaExiste,
        ] {
            assert_eq!(erro.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn banco_inacessivel_responde_500() {
        let erro = AppError::Banco(sqlx::Error::PoolTimedOut);
        assert_eq!(
            erro.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn erro_de_banco_generico_e_repassado_com_400() {
        let erro = AppError::Banco(sqlx::Error::RowNotFound);
        assert_eq!(erro.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn mensagens_de_validacao_sao_juntadas_em_ordem_estavel() {
        #[derive(Validate)]
        struct Payload {
            #[validate(required(message = "O campo nome_completo é obrigatório"))]
            nome_completo: Option<String>,

            #[validate(required(message = "O campo data_nascimento é obrigatório"))]
            data_nascimento: Option<String>,
        }

        let erros = Payload {
            nome_completo: None,
            data_nascimento: None,
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            mensagens_de_validacao(&erros),
            "O campo data_nascimento é obrigatório; O campo nome_completo é obrigatório"
        );
    }

    #[test]
    fn validacao_sem_mensagem_usa_texto_generico() {
        #[derive(Validate)]
        struct Payload {
            #[validate(length(min = 1))]
            campo: String,
        }

        let erros = Payload {
            campo: String::new(),
        }
        .validate()
        .unwrap_err();

        assert_eq!(mensagens_de_validacao(&erros), "Um ou mais campos são inválidos");
    }
}
