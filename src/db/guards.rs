// src/db/guards.rs
//
// Verificações de integridade executadas antes de cada mutação, sempre no
// mesmo executor (transação) da escrita que vem depois. São leituras; uma
// escrita concorrente entre a verificação e a mutação é uma corrida
// conhecida e aceita.

use chrono::NaiveDate;
use sqlx::{Executor, Postgres};

use crate::common::error::AppError;

// Entidades alvo de chave estrangeira simples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefEntity {
    Aluno,
    Professor,
    Turma,
    Atividade,
    Presenca,
    Pagamento,
    Usuario,
}

impl RefEntity {
    pub fn tabela(self) -> &'static str {
        match self {
            RefEntity::Aluno => "aluno",
            RefEntity::Professor => "professor",
            RefEntity::Turma => "turma",
            RefEntity::Atividade => "atividade",
            RefEntity::Presenca => "presenca",
            RefEntity::Pagamento => "pagamento",
            RefEntity::Usuario => "usuario",
        }
    }

    pub fn chave(self) -> &'static str {
        match self {
            RefEntity::Aluno => "id_aluno",
            RefEntity::Professor => "id_professor",
            RefEntity::Turma => "id_turma",
            RefEntity::Atividade => "id_atividade",
            RefEntity::Presenca => "id_presenca",
            RefEntity::Pagamento => "id_pagamento",
            RefEntity::Usuario => "id_usuario",
        }
    }

    // O gênero da mensagem varia por entidade; por isso o erro carrega a
    // mensagem pronta em vez de montar "<entidade> não encontrado".
    pub fn nao_encontrado(self) -> AppError {
        AppError::NaoEncontrado(match self {
            RefEntity::Aluno => "Aluno não encontrado",
            RefEntity::Professor => "Professor não encontrado",
            RefEntity::Turma => "Turma não encontrada",
            RefEntity::Atividade => "Atividade não encontrada",
            RefEntity::Presenca => "Presença não encontrada",
            RefEntity::Pagamento => "Pagamento não encontrado",
            RefEntity::Usuario => "Usuário não encontrado",
        })
    }
}

// Falha com o 404 da entidade se o id não existir.
pub async fn ensure_exists<'e, E>(executor: E, entidade: RefEntity, id: i32) -> Result<(), AppError>
where
    E: Executor<'e, Database = Postgres>,
{
    let sql = format!(
        "SELECT EXISTS (SELECT 1 FROM {} WHERE {} = $1)",
        entidade.tabela(),
        entidade.chave()
    );

    let existe: bool = sqlx::query_scalar(&sql).bind(id).fetch_one(executor).await?;

    if existe {
        Ok(())
    } else {
        Err(entidade.nao_encontrado())
    }
}

// Dependências que bloqueiam uma exclusão.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependentRule {
    // turma → alunos matriculados
    AlunosDaTurma,
    // aluno → pagamentos com status exatamente 'pendente' (minúsculo; o
    // default de inserção é 'Pendente' e não bloqueia)
    PagamentosPendentesDoAluno,
}

impl DependentRule {
    pub fn sql(self) -> &'static str {
        match self {
            DependentRule::AlunosDaTurma => {
                "SELECT EXISTS (SELECT 1 FROM aluno WHERE id_turma = $1)"
            }
            DependentRule::PagamentosPendentesDoAluno => {
                "SELECT EXISTS (SELECT 1 FROM pagamento WHERE id_aluno = $1 AND status = 'pendente')"
            }
        }
    }

    pub fn conflito(self) -> AppError {
        match self {
            DependentRule::AlunosDaTurma => AppError::TurmaComAlunos,
            DependentRule::PagamentosPendentesDoAluno => AppError::AlunoComPagamentosPendentes,
        }
    }
}

// Falha com o 400 da regra se houver dependente.
pub async fn ensure_no_dependents<'e, E>(
    executor: E,
    regra: DependentRule,
    id: i32,
) -> Result<(), AppError>
where
    E: Executor<'e, Database = Postgres>,
{
    let tem_dependentes: bool = sqlx::query_scalar(regra.sql())
        .bind(id)
        .fetch_one(executor)
        .await?;

    if tem_dependentes {
        Err(regra.conflito())
    } else {
        Ok(())
    }
}

// Unicidades garantidas pela aplicação; o esquema não tem índice UNIQUE
// para elas de propósito.
#[derive(Debug, Clone, Copy)]
pub enum UniqueRule<'a> {
    Login(&'a str),
    PresencaDiaria { id_aluno: i32, data: NaiveDate },
}

impl UniqueRule<'_> {
    pub fn conflito(self) -> AppError {
        match self {
            UniqueRule::Login(_) => AppError::LoginJaExiste,
            UniqueRule::PresencaDiaria { .. } => AppError::PresencaDuplicada,
        }
    }
}

// Falha com o 400 da regra se outra linha já tiver o valor; `excluir_id`
// ignora a própria linha durante um update.
pub async fn ensure_unique<'e, E>(
    executor: E,
    regra: UniqueRule<'_>,
    excluir_id: Option<i32>,
) -> Result<(), AppError>
where
    E: Executor<'e, Database = Postgres>,
{
    let duplicado: bool = match regra {
        UniqueRule::Login(login) => {
            sqlx::query_scalar(
                "SELECT EXISTS (SELECT 1 FROM usuario \
                 WHERE login = $1 AND ($2::int IS NULL OR id_usuario <> $2))",
            )
            .bind(login)
            .bind(excluir_id)
            .fetch_one(executor)
            .await?
        }
        UniqueRule::PresencaDiaria { id_aluno, data } => {
            sqlx::query_scalar(
                "SELECT EXISTS (SELECT 1 FROM presenca \
                 WHERE id_aluno = $1 AND data_presenca = $2 \
                 AND ($3::int IS NULL OR id_presenca <> $3))",
            )
            .bind(id_aluno)
            .bind(data)
            .bind(excluir_id)
            .fetch_one(executor)
            .await?
        }
    };

    if duplicado {
        Err(regra.conflito())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn cada_entidade_aponta_para_sua_tabela_e_chave() {
        assert_eq!(RefEntity::Aluno.tabela(), "aluno");
        assert_eq!(RefEntity::Aluno.chave(), "id_aluno");
        assert_eq!(RefEntity::Turma.tabela(), "turma");
        assert_eq!(RefEntity::Turma.chave(), "id_turma");
        assert_eq!(RefEntity::Usuario.tabela(), "usuario");
        assert_eq!(RefEntity::Usuario.chave(), "id_usuario");
    }

    #[test]
    fn mensagens_de_nao_encontrado_respeitam_o_genero() {
        assert_eq!(
            RefEntity::Aluno.nao_encontrado().to_string(),
            "Aluno não encontrado"
        );
        assert_eq!(
            RefEntity::Turma.nao_encontrado().to_string(),
            "Turma não encontrada"
        );
        assert_eq!(
            RefEntity::Presenca.nao_encontrado().to_string(),
            "Presença não encontrada"
        );
    }

    #[test]
    fn nao_encontrado_responde_404() {
        for entidade in [
            RefEntity::Aluno,
            RefEntity::Professor,
            RefEntity::Turma,
            RefEntity::Atividade,
            RefEntity::Presenca,
            RefEntity::Pagamento,
            RefEntity::Usuario,
        ] {
            let resposta = entidade.nao_encontrado().into_response();
            assert_eq!(resposta.status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn bloqueio_de_pagamento_pendente_compara_minusculo() {
        let sql = DependentRule::PagamentosPendentesDoAluno.sql();
        assert!(sql.contains("status = 'pendente'"));
        assert!(!sql.contains("'Pendente'"));
    }

    #[test]
    fn regras_de_unicidade_mapeiam_para_seus_conflitos() {
        assert!(matches!(
            UniqueRule::Login("x").conflito(),
            AppError::LoginJaExiste
        ));
        assert!(matches!(
            UniqueRule::PresencaDiaria {
                id_aluno: 1,
                data: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            }
            .conflito(),
            AppError::PresencaDuplicada
        ));
    }
}
