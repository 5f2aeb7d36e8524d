// src/models/professor.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Professor {
    #[schema(example = 1)]
    pub id_professor: i32,

    #[schema(example = "Carlos Lima")]
    pub nome_completo: String,

    #[schema(example = "carlos.lima@escola.com")]
    pub email: Option<String>,

    #[schema(example = "(11) 99999-0000")]
    pub telefone: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProfessorPayload {
    #[validate(
        required(message = "O campo nome_completo é obrigatório"),
        length(min = 1, message = "O campo nome_completo é obrigatório")
    )]
    #[schema(example = "Carlos Lima")]
    pub nome_completo: Option<String>,

    pub email: Option<String>,
    pub telefone: Option<String>,
}

// Sobrescrita da linha inteira, como no aluno.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfessorPayload {
    #[validate(
        required(message = "O campo nome_completo é obrigatório"),
        length(min = 1, message = "O campo nome_completo é obrigatório")
    )]
    #[schema(example = "Carlos Lima")]
    pub nome_completo: Option<String>,

    pub email: Option<String>,
    pub telefone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criacao_exige_nome() {
        let payload = CreateProfessorPayload {
            nome_completo: None,
            email: Some("carlos@escola.com".to_string()),
            telefone: None,
        };

        let erros = payload.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("nome_completo"));
    }

    #[test]
    fn somente_nome_ja_basta() {
        let payload = CreateProfessorPayload {
            nome_completo: Some("Carlos Lima".to_string()),
            email: None,
            telefone: None,
        };

        assert!(payload.validate().is_ok());
    }
}
