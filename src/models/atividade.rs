// src/models/atividade.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Atividade {
    #[schema(example = 1)]
    pub id_atividade: i32,

    #[schema(example = "Feira de ciências")]
    pub descricao: String,

    #[schema(value_type = String, format = Date, example = "2024-05-20")]
    pub data_realizacao: NaiveDate,
}

// Criação e atualização exigem o payload completo; atividade não tem
// semântica de merge.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAtividadePayload {
    #[validate(
        required(message = "O campo descricao é obrigatório"),
        length(min = 1, message = "O campo descricao é obrigatório")
    )]
    #[schema(example = "Feira de ciências")]
    pub descricao: Option<String>,

    #[validate(required(message = "O campo data_realizacao é obrigatório"))]
    #[schema(value_type = Option<String>, format = Date, example = "2024-05-20")]
    pub data_realizacao: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAtividadePayload {
    #[validate(
        required(message = "O campo descricao é obrigatório"),
        length(min = 1, message = "O campo descricao é obrigatório")
    )]
    #[schema(example = "Feira de ciências")]
    pub descricao: Option<String>,

    #[validate(required(message = "O campo data_realizacao é obrigatório"))]
    #[schema(value_type = Option<String>, format = Date, example = "2024-05-20")]
    pub data_realizacao: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atualizacao_tambem_exige_os_dois_campos() {
        let payload = UpdateAtividadePayload {
            descricao: Some("Feira de ciências".to_string()),
            data_realizacao: None,
        };

        let erros = payload.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("data_realizacao"));
    }

    #[test]
    fn payload_completo_e_aceito() {
        let payload = CreateAtividadePayload {
            descricao: Some("Feira de ciências".to_string()),
            data_realizacao: NaiveDate::from_ymd_opt(2024, 5, 20),
        };

        assert!(payload.validate().is_ok());
    }
}
