// src/models/presenca.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::common::serde_utils::id_flexivel;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Presenca {
    #[schema(example = 1)]
    pub id_presenca: i32,

    #[schema(example = 7)]
    pub id_aluno: i32,

    #[schema(value_type = String, format = Date, example = "2024-03-04")]
    pub data_presenca: NaiveDate,

    #[schema(example = true)]
    pub presente: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePresencaPayload {
    #[validate(required(message = "O campo id_aluno é obrigatório"))]
    #[serde(default, deserialize_with = "id_flexivel")]
    #[schema(value_type = Option<i32>, example = 7)]
    pub id_aluno: Option<i32>,

    #[validate(required(message = "O campo data_presenca é obrigatório"))]
    #[schema(value_type = Option<String>, format = Date, example = "2024-03-04")]
    pub data_presenca: Option<NaiveDate>,

    #[validate(required(message = "O campo presente é obrigatório"))]
    #[schema(example = true)]
    pub presente: Option<bool>,
}

// Merge parcial: campo não enviado mantém o valor gravado.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePresencaPayload {
    #[serde(default, deserialize_with = "id_flexivel")]
    #[schema(value_type = Option<i32>, example = 7)]
    pub id_aluno: Option<i32>,

    #[schema(value_type = Option<String>, format = Date, example = "2024-03-04")]
    pub data_presenca: Option<NaiveDate>,

    #[schema(example = true)]
    pub presente: Option<bool>,
}

// Filtros de GET /presencas, combinados com AND; ausente = sem filtro.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FiltrosPresenca {
    pub id_aluno: Option<i32>,

    #[param(value_type = Option<String>, format = Date)]
    pub data_inicio: Option<NaiveDate>,

    #[param(value_type = Option<String>, format = Date)]
    pub data_fim: Option<NaiveDate>,

    pub presente: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criacao_exige_aluno_data_e_flag() {
        let payload = CreatePresencaPayload {
            id_aluno: None,
            data_presenca: None,
            presente: None,
        };

        let erros = payload.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("id_aluno"));
        assert!(erros.field_errors().contains_key("data_presenca"));
        assert!(erros.field_errors().contains_key("presente"));
    }

    #[test]
    fn presente_falso_e_valido() {
        let payload = CreatePresencaPayload {
            id_aluno: Some(7),
            data_presenca: NaiveDate::from_ymd_opt(2024, 3, 4),
            presente: Some(false),
        };

        assert!(payload.validate().is_ok());
    }

    #[test]
    fn atualizacao_vazia_e_valida() {
        let payload = UpdatePresencaPayload {
            id_aluno: None,
            data_presenca: None,
            presente: None,
        };

        assert!(payload.validate().is_ok());
    }
}
