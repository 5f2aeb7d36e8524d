// src/models/atividade_aluno.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::serde_utils::id_flexivel;

// Vínculo aluno↔atividade; a identidade é o par (id_atividade, id_aluno).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct AtividadeAluno {
    #[schema(example = 1)]
    pub id_atividade: i32,

    #[schema(example = 7)]
    pub id_aluno: i32,

    #[schema(example = "Ótimo")]
    pub desempenho: Option<String>,

    #[schema(example = "Participou de todas as etapas")]
    pub observacoes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAtividadeAlunoPayload {
    #[validate(required(message = "O campo id_atividade é obrigatório"))]
    #[serde(default, deserialize_with = "id_flexivel")]
    #[schema(value_type = Option<i32>, example = 1)]
    pub id_atividade: Option<i32>,

    #[validate(required(message = "O campo id_aluno é obrigatório"))]
    #[serde(default, deserialize_with = "id_flexivel")]
    #[schema(value_type = Option<i32>, example = 7)]
    pub id_aluno: Option<i32>,

    #[schema(example = "Ótimo")]
    pub desempenho: Option<String>,

    #[schema(example = "Participou de todas as etapas")]
    pub observacoes: Option<String>,
}

// Merge parcial: o par de ids vem da rota e não muda; só os campos de
// avaliação são atualizáveis.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAtividadeAlunoPayload {
    #[schema(example = "Ótimo")]
    pub desempenho: Option<String>,

    #[schema(example = "Participou de todas as etapas")]
    pub observacoes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criacao_exige_o_par_de_ids() {
        let payload = CreateAtividadeAlunoPayload {
            id_atividade: None,
            id_aluno: None,
            desempenho: None,
            observacoes: None,
        };

        let erros = payload.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("id_atividade"));
        assert!(erros.field_errors().contains_key("id_aluno"));
    }

    #[test]
    fn ids_aceitam_texto_numerico() {
        let payload: CreateAtividadeAlunoPayload =
            serde_json::from_str(r#"{"id_atividade": "1", "id_aluno": "7"}"#).unwrap();
        assert_eq!(payload.id_atividade, Some(1));
        assert_eq!(payload.id_aluno, Some(7));
    }
}
