// src/models/turma.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::serde_utils::id_flexivel;

// Linha da tabela `turma` com o nome do professor resolvido por LEFT JOIN
// nas leituras (null quando a turma não tem professor atribuído).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Turma {
    #[schema(example = 1)]
    pub id_turma: i32,

    #[schema(example = "Turma A - Manhã")]
    pub nome_turma: String,

    #[schema(example = 3)]
    pub id_professor: Option<i32>,

    #[schema(example = "Carlos Lima")]
    pub nome_professor: Option<String>,

    #[schema(example = "Seg/Qua/Sex 08:00-12:00")]
    pub horario: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTurmaPayload {
    #[validate(
        required(message = "O campo nome_turma é obrigatório"),
        length(min = 1, message = "O campo nome_turma é obrigatório")
    )]
    #[schema(example = "Turma A - Manhã")]
    pub nome_turma: Option<String>,

    #[serde(default, deserialize_with = "id_flexivel")]
    #[schema(value_type = Option<i32>, example = 3)]
    pub id_professor: Option<i32>,

    #[schema(example = "Seg/Qua/Sex 08:00-12:00")]
    pub horario: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTurmaPayload {
    #[validate(
        required(message = "O campo nome_turma é obrigatório"),
        length(min = 1, message = "O campo nome_turma é obrigatório")
    )]
    #[schema(example = "Turma A - Manhã")]
    pub nome_turma: Option<String>,

    #[serde(default, deserialize_with = "id_flexivel")]
    #[schema(value_type = Option<i32>, example = 3)]
    pub id_professor: Option<i32>,

    #[schema(example = "Seg/Qua/Sex 08:00-12:00")]
    pub horario: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criacao_exige_nome_da_turma() {
        let payload = CreateTurmaPayload {
            nome_turma: None,
            id_professor: Some(3),
            horario: None,
        };

        let erros = payload.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("nome_turma"));
    }

    #[test]
    fn id_professor_aceita_texto_numerico() {
        let payload: CreateTurmaPayload =
            serde_json::from_str(r#"{"nome_turma": "Turma A", "id_professor": "3"}"#).unwrap();
        assert_eq!(payload.id_professor, Some(3));
    }

    #[test]
    fn nome_do_professor_ausente_serializa_como_null() {
        let turma = Turma {
            id_turma: 1,
            nome_turma: "Turma A".to_string(),
            id_professor: None,
            nome_professor: None,
            horario: None,
        };

        let json = serde_json::to_value(&turma).unwrap();
        assert!(json["nome_professor"].is_null());
    }
}
