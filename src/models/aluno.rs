// src/models/aluno.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::serde_utils::id_flexivel;

// Linha da tabela `aluno`. As chaves `aluno_id` e `nome` no JSON vêm do
// contrato da API antiga; os clientes existentes dependem delas.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Aluno {
    #[serde(rename = "aluno_id")]
    #[schema(example = 1)]
    pub id_aluno: i32,

    #[serde(rename = "nome")]
    #[schema(example = "João Pedro Alves")]
    pub nome_completo: String,

    #[schema(value_type = String, format = Date, example = "2010-01-15")]
    pub data_nascimento: NaiveDate,

    #[schema(example = 2)]
    pub id_turma: Option<i32>,

    #[schema(example = "Maria Alves")]
    pub nome_responsavel: Option<String>,
    pub telefone_responsavel: Option<String>,
    pub email_responsavel: Option<String>,
    pub informacoes_adicionais: Option<String>,
    pub endereco: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,
    pub pais: Option<String>,
    pub telefone: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAlunoPayload {
    #[validate(
        required(message = "O campo nome_completo é obrigatório"),
        length(min = 1, message = "O campo nome_completo é obrigatório")
    )]
    #[schema(example = "João Pedro Alves")]
    pub nome_completo: Option<String>,

    #[validate(required(message = "O campo data_nascimento é obrigatório"))]
    #[schema(value_type = Option<String>, format = Date, example = "2010-01-15")]
    pub data_nascimento: Option<NaiveDate>,

    #[serde(default, deserialize_with = "id_flexivel")]
    #[schema(value_type = Option<i32>, example = 2)]
    pub id_turma: Option<i32>,

    pub nome_responsavel: Option<String>,
    pub telefone_responsavel: Option<String>,
    pub email_responsavel: Option<String>,
    pub informacoes_adicionais: Option<String>,
    pub endereco: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,
    pub pais: Option<String>,
    pub telefone: Option<String>,
}

// A atualização sobrescreve a linha inteira: campo não enviado vira NULL.
// Só o nome é obrigatório aqui; a data entra no UPDATE como vier.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAlunoPayload {
    #[validate(
        required(message = "O campo nome_completo é obrigatório"),
        length(min = 1, message = "O campo nome_completo é obrigatório")
    )]
    #[schema(example = "João Pedro Alves")]
    pub nome_completo: Option<String>,

    #[schema(value_type = Option<String>, format = Date, example = "2010-01-15")]
    pub data_nascimento: Option<NaiveDate>,

    #[serde(default, deserialize_with = "id_flexivel")]
    #[schema(value_type = Option<i32>, example = 2)]
    pub id_turma: Option<i32>,

    pub nome_responsavel: Option<String>,
    pub telefone_responsavel: Option<String>,
    pub email_responsavel: Option<String>,
    pub informacoes_adicionais: Option<String>,
    pub endereco: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,
    pub pais: Option<String>,
    pub telefone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_minimo() -> CreateAlunoPayload {
        CreateAlunoPayload {
            nome_completo: Some("João".to_string()),
            data_nascimento: Some(NaiveDate::from_ymd_opt(2010, 1, 15).unwrap()),
            id_turma: None,
            nome_responsavel: None,
            telefone_responsavel: None,
            email_responsavel: None,
            informacoes_adicionais: None,
            endereco: None,
            cidade: None,
            estado: None,
            cep: None,
            pais: None,
            telefone: None,
        }
    }

    #[test]
    fn resposta_usa_as_chaves_aluno_id_e_nome() {
        let aluno = Aluno {
            id_aluno: 7,
            nome_completo: "João".to_string(),
            data_nascimento: NaiveDate::from_ymd_opt(2010, 1, 15).unwrap(),
            id_turma: None,
            nome_responsavel: None,
            telefone_responsavel: None,
            email_responsavel: None,
            informacoes_adicionais: None,
            endereco: None,
            cidade: None,
            estado: None,
            cep: None,
            pais: None,
            telefone: None,
        };

        let json = serde_json::to_value(&aluno).unwrap();
        assert_eq!(json["aluno_id"], 7);
        assert_eq!(json["nome"], "João");
        assert_eq!(json["data_nascimento"], "2010-01-15");
        assert!(json.get("id_aluno").is_none());
        assert!(json.get("nome_completo").is_none());
    }

    #[test]
    fn criacao_exige_nome_e_data_de_nascimento() {
        let mut payload = payload_minimo();
        payload.nome_completo = None;
        payload.data_nascimento = None;

        let erros = payload.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("nome_completo"));
        assert!(erros.field_errors().contains_key("data_nascimento"));
    }

    #[test]
    fn nome_vazio_e_rejeitado() {
        let mut payload = payload_minimo();
        payload.nome_completo = Some(String::new());

        assert!(payload.validate().is_err());
    }

    #[test]
    fn payload_minimo_e_aceito() {
        assert!(payload_minimo().validate().is_ok());
    }

    #[test]
    fn id_turma_aceita_texto_numerico() {
        let payload: CreateAlunoPayload = serde_json::from_str(
            r#"{"nome_completo": "João", "data_nascimento": "2010-01-15", "id_turma": "3"}"#,
        )
        .unwrap();
        assert_eq!(payload.id_turma, Some(3));
    }
}
