// src/models/usuario.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::common::serde_utils::id_flexivel;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Usuario {
    #[schema(example = 1)]
    pub id_usuario: i32,

    #[schema(example = "secretaria")]
    pub login: String,

    // Hash bcrypt. IMPORTANTE para segurança: nunca sai em resposta.
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub senha: String,

    #[schema(example = "usuario")]
    pub nivel_acesso: String,

    #[schema(example = 3)]
    pub id_professor: Option<i32>,
}

// Regra herdada da API antiga: mínimo de 8 caracteres, pelo menos uma
// letra e pelo menos um dígito.
pub fn validar_senha(senha: &str) -> Result<(), ValidationError> {
    let comprimento_ok = senha.chars().count() >= 8;
    let tem_letra = senha.chars().any(|c| c.is_ascii_alphabetic());
    let tem_digito = senha.chars().any(|c| c.is_ascii_digit());

    if comprimento_ok && tem_letra && tem_digito {
        Ok(())
    } else {
        let mut erro = ValidationError::new("senha_fraca");
        erro.message =
            Some("Senha deve ter pelo menos 8 caracteres, incluindo letras e números".into());
        Err(erro)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUsuarioPayload {
    #[validate(
        required(message = "O campo login é obrigatório"),
        length(min = 1, message = "O campo login é obrigatório")
    )]
    #[schema(example = "secretaria")]
    pub login: Option<String>,

    #[validate(
        required(message = "O campo senha é obrigatório"),
        custom(function = "validar_senha")
    )]
    #[schema(example = "abcd1234")]
    pub senha: Option<String>,

    // Ausente vira "usuario" na gravação.
    #[schema(example = "admin")]
    pub nivel_acesso: Option<String>,

    #[serde(default, deserialize_with = "id_flexivel")]
    #[schema(value_type = Option<i32>, example = 3)]
    pub id_professor: Option<i32>,
}

// Merge parcial; a senha só é revalidada (e re-hasheada) quando enviada.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUsuarioPayload {
    #[validate(length(min = 1, message = "O campo login é obrigatório"))]
    #[schema(example = "secretaria")]
    pub login: Option<String>,

    #[validate(custom(function = "validar_senha"))]
    #[schema(example = "abcd1234")]
    pub senha: Option<String>,

    #[schema(example = "admin")]
    pub nivel_acesso: Option<String>,

    #[serde(default, deserialize_with = "id_flexivel")]
    #[schema(value_type = Option<i32>, example = 3)]
    pub id_professor: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn senha_curta_sem_digito_e_rejeitada() {
        assert!(validar_senha("abc").is_err());
    }

    #[test]
    fn senha_longa_sem_digito_e_rejeitada() {
        assert!(validar_senha("abcdefgh").is_err());
    }

    #[test]
    fn senha_longa_sem_letra_e_rejeitada() {
        assert!(validar_senha("12345678").is_err());
    }

    #[test]
    fn senha_com_letras_e_digitos_e_aceita() {
        assert!(validar_senha("abcd1234").is_ok());
    }

    #[test]
    fn mensagem_da_senha_fraca_e_a_do_contrato() {
        let erro = validar_senha("abc").unwrap_err();
        assert_eq!(
            erro.message.as_deref(),
            Some("Senha deve ter pelo menos 8 caracteres, incluindo letras e números")
        );
    }

    #[test]
    fn criacao_exige_login_e_senha() {
        let payload = CreateUsuarioPayload {
            login: None,
            senha: None,
            nivel_acesso: None,
            id_professor: None,
        };

        let erros = payload.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("login"));
        assert!(erros.field_errors().contains_key("senha"));
    }

    #[test]
    fn atualizacao_sem_senha_nao_valida_senha() {
        let payload = UpdateUsuarioPayload {
            login: None,
            senha: None,
            nivel_acesso: Some("admin".to_string()),
            id_professor: None,
        };

        assert!(payload.validate().is_ok());
    }

    #[test]
    fn atualizacao_com_senha_fraca_e_rejeitada() {
        let payload = UpdateUsuarioPayload {
            login: None,
            senha: Some("abc".to_string()),
            nivel_acesso: None,
            id_professor: None,
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn resposta_nunca_contem_a_senha() {
        let usuario = Usuario {
            id_usuario: 1,
            login: "secretaria".to_string(),
            senha: "$2b$12$hash".to_string(),
            nivel_acesso: "usuario".to_string(),
            id_professor: None,
        };

        let json = serde_json::to_value(&usuario).unwrap();
        assert!(json.get("senha").is_none());
        assert_eq!(json["login"], "secretaria");
    }
}
