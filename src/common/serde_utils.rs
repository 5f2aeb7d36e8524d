// src/common/serde_utils.rs

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// Ids de chave estrangeira podem chegar como número ou como texto numérico
// ("3", herança dos clientes da API antiga). Aceita os dois; qualquer outra
// coisa falha a desserialização e vira 400 para o cliente.
pub fn id_flexivel<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(numero)) => numero
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("o id deve ser um número inteiro")),
        Some(Value::String(texto)) => texto
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| {
                serde::de::Error::custom(format!("o id \"{texto}\" não é um número inteiro"))
            }),
        Some(outro) => Err(serde::de::Error::custom(format!(
            "valor inesperado para um id: {outro}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "super::id_flexivel")]
        id_aluno: Option<i32>,
    }

    #[test]
    fn aceita_numero_inteiro() {
        let payload: Payload = serde_json::from_str(r#"{"id_aluno": 7}"#).unwrap();
        assert_eq!(payload.id_aluno, Some(7));
    }

    #[test]
    fn aceita_texto_numerico() {
        let payload: Payload = serde_json::from_str(r#"{"id_aluno": " 42 "}"#).unwrap();
        assert_eq!(payload.id_aluno, Some(42));
    }

    #[test]
    fn campo_ausente_ou_nulo_vira_none() {
        let ausente: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(ausente.id_aluno, None);

        let nulo: Payload = serde_json::from_str(r#"{"id_aluno": null}"#).unwrap();
        assert_eq!(nulo.id_aluno, None);
    }

    #[test]
    fn rejeita_texto_nao_numerico() {
        let resultado = serde_json::from_str::<Payload>(r#"{"id_aluno": "abc"}"#);
        assert!(resultado.is_err());
    }

    #[test]
    fn rejeita_numero_fracionario() {
        let resultado = serde_json::from_str::<Payload>(r#"{"id_aluno": 3.5}"#);
        assert!(resultado.is_err());
    }
}
