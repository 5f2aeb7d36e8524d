// src/models/pagamento.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::common::serde_utils::id_flexivel;

// O `status` é texto livre com default "Pendente". A comparação que bloqueia
// exclusões usa 'pendente' minúsculo — comportamento herdado e coberto por
// teste; não "corrigir" a caixa aqui.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Pagamento {
    #[schema(example = 1)]
    pub id_pagamento: i32,

    #[schema(example = 7)]
    pub id_aluno: i32,

    #[schema(value_type = String, format = Date, example = "2024-02-10")]
    pub data_pagamento: NaiveDate,

    // serde-float: serializa como número JSON, como a API antiga fazia.
    #[schema(value_type = f64, example = 150.0)]
    pub valor_pago: Decimal,

    #[schema(example = "Pix")]
    pub forma_pagamento: Option<String>,

    #[schema(example = "Mensalidade fevereiro")]
    pub referencia: Option<String>,

    #[schema(example = "Pendente")]
    pub status: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePagamentoPayload {
    #[validate(required(message = "O campo id_aluno é obrigatório"))]
    #[serde(default, deserialize_with = "id_flexivel")]
    #[schema(value_type = Option<i32>, example = 7)]
    pub id_aluno: Option<i32>,

    #[validate(required(message = "O campo data_pagamento é obrigatório"))]
    #[schema(value_type = Option<String>, format = Date, example = "2024-02-10")]
    pub data_pagamento: Option<NaiveDate>,

    #[validate(required(message = "O campo valor_pago é obrigatório"))]
    #[schema(value_type = Option<f64>, example = 150.0)]
    pub valor_pago: Option<Decimal>,

    #[schema(example = "Pix")]
    pub forma_pagamento: Option<String>,

    #[schema(example = "Mensalidade fevereiro")]
    pub referencia: Option<String>,

    // Ausente vira "Pendente" na gravação.
    #[schema(example = "Pendente")]
    pub status: Option<String>,
}

// Merge parcial: campo não enviado mantém o valor gravado.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePagamentoPayload {
    #[serde(default, deserialize_with = "id_flexivel")]
    #[schema(value_type = Option<i32>, example = 7)]
    pub id_aluno: Option<i32>,

    #[schema(value_type = Option<String>, format = Date, example = "2024-02-10")]
    pub data_pagamento: Option<NaiveDate>,

    #[schema(value_type = Option<f64>, example = 150.0)]
    pub valor_pago: Option<Decimal>,

    #[schema(example = "Pix")]
    pub forma_pagamento: Option<String>,

    #[schema(example = "Mensalidade fevereiro")]
    pub referencia: Option<String>,

    #[schema(example = "Pago")]
    pub status: Option<String>,
}

// Filtros de GET /pagamentos, combinados com AND; ausente = sem filtro.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FiltrosPagamento {
    pub id_aluno: Option<i32>,

    pub status: Option<String>,

    #[param(value_type = Option<String>, format = Date)]
    pub data_inicio: Option<NaiveDate>,

    #[param(value_type = Option<String>, format = Date)]
    pub data_fim: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criacao_exige_aluno_data_e_valor() {
        let payload = CreatePagamentoPayload {
            id_aluno: None,
            data_pagamento: None,
            valor_pago: None,
            forma_pagamento: None,
            referencia: None,
            status: None,
        };

        let erros = payload.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("id_aluno"));
        assert!(erros.field_errors().contains_key("data_pagamento"));
        assert!(erros.field_errors().contains_key("valor_pago"));
    }

    #[test]
    fn valor_pago_serializa_como_numero() {
        let pagamento = Pagamento {
            id_pagamento: 1,
            id_aluno: 7,
            data_pagamento: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            valor_pago: Decimal::new(15050, 2),
            forma_pagamento: None,
            referencia: None,
            status: "Pendente".to_string(),
        };

        let json = serde_json::to_value(&pagamento).unwrap();
        assert!(json["valor_pago"].is_number());
        assert!((json["valor_pago"].as_f64().unwrap() - 150.5).abs() < f64::EPSILON);
    }

    #[test]
    fn valor_pago_aceita_numero_json() {
        let payload: CreatePagamentoPayload = serde_json::from_str(
            r#"{"id_aluno": 7, "data_pagamento": "2024-02-10", "valor_pago": 150.5}"#,
        )
        .unwrap();
        assert_eq!(payload.valor_pago, Some(Decimal::new(15050, 2)));
    }
}
