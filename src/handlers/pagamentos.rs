// src/handlers/pagamentos.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::pagamento::{
        CreatePagamentoPayload, FiltrosPagamento, Pagamento, UpdatePagamentoPayload,
    },
};

#[utoipa::path(
    post,
    path = "/pagamentos",
    tag = "Pagamentos",
    request_body = CreatePagamentoPayload,
    responses(
        (status = 201, description = "Pagamento criado"),
        (status = 400, description = "Payload inválido"),
        (status = 404, description = "Aluno não encontrado")
    )
)]
pub async fn create_pagamento(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreatePagamentoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id = app_state
        .pagamento_service
        .create(
            payload.id_aluno.unwrap(),
            payload.data_pagamento.unwrap(),
            payload.valor_pago.unwrap(),
            payload.forma_pagamento.as_deref(),
            payload.referencia.as_deref(),
            payload.status.as_deref(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Pagamento criado com sucesso", "id_pagamento": id })),
    ))
}

#[utoipa::path(
    get,
    path = "/pagamentos",
    tag = "Pagamentos",
    params(FiltrosPagamento),
    responses(
        (status = 200, description = "Pagamentos do mais recente para o mais antigo", body = [Pagamento])
    )
)]
pub async fn get_all_pagamentos(
    State(app_state): State<AppState>,
    WithRejection(Query(filtros), _): WithRejection<Query<FiltrosPagamento>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let pagamentos = app_state.pagamento_service.get_all(&filtros).await?;
    Ok(Json(pagamentos))
}

#[utoipa::path(
    get,
    path = "/pagamentos/{id}",
    tag = "Pagamentos",
    params(("id" = i32, Path, description = "ID do pagamento")),
    responses(
        (status = 200, description = "Pagamento encontrado", body = Pagamento),
        (status = 404, description = "Pagamento não encontrado")
    )
)]
pub async fn get_pagamento(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let pagamento = app_state.pagamento_service.get(id).await?;
    Ok(Json(pagamento))
}

#[utoipa::path(
    put,
    path = "/pagamentos/{id}",
    tag = "Pagamentos",
    request_body = UpdatePagamentoPayload,
    params(("id" = i32, Path, description = "ID do pagamento")),
    responses(
        (status = 200, description = "Pagamento atualizado"),
        (status = 404, description = "Pagamento não encontrado")
    )
)]
pub async fn update_pagamento(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdatePagamentoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state.pagamento_service.update(id, &payload).await?;

    Ok(Json(json!({ "message": "Pagamento atualizado com sucesso" })))
}

#[utoipa::path(
    delete,
    path = "/pagamentos/{id}",
    tag = "Pagamentos",
    params(("id" = i32, Path, description = "ID do pagamento")),
    responses(
        (status = 200, description = "Pagamento deletado"),
        (status = 400, description = "Pagamento pendente não pode ser deletado"),
        (status = 404, description = "Pagamento não encontrado")
    )
)]
pub async fn delete_pagamento(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    app_state.pagamento_service.delete(id).await?;

    Ok(Json(json!({ "message": "Pagamento deletado com sucesso" })))
}
