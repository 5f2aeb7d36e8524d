// src/handlers/atividades.rs

use axum::{
    extract::{Path, State},
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
    models::atividade::{Atividade, CreateAtividadePayload, UpdateAtividadePayload},
};

#[utoipa::path(
    post,
    path = "/atividades",
    tag = "Atividades",
    request_body = CreateAtividadePayload,
    responses(
        (status = 201, description = "Atividade criada"),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_atividade(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateAtividadePayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id = app_state.atividade_service.create(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Atividade criada com sucesso", "id_atividade": id })),
    ))
}

#[utoipa::path(
    get,
    path = "/atividades",
    tag = "Atividades",
    responses(
        (status = 200, description = "Lista de atividades por data de realização", body = [Atividade])
    )
)]
pub async fn get_all_atividades(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let atividades = app_state.atividade_service.get_all().await?;
    Ok(Json(atividades))
}

#[utoipa::path(
    get,
    path = "/atividades/{id}",
    tag = "Atividades",
    params(("id" = i32, Path, description = "ID da atividade")),
    responses(
        (status = 200, description = "Atividade encontrada", body = Atividade),
        (status = 404, description = "Atividade não encontrada")
    )
)]
pub async fn get_atividade(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let atividade = app_state.atividade_service.get(id).await?;
    Ok(Json(atividade))
}

#[utoipa::path(
    put,
    path = "/atividades/{id}",
    tag = "Atividades",
    request_body = UpdateAtividadePayload,
    params(("id" = i32, Path, description = "ID da atividade")),
    responses(
        (status = 200, description = "Atividade atualizada"),
        (status = 400, description = "Payload inválido"),
        (status = 404, description = "Atividade não encontrada")
    )
)]
pub async fn update_atividade(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateAtividadePayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state.atividade_service.update(id, &payload).await?;

    Ok(Json(json!({ "message": "Atividade atualizada com sucesso" })))
}

#[utoipa::path(
    delete,
    path = "/atividades/{id}",
    tag = "Atividades",
    params(("id" = i32, Path, description = "ID da atividade")),
    responses(
        (status = 200, description = "Atividade deletada junto com os vínculos de alunos"),
        (status = 404, description = "Atividade não encontrada")
    )
)]
pub async fn delete_atividade(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    app_state.atividade_service.delete(id).await?;

    Ok(Json(json!({ "message": "Atividade deletada com sucesso" })))
}
