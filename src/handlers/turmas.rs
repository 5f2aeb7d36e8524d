// src/handlers/turmas.rs

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
    models::turma::{CreateTurmaPayload, Turma, UpdateTurmaPayload},
};

#[utoipa::path(
    post,
    path = "/turmas",
    tag = "Turmas",
    request_body = CreateTurmaPayload,
    responses(
        (status = 201, description = "Turma criada"),
        (status = 400, description = "Payload inválido"),
        (status = 404, description = "Professor informado não existe")
    )
)]
pub async fn create_turma(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateTurmaPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id = app_state.turma_service.create(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Turma criada com sucesso", "id_turma": id })),
    ))
}

#[utoipa::path(
    get,
    path = "/turmas",
    tag = "Turmas",
    responses(
        (status = 200, description = "Lista de turmas com o nome do professor", body = [Turma])
    )
)]
pub async fn get_all_turmas(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let turmas = app_state.turma_service.get_all().await?;
    Ok(Json(turmas))
}

#[utoipa::path(
    get,
    path = "/turmas/{id}",
    tag = "Turmas",
    params(("id" = i32, Path, description = "ID da turma")),
    responses(
        (status = 200, description = "Turma encontrada", body = Turma),
        (status = 404, description = "Turma não encontrada")
    )
)]
pub async fn get_turma(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let turma = app_state.turma_service.get(id).await?;
    Ok(Json(turma))
}

#[utoipa::path(
    put,
    path = "/turmas/{id}",
    tag = "Turmas",
    request_body = UpdateTurmaPayload,
    params(("id" = i32, Path, description = "ID da turma")),
    responses(
        (status = 200, description = "Turma atualizada"),
        (status = 400, description = "Payload inválido"),
        (status = 404, description = "Turma não encontrada")
    )
)]
pub async fn update_turma(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateTurmaPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state.turma_service.update(id, &payload).await?;

    Ok(Json(json!({ "message": "Turma atualizada com sucesso" })))
}

#[utoipa::path(
    delete,
    path = "/turmas/{id}",
    tag = "Turmas",
    params(("id" = i32, Path, description = "ID da turma")),
    responses(
        (status = 200, description = "Turma deletada"),
        (status = 400, description = "Turma possui alunos associados"),
        (status = 404, description = "Turma não encontrada")
    )
)]
pub async fn delete_turma(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    app_state.turma_service.delete(id).await?;

    Ok(Json(json!({ "message": "Turma deletada com sucesso" })))
}
