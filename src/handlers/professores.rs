// src/handlers/professores.rs

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
    models::professor::{CreateProfessorPayload, Professor, UpdateProfessorPayload},
};

#[utoipa::path(
    post,
    path = "/professores",
    tag = "Professores",
    request_body = CreateProfessorPayload,
    responses(
        (status = 201, description = "Professor criado"),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_professor(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateProfessorPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id = app_state.professor_service.create(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Professor criado com sucesso", "id_professor": id })),
    ))
}

#[utoipa::path(
    get,
    path = "/professores",
    tag = "Professores",
    responses(
        (status = 200, description = "Lista de professores em ordem alfabética", body = [Professor])
    )
)]
pub async fn get_all_professores(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let professores = app_state.professor_service.get_all().await?;
    Ok(Json(professores))
}

#[utoipa::path(
    get,
    path = "/professores/{id}",
    tag = "Professores",
    params(("id" = i32, Path, description = "ID do professor")),
    responses(
        (status = 200, description = "Professor encontrado", body = Professor),
        (status = 404, description = "Professor não encontrado")
    )
)]
pub async fn get_professor(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let professor = app_state.professor_service.get(id).await?;
    Ok(Json(professor))
}

#[utoipa::path(
    put,
    path = "/professores/{id}",
    tag = "Professores",
    request_body = UpdateProfessorPayload,
    params(("id" = i32, Path, description = "ID do professor")),
    responses(
        (status = 200, description = "Professor atualizado"),
        (status = 400, description = "Payload inválido"),
        (status = 404, description = "Professor não encontrado")
    )
)]
pub async fn update_professor(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateProfessorPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state.professor_service.update(id, &payload).await?;

    Ok(Json(json!({ "message": "Professor atualizado com sucesso" })))
}

#[utoipa::path(
    delete,
    path = "/professores/{id}",
    tag = "Professores",
    params(("id" = i32, Path, description = "ID do professor")),
    responses(
        (status = 200, description = "Professor deletado"),
        (status = 400, description = "Professor ainda referenciado por turmas ou usuários"),
        (status = 404, description = "Professor não encontrado")
    )
)]
pub async fn delete_professor(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    app_state.professor_service.delete(id).await?;

    Ok(Json(json!({ "message": "Professor deletado com sucesso" })))
}
