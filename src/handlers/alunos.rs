// src/handlers/alunos.rs

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
    models::aluno::{Aluno, CreateAlunoPayload, UpdateAlunoPayload},
};

#[utoipa::path(
    post,
    path = "/alunos",
    tag = "Alunos",
    request_body = CreateAlunoPayload,
    responses(
        (status = 201, description = "Aluno criado"),
        (status = 400, description = "Payload inválido"),
        (status = 404, description = "Turma informada não existe")
    )
)]
pub async fn create_aluno(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateAlunoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id = app_state.aluno_service.create(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Aluno criado com sucesso", "id_aluno": id })),
    ))
}

#[utoipa::path(
    get,
    path = "/alunos",
    tag = "Alunos",
    responses(
        (status = 200, description = "Lista de alunos em ordem alfabética", body = [Aluno])
    )
)]
pub async fn get_all_alunos(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let alunos = app_state.aluno_service.get_all().await?;
    Ok(Json(alunos))
}

#[utoipa::path(
    get,
    path = "/alunos/{id}",
    tag = "Alunos",
    params(("id" = i32, Path, description = "ID do aluno")),
    responses(
        (status = 200, description = "Aluno encontrado", body = Aluno),
        (status = 404, description = "Aluno não encontrado")
    )
)]
pub async fn get_aluno(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let aluno = app_state.aluno_service.get(id).await?;
    Ok(Json(aluno))
}

#[utoipa::path(
    put,
    path = "/alunos/{id}",
    tag = "Alunos",
    request_body = UpdateAlunoPayload,
    params(("id" = i32, Path, description = "ID do aluno")),
    responses(
        (status = 200, description = "Aluno atualizado"),
        (status = 400, description = "Payload inválido"),
        (status = 404, description = "Aluno não encontrado")
    )
)]
pub async fn update_aluno(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateAlunoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state.aluno_service.update(id, &payload).await?;

    Ok(Json(json!({ "message": "Aluno atualizado com sucesso" })))
}

#[utoipa::path(
    delete,
    path = "/alunos/{id}",
    tag = "Alunos",
    params(("id" = i32, Path, description = "ID do aluno")),
    responses(
        (status = 200, description = "Aluno deletado junto com seus registros"),
        (status = 400, description = "Aluno possui pagamentos pendentes"),
        (status = 404, description = "Aluno não encontrado")
    )
)]
pub async fn delete_aluno(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    app_state.aluno_service.delete(id).await?;

    Ok(Json(json!({ "message": "Aluno deletado com sucesso" })))
}
