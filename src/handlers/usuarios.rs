// src/handlers/usuarios.rs

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
    models::usuario::{CreateUsuarioPayload, UpdateUsuarioPayload, Usuario},
};

#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "Usuários",
    request_body = CreateUsuarioPayload,
    responses(
        (status = 201, description = "Usuário criado"),
        (status = 400, description = "Payload inválido ou login já em uso"),
        (status = 404, description = "Professor informado não existe")
    )
)]
pub async fn create_usuario(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateUsuarioPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id = app_state
        .usuario_service
        .create(
            payload.login.as_deref().unwrap(),
            payload.senha.as_deref().unwrap(),
            payload.nivel_acesso.as_deref(),
            payload.id_professor,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Usuário criado com sucesso", "id_usuario": id })),
    ))
}

#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "Usuários",
    responses(
        (status = 200, description = "Lista de usuários por login, sem o hash de senha", body = [Usuario])
    )
)]
pub async fn get_all_usuarios(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let usuarios = app_state.usuario_service.get_all().await?;
    Ok(Json(usuarios))
}

#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "Usuários",
    params(("id" = i32, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado", body = Usuario),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn get_usuario(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let usuario = app_state.usuario_service.get(id).await?;
    Ok(Json(usuario))
}

#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    tag = "Usuários",
    request_body = UpdateUsuarioPayload,
    params(("id" = i32, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário atualizado"),
        (status = 400, description = "Payload inválido ou login já em uso"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn update_usuario(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateUsuarioPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state.usuario_service.update(id, &payload).await?;

    Ok(Json(json!({ "message": "Usuário atualizado com sucesso" })))
}

#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "Usuários",
    params(("id" = i32, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário deletado"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn delete_usuario(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    app_state.usuario_service.delete(id).await?;

    Ok(Json(json!({ "message": "Usuário deletado com sucesso" })))
}
