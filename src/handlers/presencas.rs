// src/handlers/presencas.rs

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
    models::presenca::{CreatePresencaPayload, FiltrosPresenca, Presenca, UpdatePresencaPayload},
};

#[utoipa::path(
    post,
    path = "/presencas",
    tag = "Presenças",
    request_body = CreatePresencaPayload,
    responses(
        (status = 201, description = "Presença registrada"),
        (status = 400, description = "Payload inválido ou presença já registrada no dia"),
        (status = 404, description = "Aluno não encontrado")
    )
)]
pub async fn create_presenca(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreatePresencaPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id = app_state
        .presenca_service
        .create(
            payload.id_aluno.unwrap(),
            payload.data_presenca.unwrap(),
            payload.presente.unwrap(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Presença registrada com sucesso", "id_presenca": id })),
    ))
}

#[utoipa::path(
    get,
    path = "/presencas",
    tag = "Presenças",
    params(FiltrosPresenca),
    responses(
        (status = 200, description = "Presenças da mais recente para a mais antiga", body = [Presenca])
    )
)]
pub async fn get_all_presencas(
    State(app_state): State<AppState>,
    WithRejection(Query(filtros), _): WithRejection<Query<FiltrosPresenca>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let presencas = app_state.presenca_service.get_all(&filtros).await?;
    Ok(Json(presencas))
}

#[utoipa::path(
    get,
    path = "/presencas/{id}",
    tag = "Presenças",
    params(("id" = i32, Path, description = "ID da presença")),
    responses(
        (status = 200, description = "Presença encontrada", body = Presenca),
        (status = 404, description = "Presença não encontrada")
    )
)]
pub async fn get_presenca(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let presenca = app_state.presenca_service.get(id).await?;
    Ok(Json(presenca))
}

#[utoipa::path(
    put,
    path = "/presencas/{id}",
    tag = "Presenças",
    request_body = UpdatePresencaPayload,
    params(("id" = i32, Path, description = "ID da presença")),
    responses(
        (status = 200, description = "Presença atualizada"),
        (status = 400, description = "Conflito com outra presença do mesmo aluno e data"),
        (status = 404, description = "Presença não encontrada")
    )
)]
pub async fn update_presenca(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdatePresencaPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state.presenca_service.update(id, &payload).await?;

    Ok(Json(json!({ "message": "Presença atualizada com sucesso" })))
}

#[utoipa::path(
    delete,
    path = "/presencas/{id}",
    tag = "Presenças",
    params(("id" = i32, Path, description = "ID da presença")),
    responses(
        (status = 200, description = "Presença deletada"),
        (status = 404, description = "Presença não encontrada")
    )
)]
pub async fn delete_presenca(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    app_state.presenca_service.delete(id).await?;

    Ok(Json(json!({ "message": "Presença deletada com sucesso" })))
}
