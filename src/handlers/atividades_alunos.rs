// src/handlers/atividades_alunos.rs

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
    models::atividade_aluno::{
        AtividadeAluno, CreateAtividadeAlunoPayload, UpdateAtividadeAlunoPayload,
    },
};

#[utoipa::path(
    post,
    path = "/atividades_alunos",
    tag = "Atividades-Alunos",
    request_body = CreateAtividadeAlunoPayload,
    responses(
        (status = 201, description = "Vínculo criado"),
        (status = 400, description = "Payload inválido ou vínculo já existente"),
        (status = 404, description = "Atividade ou aluno não encontrado")
    )
)]
pub async fn create_atividade_aluno(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateAtividadeAlunoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id_atividade = payload.id_atividade.unwrap();
    let id_aluno = payload.id_aluno.unwrap();

    app_state
        .atividade_aluno_service
        .create(
            id_atividade,
            id_aluno,
            payload.desempenho.as_deref(),
            payload.observacoes.as_deref(),
        )
        .await?;

    // Não há id gerado; a resposta ecoa o par que identifica o vínculo.
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Atividade-Aluno criada com sucesso",
            "id_atividade": id_atividade,
            "id_aluno": id_aluno,
        })),
    ))
}

#[utoipa::path(
    get,
    path = "/atividades_alunos",
    tag = "Atividades-Alunos",
    responses(
        (status = 200, description = "Lista de vínculos", body = [AtividadeAluno])
    )
)]
pub async fn get_all_atividades_alunos(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let vinculos = app_state.atividade_aluno_service.get_all().await?;
    Ok(Json(vinculos))
}

#[utoipa::path(
    get,
    path = "/atividades_alunos/{id_atividade}/{id_aluno}",
    tag = "Atividades-Alunos",
    params(
        ("id_atividade" = i32, Path, description = "ID da atividade"),
        ("id_aluno" = i32, Path, description = "ID do aluno")
    ),
    responses(
        (status = 200, description = "Vínculo encontrado", body = AtividadeAluno),
        (status = 404, description = "Vínculo não encontrado")
    )
)]
pub async fn get_atividade_aluno(
    State(app_state): State<AppState>,
    WithRejection(Path((id_atividade, id_aluno)), _): WithRejection<Path<(i32, i32)>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let vinculo = app_state
        .atividade_aluno_service
        .get(id_atividade, id_aluno)
        .await?;
    Ok(Json(vinculo))
}

#[utoipa::path(
    put,
    path = "/atividades_alunos/{id_atividade}/{id_aluno}",
    tag = "Atividades-Alunos",
    request_body = UpdateAtividadeAlunoPayload,
    params(
        ("id_atividade" = i32, Path, description = "ID da atividade"),
        ("id_aluno" = i32, Path, description = "ID do aluno")
    ),
    responses(
        (status = 200, description = "Vínculo atualizado"),
        (status = 404, description = "Vínculo não encontrado")
    )
)]
pub async fn update_atividade_aluno(
    State(app_state): State<AppState>,
    WithRejection(Path((id_atividade, id_aluno)), _): WithRejection<Path<(i32, i32)>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateAtividadeAlunoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .atividade_aluno_service
        .update(id_atividade, id_aluno, &payload)
        .await?;

    Ok(Json(json!({ "message": "Atividade-Aluno atualizada com sucesso" })))
}

#[utoipa::path(
    delete,
    path = "/atividades_alunos/{id_atividade}/{id_aluno}",
    tag = "Atividades-Alunos",
    params(
        ("id_atividade" = i32, Path, description = "ID da atividade"),
        ("id_aluno" = i32, Path, description = "ID do aluno")
    ),
    responses(
        (status = 200, description = "Vínculo deletado"),
        (status = 404, description = "Vínculo não encontrado")
    )
)]
pub async fn delete_atividade_aluno(
    State(app_state): State<AppState>,
    WithRejection(Path((id_atividade, id_aluno)), _): WithRejection<Path<(i32, i32)>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .atividade_aluno_service
        .delete(id_atividade, id_aluno)
        .await?;

    Ok(Json(json!({ "message": "Atividade-Aluno deletada com sucesso" })))
}
