// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Alunos ---
        handlers::alunos::create_aluno,
        handlers::alunos::get_all_alunos,
        handlers::alunos::get_aluno,
        handlers::alunos::update_aluno,
        handlers::alunos::delete_aluno,

        // --- Professores ---
        handlers::professores::create_professor,
        handlers::professores::get_all_professores,
        handlers::professores::get_professor,
        handlers::professores::update_professor,
        handlers::professores::delete_professor,

        // --- Turmas ---
        handlers::turmas::create_turma,
        handlers::turmas::get_all_turmas,
        handlers::turmas::get_turma,
        handlers::turmas::update_turma,
        handlers::turmas::delete_turma,

        // --- Atividades ---
        handlers::atividades::create_atividade,
        handlers::atividades::get_all_atividades,
        handlers::atividades::get_atividade,
        handlers::atividades::update_atividade,
        handlers::atividades::delete_atividade,

        // --- Atividades-Alunos ---
        handlers::atividades_alunos::create_atividade_aluno,
        handlers::atividades_alunos::get_all_atividades_alunos,
        handlers::atividades_alunos::get_atividade_aluno,
        handlers::atividades_alunos::update_atividade_aluno,
        handlers::atividades_alunos::delete_atividade_aluno,

        // --- Presenças ---
        handlers::presencas::create_presenca,
        handlers::presencas::get_all_presencas,
        handlers::presencas::get_presenca,
        handlers::presencas::update_presenca,
        handlers::presencas::delete_presenca,

        // --- Pagamentos ---
        handlers::pagamentos::create_pagamento,
        handlers::pagamentos::get_all_pagamentos,
        handlers::pagamentos::get_pagamento,
        handlers::pagamentos::update_pagamento,
        handlers::pagamentos::delete_pagamento,

        // --- Usuários ---
        handlers::usuarios::create_usuario,
        handlers::usuarios::get_all_usuarios,
        handlers::usuarios::get_usuario,
        handlers::usuarios::update_usuario,
        handlers::usuarios::delete_usuario,
    ),
    components(
        schemas(
            // --- Entidades ---
            models::aluno::Aluno,
            models::professor::Professor,
            models::turma::Turma,
            models::atividade::Atividade,
            models::atividade_aluno::AtividadeAluno,
            models::presenca::Presenca,
            models::pagamento::Pagamento,
            models::usuario::Usuario,

            // --- Payloads ---
            models::aluno::CreateAlunoPayload,
            models::aluno::UpdateAlunoPayload,
            models::professor::CreateProfessorPayload,
            models::professor::UpdateProfessorPayload,
            models::turma::CreateTurmaPayload,
            models::turma::UpdateTurmaPayload,
            models::atividade::CreateAtividadePayload,
            models::atividade::UpdateAtividadePayload,
            models::atividade_aluno::CreateAtividadeAlunoPayload,
            models::atividade_aluno::UpdateAtividadeAlunoPayload,
            models::presenca::CreatePresencaPayload,
            models::presenca::UpdatePresencaPayload,
            models::pagamento::CreatePagamentoPayload,
            models::pagamento::UpdatePagamentoPayload,
            models::usuario::CreateUsuarioPayload,
            models::usuario::UpdateUsuarioPayload,
        )
    ),
    tags(
        (name = "Alunos", description = "Cadastro de Alunos"),
        (name = "Professores", description = "Cadastro de Professores"),
        (name = "Turmas", description = "Turmas e seus Professores"),
        (name = "Atividades", description = "Atividades Escolares"),
        (name = "Atividades-Alunos", description = "Vínculo de Alunos em Atividades"),
        (name = "Presenças", description = "Registro Diário de Presença"),
        (name = "Pagamentos", description = "Controle de Pagamentos"),
        (name = "Usuários", description = "Usuários do Sistema")
    )
)]
pub struct ApiDoc;
