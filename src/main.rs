//src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

#[tokio::main]
async fn main() {
    // Inicializa o logger antes de qualquer outra coisa.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização.
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let alunos_routes = Router::new()
        .route(
            "/alunos",
            post(handlers::alunos::create_aluno).get(handlers::alunos::get_all_alunos),
        )
        .route(
            "/alunos/{id}",
            get(handlers::alunos::get_aluno)
                .put(handlers::alunos::update_aluno)
                .delete(handlers::alunos::delete_aluno),
        );

    let professores_routes = Router::new()
        .route(
            "/professores",
            post(handlers::professores::create_professor)
                .get(handlers::professores::get_all_professores),
        )
        .route(
            "/professores/{id}",
            get(handlers::professores::get_professor)
                .put(handlers::professores::update_professor)
                .delete(handlers::professores::delete_professor),
        );

    let turmas_routes = Router::new()
        .route(
            "/turmas",
            post(handlers::turmas::create_turma).get(handlers::turmas::get_all_turmas),
        )
        .route(
            "/turmas/{id}",
            get(handlers::turmas::get_turma)
                .put(handlers::turmas::update_turma)
                .delete(handlers::turmas::delete_turma),
        );

    let atividades_routes = Router::new()
        .route(
            "/atividades",
            post(handlers::atividades::create_atividade)
                .get(handlers::atividades::get_all_atividades),
        )
        .route(
            "/atividades/{id}",
            get(handlers::atividades::get_atividade)
                .put(handlers::atividades::update_atividade)
                .delete(handlers::atividades::delete_atividade),
        );

    // O vínculo atividade-aluno é endereçado pelo par de ids.
    let atividades_alunos_routes = Router::new()
        .route(
            "/atividades_alunos",
            post(handlers::atividades_alunos::create_atividade_aluno)
                .get(handlers::atividades_alunos::get_all_atividades_alunos),
        )
        .route(
            "/atividades_alunos/{id_atividade}/{id_aluno}",
            get(handlers::atividades_alunos::get_atividade_aluno)
                .put(handlers::atividades_alunos::update_atividade_aluno)
                .delete(handlers::atividades_alunos::delete_atividade_aluno),
        );

    let presencas_routes = Router::new()
        .route(
            "/presencas",
            post(handlers::presencas::create_presenca).get(handlers::presencas::get_all_presencas),
        )
        .route(
            "/presencas/{id}",
            get(handlers::presencas::get_presenca)
                .put(handlers::presencas::update_presenca)
                .delete(handlers::presencas::delete_presenca),
        );

    let pagamentos_routes = Router::new()
        .route(
            "/pagamentos",
            post(handlers::pagamentos::create_pagamento)
                .get(handlers::pagamentos::get_all_pagamentos),
        )
        .route(
            "/pagamentos/{id}",
            get(handlers::pagamentos::get_pagamento)
                .put(handlers::pagamentos::update_pagamento)
                .delete(handlers::pagamentos::delete_pagamento),
        );

    let usuarios_routes = Router::new()
        .route(
            "/usuarios",
            post(handlers::usuarios::create_usuario).get(handlers::usuarios::get_all_usuarios),
        )
        .route(
            "/usuarios/{id}",
            get(handlers::usuarios::get_usuario)
                .put(handlers::usuarios::update_usuario)
                .delete(handlers::usuarios::delete_usuario),
        );

    // Combina tudo no router principal
    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(alunos_routes)
        .merge(professores_routes)
        .merge(turmas_routes)
        .merge(atividades_routes)
        .merge(atividades_alunos_routes)
        .merge(presencas_routes)
        .merge(pagamentos_routes)
        .merge(usuarios_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = config::bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    tracing::info!("📚 Documentação interativa em /docs");
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
