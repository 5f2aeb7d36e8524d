pub mod aluno_service;
pub use aluno_service::AlunoService;
pub mod professor_service;
pub use professor_service::ProfessorService;
pub mod turma_service;
pub use turma_service::TurmaService;
pub mod atividade_service;
pub use atividade_service::AtividadeService;
pub mod atividade_aluno_service;
pub use atividade_aluno_service::AtividadeAlunoService;
pub mod presenca_service;
pub use presenca_service::PresencaService;
pub mod pagamento_service;
pub use pagamento_service::PagamentoService;
pub mod usuario_service;
pub use usuario_service::UsuarioService;
