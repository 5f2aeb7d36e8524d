pub mod guards;

pub mod aluno_repo;
pub use aluno_repo::AlunoRepository;
pub mod professor_repo;
pub use professor_repo::ProfessorRepository;
pub mod turma_repo;
pub use turma_repo::TurmaRepository;
pub mod atividade_repo;
pub use atividade_repo::AtividadeRepository;
pub mod atividade_aluno_repo;
pub use atividade_aluno_repo::AtividadeAlunoRepository;
pub mod presenca_repo;
pub use presenca_repo::PresencaRepository;
pub mod pagamento_repo;
pub use pagamento_repo::PagamentoRepository;
pub mod usuario_repo;
pub use usuario_repo::UsuarioRepository;
