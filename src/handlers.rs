pub mod alunos;
pub mod atividades;
pub mod atividades_alunos;
pub mod pagamentos;
pub mod presencas;
pub mod professores;
pub mod turmas;
pub mod usuarios;
