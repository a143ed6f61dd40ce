// src/common/error.rs

use serde_json::{json, Value};
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Sem rede e sem banco o leque é curto: a única coisa que pode dar
// errado aqui é dado de entrada inválido no formulário. Os "erros" de
// consulta (id que não existe, procedimento fora do catálogo) não
// viram erro: são tratados como no-op / valor zero por quem chama.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl AppError {
    // Retorna todos os detalhes da validação, no formato que o
    // frontend consome: { "error": ..., "details": { campo: [msgs] } }
    pub fn to_details(&self) -> Value {
        match self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                })
            }
        }
    }
}
