// src/models/crm.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

// --- ENUMS ---

// O funil fixo de 4 estágios. A ordem das variantes É a ordem do kanban.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Interested,
    Scheduled,
    Client,
    UpsellDone,
}

impl Stage {
    // Ordem canônica das colunas.
    pub const ALL: [Stage; 4] = [
        Stage::Interested,
        Stage::Scheduled,
        Stage::Client,
        Stage::UpsellDone,
    ];

    // Título exibido no topo de cada coluna.
    pub fn title(self) -> &'static str {
        match self {
            Stage::Interested => "Interessado",
            Stage::Scheduled => "Agendado",
            Stage::Client => "Cliente",
            Stage::UpsellDone => "Upsell Concluído",
        }
    }

    // Próxima casa do funil. O último estágio não avança: trava ali,
    // não dá a volta.
    pub fn successor(self) -> Stage {
        match self {
            Stage::Interested => Stage::Scheduled,
            Stage::Scheduled => Stage::Client,
            Stage::Client => Stage::UpsellDone,
            Stage::UpsellDone => Stage::UpsellDone,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::UpsellDone)
    }
}

// --- LEAD (O Dado) ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,

    pub name: String,
    pub phone: String,

    // Procedimento de interesse. Depois de criado vira texto livre,
    // sem vínculo com o catálogo.
    pub procedure: String,

    pub value: Decimal,
    pub stage: Stage,

    pub created_at: DateTime<Utc>,
}

// --- PAYLOAD DE CRIAÇÃO ---

// ---
// Validação Customizada
// ---
fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// O que o formulário "Novo Lead" envia. Também serve de rascunho dos
// inputs controlados enquanto o dialog está aberto.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "O telefone é obrigatório."))]
    pub phone: String,

    #[validate(length(min = 1, message = "O procedimento é obrigatório."))]
    pub procedure: String,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)] // Se o JSON não tiver esse campo, assume 0
    pub value: Decimal,
}

// --- CATÁLOGO DE PROCEDIMENTOS ---

// Entrada do catálogo: dado de referência, imutável, ninguém é dono.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Procedure {
    pub name: &'static str,
    pub standard_value: Decimal,
}

// Tabela de preços da clínica. Fixa na sessão.
pub fn procedures() -> Vec<Procedure> {
    vec![
        Procedure { name: "Botox", standard_value: Decimal::from(800) },
        Procedure { name: "Preenchimento", standard_value: Decimal::from(1200) },
        Procedure { name: "Harmonização Facial", standard_value: Decimal::from(2000) },
        Procedure { name: "Limpeza de Pele", standard_value: Decimal::from(150) },
        Procedure { name: "Peeling", standard_value: Decimal::from(300) },
    ]
}

// Preço de tabela de um procedimento. Nome fora do catálogo não é
// erro: quem chama trata como zero.
pub fn standard_value(name: &str) -> Option<Decimal> {
    procedures()
        .into_iter()
        .find(|p| p.name == name)
        .map(|p| p.standard_value)
}

// --- COLUNA DO KANBAN (Resposta) ---

// Uma coluna pronta para o frontend renderizar: cabeçalho com contagem
// e total, e os cards na ordem de chegada.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StageColumn {
    pub stage: Stage,
    pub title: &'static str,
    pub count: usize,
    pub total_value: Decimal,
    // A última coluna não mostra o botão "Avançar →".
    pub can_advance: bool,
    pub leads: Vec<Lead>,
}
