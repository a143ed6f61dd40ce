// src/services/crm_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    models::crm::{CreateLeadPayload, Lead, Stage, StageColumn},
    store::LeadStore,
};

// O funil de vendas. Tudo que mexe nos leads passa por aqui; o board
// só lê. Mutação é síncrona e sequencial: cada interação termina antes
// da próxima começar, então não há lock nenhum.
#[derive(Debug, Clone)]
pub struct CrmService {
    store: LeadStore,
}

impl CrmService {
    pub fn new(store: LeadStore) -> Self {
        Self { store }
    }

    // =========================================================================
    //  ESCRITA
    // =========================================================================

    // Porta de entrada única de leads: valida o payload, gera o id e
    // já coloca o lead na primeira coluna do funil. Payload inválido
    // não muda nada: o chamador corrige e tenta de novo.
    pub fn add_lead(&mut self, payload: &CreateLeadPayload) -> Result<Lead, AppError> {
        payload.validate()?;

        let lead = self.store.insert(
            &payload.name,
            &payload.phone,
            &payload.procedure,
            payload.value,
            Stage::Interested,
        );

        tracing::info!(
            "✅ Novo lead cadastrado: {} ({}, R$ {})",
            lead.name,
            lead.procedure,
            lead.value
        );
        Ok(lead)
    }

    // Avança o lead UMA casa no funil, nunca duas, nunca para trás.
    // Quem já está em "Upsell Concluído" fica onde está. Id que não
    // existe também não é erro: a UI nunca oferece um id inválido,
    // então só registramos e seguimos.
    pub fn advance_stage(&mut self, lead_id: Uuid) {
        match self.store.find_mut(lead_id) {
            Some(lead) => {
                let next = lead.stage.successor();
                if next != lead.stage {
                    tracing::info!("Lead movido: {} para {}", lead.name, next.title());
                    lead.stage = next;
                }
            }
            None => {
                tracing::debug!("advance_stage ignorado: lead {} não existe", lead_id);
            }
        }
    }

    // =========================================================================
    //  LEITURA
    // =========================================================================

    // Filtro puro, recalculado a cada chamada. A lista é pequena;
    // cache aqui só traria risco de dado velho a cada mutação.
    pub fn leads_in_stage(&self, stage: Stage) -> Vec<&Lead> {
        self.store
            .all()
            .iter()
            .filter(|lead| lead.stage == stage)
            .collect()
    }

    pub fn total_value_in_stage(&self, stage: Stage) -> Decimal {
        self.leads_in_stage(stage)
            .iter()
            .map(|lead| lead.value)
            .sum()
    }

    // Monta as 4 colunas do kanban, na ordem fixa do funil.
    pub fn board(&self) -> Vec<StageColumn> {
        Stage::ALL
            .iter()
            .map(|&stage| {
                let leads: Vec<Lead> =
                    self.leads_in_stage(stage).into_iter().cloned().collect();
                StageColumn {
                    stage,
                    title: stage.title(),
                    count: leads.len(),
                    total_value: leads.iter().map(|lead| lead.value).sum(),
                    can_advance: !stage.is_terminal(),
                    leads,
                }
            })
            .collect()
    }

    pub fn lead_count(&self) -> usize {
        self.store.len()
    }

    pub fn leads(&self) -> &[Lead] {
        self.store.all()
    }
}
