// src/forms/lead_intake.rs

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    models::crm::{standard_value, CreateLeadPayload, Lead},
    services::CrmService,
};

// O dialog "Cadastrar Novo Lead": inputs controlados + estado de
// aberto/fechado. O rascunho só vira Lead de verdade no submit; até lá
// ele é um payload solto, separado do funil.
#[derive(Debug, Clone, Default)]
pub struct LeadIntakeForm {
    draft: CreateLeadPayload,
    is_open: bool,
}

impl LeadIntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn draft(&self) -> &CreateLeadPayload {
        &self.draft
    }

    // --- INPUTS CONTROLADOS ---

    pub fn set_name(&mut self, name: &str) {
        self.draft.name = name.to_string();
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.draft.phone = phone.to_string();
    }

    // O campo de valor continua editável depois da seleção: o preço de
    // tabela é só o ponto de partida.
    pub fn set_value(&mut self, value: Decimal) {
        self.draft.value = value;
    }

    // Seleção no dropdown de procedimentos: preenche o valor com o
    // preço de tabela. Nome fora do catálogo entra valendo zero.
    pub fn select_procedure(&mut self, name: &str) {
        self.draft.procedure = name.to_string();
        self.draft.value = standard_value(name).unwrap_or(Decimal::ZERO);
    }

    // --- SUBMIT ---

    // Sucesso: o lead entra no funil, o rascunho volta ao vazio e o
    // dialog fecha. Falha de validação: nada muda; o formulário segue
    // aberto com o que a usuária digitou, pronto para corrigir, e os
    // detalhes por campo voltam no erro.
    pub fn submit(&mut self, crm: &mut CrmService) -> Result<Lead, AppError> {
        let lead = crm.add_lead(&self.draft)?;
        self.draft = CreateLeadPayload::default();
        self.is_open = false;
        Ok(lead)
    }
}
