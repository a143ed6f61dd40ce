// src/store/lead_store.rs

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::crm::{Lead, Stage};

// Repositório de leads da sessão. Tudo em memória: o dono é o
// AppState, e a coleção nasce e morre com a sessão do dashboard.
// A ordem de inserção é preservada (é a ordem de exibição nos cards).
#[derive(Debug, Clone, Default)]
pub struct LeadStore {
    leads: Vec<Lead>,
}

impl LeadStore {
    pub fn new() -> Self {
        Self { leads: Vec::new() }
    }

    // Sessão de demonstração: o funil já começa com 3 leads.
    pub fn with_sample_leads() -> Self {
        let mut store = Self::new();
        store.insert(
            "Maria Silva",
            "(11) 99999-9999",
            "Botox",
            Decimal::from(800),
            Stage::Interested,
        );
        store.insert(
            "Ana Costa",
            "(11) 88888-8888",
            "Harmonização Facial",
            Decimal::from(2000),
            Stage::Scheduled,
        );
        store.insert(
            "Julia Santos",
            "(11) 77777-7777",
            "Preenchimento",
            Decimal::from(1200),
            Stage::Client,
        );
        store
    }

    // Sempre insere no fim. O id é gerado aqui: v4 novo a cada
    // inserção, sem colisão dentro da sessão.
    pub fn insert(
        &mut self,
        name: &str,
        phone: &str,
        procedure: &str,
        value: Decimal,
        stage: Stage,
    ) -> Lead {
        let lead = Lead {
            id: Uuid::new_v4(),
            name: name.to_string(),
            phone: phone.to_string(),
            procedure: procedure.to_string(),
            value,
            stage,
            created_at: Utc::now(),
        };
        self.leads.push(lead.clone());
        lead
    }

    pub fn find_mut(&mut self, id: Uuid) -> Option<&mut Lead> {
        self.leads.iter_mut().find(|lead| lead.id == id)
    }

    pub fn all(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}
