// src/config.rs

use crate::{
    forms::LeadIntakeForm,
    models::{dashboard::PageContent, huddle::DailyHuddleConfig, navigation::Page},
    services::{CrmService, DashboardService, HuddleService, NavigationService},
    store::LeadStore,
};

// O estado da sessão inteira mora aqui, com dono explícito, em vez de
// estado global de página: quem precisa ler ou mutar recebe uma
// referência. Sessão única, thread única; morreu a sessão, morreu o
// estado.
#[derive(Debug, Clone)]
pub struct AppState {
    pub crm_service: CrmService,
    pub huddle_service: HuddleService,
    pub dashboard_service: DashboardService,
    pub navigation: NavigationService,
    pub intake_form: LeadIntakeForm,
}

impl AppState {
    // Sessão vazia, com os defaults do huddle.
    pub fn new() -> Self {
        Self::with_store(LeadStore::new())
    }

    // Sessão de demonstração: o funil já começa com os 3 leads de
    // exemplo.
    pub fn seeded() -> Self {
        Self::with_store(LeadStore::with_sample_leads())
    }

    fn with_store(store: LeadStore) -> Self {
        // --- Monta o gráfico de dependências ---
        let crm_service = CrmService::new(store);
        let huddle_service = HuddleService::new(DailyHuddleConfig::default());

        tracing::info!("✅ Sessão do dashboard inicializada");

        Self {
            crm_service,
            huddle_service,
            dashboard_service: DashboardService::new(),
            navigation: NavigationService::new(),
            intake_form: LeadIntakeForm::new(),
        }
    }

    // O switch de páginas do shell: cada página vira o conteúdo que o
    // frontend renderiza. Página ainda não construída cai no
    // placeholder "em breve".
    pub fn render_current_page(&self) -> PageContent {
        match self.navigation.current_page() {
            Page::Dashboard => PageContent::Overview(self.dashboard_service.overview()),
            Page::Crm => PageContent::Kanban(self.crm_service.board()),
            Page::Scripts => PageContent::Scripts(self.dashboard_service.script_library()),
            page => PageContent::ComingSoon {
                title: page.placeholder_title(),
            },
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
