// src/services/huddle_service.rs

use crate::models::huddle::{
    DailyHuddleConfig, HuddleDialog, QuickHelp, TodayGoal, YesterdaySummary,
};

// Script de Reativação oferecido pelo botão de ajuda rápida.
pub const REACTIVATION_SCRIPT: &str = "Olá, [Nome]! Notei que você demonstrou interesse no nosso [Procedimento].

Temos uma oportunidade especial hoje para você conhecer melhor nossos resultados.

Que tal agendarmos uma consulta para conversarmos sobre seus objetivos?

Tenho um horário hoje às [Horário]. Posso separar para você?";

// O "Pulseiro Diário": a dose diária de clareza e direção. Três botões,
// três diálogos, números vindos da configuração da sessão.
#[derive(Debug, Clone)]
pub struct HuddleService {
    config: DailyHuddleConfig,
    open_dialog: Option<HuddleDialog>,
}

impl HuddleService {
    pub fn new(config: DailyHuddleConfig) -> Self {
        Self {
            config,
            open_dialog: None,
        }
    }

    pub fn config(&self) -> &DailyHuddleConfig {
        &self.config
    }

    pub fn open_dialog(&self) -> Option<HuddleDialog> {
        self.open_dialog
    }

    // Abrir um diálogo fecha qualquer outro que estivesse aberto.
    pub fn open(&mut self, dialog: HuddleDialog) {
        self.open_dialog = Some(dialog);
    }

    pub fn close(&mut self) {
        self.open_dialog = None;
    }

    // "Qual foi meu número de ontem?"
    pub fn yesterday_summary(&self) -> YesterdaySummary {
        YesterdaySummary {
            leads_advanced: self.config.yesterday_leads,
            revenue: self.config.yesterday_revenue,
            message: format!(
                "Você avançou {} leads na sua esteira e gerou R$ {} em valor de procedimentos agendados.",
                self.config.yesterday_leads, self.config.yesterday_revenue
            ),
        }
    }

    // "Qual é a minha meta de hoje?"
    pub fn today_goal(&self) -> TodayGoal {
        TodayGoal {
            target_leads: self.config.today_target,
            target_stage: self.config.target_stage.clone(),
            message: format!(
                "Com base no seu funil, foque em mover {} leads do estágio '{}'.",
                self.config.today_target, self.config.target_stage
            ),
            tip: "Este é o maior gargalo do seu funil atual. Foque sua energia aqui para maximizar resultados.",
        }
    }

    // "Preciso de uma ajuda rápida"
    pub fn quick_help(&self) -> QuickHelp {
        QuickHelp {
            description: "Script de Reativação - Ideal para leads parados em \"Interessado\"",
            script: REACTIVATION_SCRIPT,
        }
    }
}

impl Default for HuddleService {
    fn default() -> Self {
        Self::new(DailyHuddleConfig::default())
    }
}
