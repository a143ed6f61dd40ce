// src/models/huddle.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Configuração do "Pulseiro Diário". Os defaults ficam enumerados num
// lugar só, em vez de espalhados em props opcionais.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyHuddleConfig {
    pub yesterday_leads: u32,
    pub yesterday_revenue: Decimal,
    pub today_target: u32,
    pub target_stage: String,
}

impl Default for DailyHuddleConfig {
    fn default() -> Self {
        Self {
            yesterday_leads: 12,
            yesterday_revenue: Decimal::from(3400),
            today_target: 8,
            target_stage: "Interessado para Agendado".to_string(),
        }
    }
}

// Os três diálogos do widget. No máximo um aberto por vez.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HuddleDialog {
    Yesterday,
    TodayGoal,
    QuickHelp,
}

// "Qual foi meu número de ontem?"
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YesterdaySummary {
    pub leads_advanced: u32,
    pub revenue: Decimal,
    pub message: String,
}

// "Qual é a minha meta de hoje?"
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TodayGoal {
    pub target_leads: u32,
    pub target_stage: String,
    pub message: String,
    pub tip: &'static str,
}

// "Preciso de uma ajuda rápida"
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuickHelp {
    pub description: &'static str,
    pub script: &'static str,
}
