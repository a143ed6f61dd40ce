// src/models/dashboard.rs

use serde::Serialize;

use crate::models::crm::StageColumn;

// 1. Resumo do Dia (Os Cards do Topo)
// Números de vitrine da sessão de demonstração. Não são analytics de
// verdade: o valor já chega formatado como o card exibe.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuickStat {
    pub title: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

// 2. Feed de Atividades Recentes
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Move,
    New,
    Success,
    Upsell,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub action: &'static str,
    pub details: &'static str,
    pub time: &'static str,
    pub kind: ActivityKind,
}

// 3. Visão Geral montada (a página inicial)
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub greeting: String,
    pub date_line: String,
    pub quick_stats: Vec<QuickStat>,
    pub recent_activity: Vec<ActivityEntry>,
}

// 4. Biblioteca de Scripts (placeholder)
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScriptEntry {
    pub title: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScriptCategory {
    pub category: &'static str,
    pub scripts: Vec<ScriptEntry>,
}

// 5. O que o shell manda renderizar para cada página
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "page", content = "data")]
pub enum PageContent {
    Overview(DashboardOverview),
    Kanban(Vec<StageColumn>),
    Scripts(Vec<ScriptCategory>),
    ComingSoon { title: String },
}
