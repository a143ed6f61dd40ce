// src/services/dashboard_service.rs

use chrono::{Datelike, NaiveDate, Utc};

use crate::models::dashboard::{
    ActivityEntry, ActivityKind, DashboardOverview, QuickStat, ScriptCategory, ScriptEntry,
};

// Monta a Visão Geral (página inicial) e a Biblioteca de Scripts.
// Os números dos cards e o feed são dados de amostra da sessão de
// demonstração, não analytics calculados do funil.
#[derive(Debug, Clone, Default)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    pub fn overview(&self) -> DashboardOverview {
        self.overview_on(Utc::now().date_naive())
    }

    // Separado para os testes poderem fixar a data.
    pub fn overview_on(&self, today: NaiveDate) -> DashboardOverview {
        DashboardOverview {
            greeting: "Bem-vinda, Dra. Ana! 👋".to_string(),
            date_line: format!(
                "Aqui está o resumo da sua clínica hoje, {}",
                long_date_pt(today)
            ),
            quick_stats: sample_quick_stats(),
            recent_activity: sample_recent_activity(),
        }
    }

    pub fn script_library(&self) -> Vec<ScriptCategory> {
        vec![
            ScriptCategory {
                category: "Primeira Abordagem",
                scripts: vec![
                    ScriptEntry { title: "Script de Boas-vindas WhatsApp", status: "Em breve" },
                    ScriptEntry { title: "E-mail de Apresentação", status: "Em breve" },
                    ScriptEntry { title: "Ligação de Qualificação", status: "Em breve" },
                ],
            },
            ScriptCategory {
                category: "Reativação",
                scripts: vec![
                    ScriptEntry { title: "Reativar Lead Frio", status: "Em breve" },
                    ScriptEntry { title: "Oferta Especial", status: "Em breve" },
                    ScriptEntry { title: "Urgência de Agendamento", status: "Em breve" },
                ],
            },
        ]
    }
}

// Data por extenso em pt-BR, no formato da saudação do dashboard.
// O chrono só formata em inglês sem feature extra, então a tradução
// fica numa tabela aqui mesmo.
fn long_date_pt(date: NaiveDate) -> String {
    const WEEKDAYS: [&str; 7] = [
        "segunda-feira",
        "terça-feira",
        "quarta-feira",
        "quinta-feira",
        "sexta-feira",
        "sábado",
        "domingo",
    ];
    const MONTHS: [&str; 12] = [
        "janeiro",
        "fevereiro",
        "março",
        "abril",
        "maio",
        "junho",
        "julho",
        "agosto",
        "setembro",
        "outubro",
        "novembro",
        "dezembro",
    ];

    format!(
        "{}, {} de {} de {}",
        WEEKDAYS[date.weekday().num_days_from_monday() as usize],
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

fn sample_quick_stats() -> Vec<QuickStat> {
    vec![
        QuickStat {
            title: "Leads Ativos",
            value: "23",
            note: "+12% em relação à semana passada",
        },
        QuickStat {
            title: "Receita Mensal",
            value: "R$ 45.2k",
            note: "+23% em relação ao mês anterior",
        },
        QuickStat {
            title: "Taxa de Conversão",
            value: "67%",
            note: "+5% em relação à semana passada",
        },
        QuickStat {
            title: "Agendamentos Hoje",
            value: "8",
            note: "Próximo às 14:30",
        },
    ]
}

fn sample_recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            action: "Lead movido",
            details: "Maria Silva → Agendado",
            time: "2 min atrás",
            kind: ActivityKind::Move,
        },
        ActivityEntry {
            action: "Novo lead",
            details: "João Santos - Botox",
            time: "15 min atrás",
            kind: ActivityKind::New,
        },
        ActivityEntry {
            action: "Cliente finalizado",
            details: "Ana Costa - R$ 2.000",
            time: "1h atrás",
            kind: ActivityKind::Success,
        },
        ActivityEntry {
            action: "Upsell realizado",
            details: "Paula Lima - +R$ 800",
            time: "3h atrás",
            kind: ActivityKind::Upsell,
        },
    ]
}
