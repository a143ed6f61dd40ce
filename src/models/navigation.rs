// src/models/navigation.rs

use serde::Serialize;

// Identidade fixa do app e da usuária da sessão (não há autenticação).
pub const APP_NAME: &str = "Growth Clinic Hub";
pub const APP_TAGLINE: &str = "Sua clínica em crescimento";
pub const SESSION_USER_NAME: &str = "Dra. Ana Souza";
pub const SESSION_USER_ROLE: &str = "Clínica Estética";

// As páginas do shell. O slug é o id que o menu usa para navegar.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Dashboard,
    Crm,
    Procedures,
    Scripts,
    Analytics,
    Settings,
}

impl Page {
    // Ordem de exibição no menu lateral.
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Crm,
        Page::Procedures,
        Page::Scripts,
        Page::Analytics,
        Page::Settings,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Crm => "crm",
            Page::Procedures => "procedures",
            Page::Scripts => "scripts",
            Page::Analytics => "analytics",
            Page::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Crm => "CRM - Funil",
            Page::Procedures => "Esteira de Procedimentos",
            Page::Scripts => "Scripts de Vendas",
            Page::Analytics => "Relatórios",
            Page::Settings => "Configurações",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.slug() == slug)
    }

    // Título do placeholder "em breve": o slug com a inicial maiúscula.
    pub fn placeholder_title(self) -> String {
        let slug = self.slug();
        let mut chars = slug.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

// Item do menu lateral, pronto para renderizar.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}
