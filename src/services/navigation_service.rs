// src/services/navigation_service.rs

use crate::models::navigation::{NavItem, Page};

// O menu lateral: página ativa + estado do menu mobile.
#[derive(Debug, Clone)]
pub struct NavigationService {
    current_page: Page,
    mobile_open: bool,
}

impl NavigationService {
    pub fn new() -> Self {
        Self {
            current_page: Page::Dashboard,
            mobile_open: false,
        }
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    // Navegar também recolhe o menu mobile.
    pub fn change_page(&mut self, page: Page) {
        self.current_page = page;
        self.mobile_open = false;
    }

    // Itens do menu na ordem fixa, com o destaque da página ativa.
    pub fn nav_items(&self) -> Vec<NavItem> {
        Page::ALL
            .iter()
            .map(|&page| NavItem {
                id: page.slug(),
                label: page.label(),
                active: page == self.current_page,
            })
            .collect()
    }
}

impl Default for NavigationService {
    fn default() -> Self {
        Self::new()
    }
}
