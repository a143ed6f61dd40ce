pub mod crm_service;
pub use crm_service::CrmService;
pub mod huddle_service;
pub use huddle_service::HuddleService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod navigation_service;
pub use navigation_service::NavigationService;
