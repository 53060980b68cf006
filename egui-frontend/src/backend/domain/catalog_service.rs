//! Service catalog domain logic.
//!
//! Holds the static list of bookable services and the filters used by the
//! service selection screen. Everything here is pure; the catalog never
//! changes while the app runs.

use log::debug;
use shared::{Service, ServiceFilter, ServiceType};

/// Catalog of bookable services
#[derive(Clone)]
pub struct CatalogService {
    services: Vec<Service>,
}

impl CatalogService {
    pub fn new() -> Self {
        Self {
            services: default_services(),
        }
    }

    /// Services matching the selected filter tab, in catalog order
    pub fn list_services(&self, filter: ServiceFilter) -> Vec<Service> {
        let services: Vec<Service> = self
            .services
            .iter()
            .filter(|service| filter.matches(service))
            .cloned()
            .collect();
        debug!("Catalog filter {:?} matched {} services", filter, services.len());
        services
    }

    pub fn get_service(&self, id: &str) -> Option<Service> {
        self.services.iter().find(|service| service.id == id).cloned()
    }

    /// Price badge text: "FREE" for free services, otherwise "$75.00"
    pub fn format_price(service: &Service) -> String {
        match service.charge() {
            Some(price) => format!("${:.2}", price),
            None => "FREE".to_string(),
        }
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_services() -> Vec<Service> {
    vec![
        Service {
            id: "1".to_string(),
            name: "Initial Consultation".to_string(),
            duration: "30 min".to_string(),
            price: Some(0.0),
            description: "Free introductory meeting to discuss your needs".to_string(),
            service_type: ServiceType::Free,
        },
        Service {
            id: "2".to_string(),
            name: "Standard Session".to_string(),
            duration: "60 min".to_string(),
            price: Some(75.0),
            description: "Regular appointment session".to_string(),
            service_type: ServiceType::Paid,
        },
        Service {
            id: "3".to_string(),
            name: "Extended Session".to_string(),
            duration: "90 min".to_string(),
            price: Some(120.0),
            description: "In-depth consultation for complex issues".to_string(),
            service_type: ServiceType::Paid,
        },
        Service {
            id: "4".to_string(),
            name: "Quick Follow-up".to_string(),
            duration: "15 min".to_string(),
            price: Some(0.0),
            description: "Brief check-in after previous appointment".to_string(),
            service_type: ServiceType::Free,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_all_services() {
        let catalog = CatalogService::new();
        let services = catalog.list_services(ServiceFilter::All);
        assert_eq!(services.len(), 4);
        assert_eq!(services[0].name, "Initial Consultation");
    }

    #[test]
    fn test_filters_partition_catalog() {
        let catalog = CatalogService::new();
        let free = catalog.list_services(ServiceFilter::Free);
        let paid = catalog.list_services(ServiceFilter::Paid);

        assert_eq!(free.len(), 2);
        assert_eq!(paid.len(), 2);
        assert!(free.iter().all(|s| !s.requires_payment()));
        assert!(paid.iter().all(|s| s.requires_payment()));
    }

    #[test]
    fn test_get_service() {
        let catalog = CatalogService::new();
        assert_eq!(catalog.get_service("3").unwrap().name, "Extended Session");
        assert!(catalog.get_service("99").is_none());
    }

    #[test]
    fn test_format_price() {
        let catalog = CatalogService::new();
        assert_eq!(CatalogService::format_price(&catalog.get_service("1").unwrap()), "FREE");
        assert_eq!(CatalogService::format_price(&catalog.get_service("2").unwrap()), "$75.00");
    }
}
