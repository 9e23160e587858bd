use crate::domain::model::{BarberService, CategoryId, CompanyId, ServiceCategory};
use crate::domain::ports::{CategoryQuery, ReservationApi, ServiceQuery};

/// Active services grouped by category, with one category in focus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceCatalog {
    categories: Vec<ServiceCategory>,
    services: Vec<BarberService>,
    selected: Option<CategoryId>,
}

impl ServiceCatalog {
    pub fn new(categories: Vec<ServiceCategory>, services: Vec<BarberService>) -> Self {
        let selected = categories.first().map(|c| c.id);
        Self {
            categories,
            services,
            selected,
        }
    }

    pub async fn load(api: &dyn ReservationApi, company_id: CompanyId) -> Self {
        let category_query = CategoryQuery {
            is_active: Some(true),
            ..Default::default()
        };
        let service_query = ServiceQuery {
            is_active: Some(true),
            ..Default::default()
        };

        let (categories, services) = tokio::join!(
            api.get_service_categories_by_company(company_id, &category_query),
            api.get_services_by_company(company_id, &service_query),
        );

        Self::new(categories.unwrap_or_default(), services.unwrap_or_default())
    }

    pub fn categories(&self) -> &[ServiceCategory] {
        &self.categories
    }

    /// Focuses `category`. Unknown ids leave the selection untouched.
    pub fn select_category(&mut self, category: CategoryId) -> bool {
        if self.categories.iter().any(|c| c.id == category) {
            self.selected = Some(category);
            true
        } else {
            false
        }
    }

    pub fn current_category(&self) -> Option<&ServiceCategory> {
        let selected = self.selected?;
        self.categories.iter().find(|c| c.id == selected)
    }

    pub fn visible_services(&self) -> Vec<&BarberService> {
        match self.selected {
            Some(selected) => self
                .services
                .iter()
                .filter(|s| s.category == selected)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn render(&self) -> String {
        if self.categories.is_empty() {
            return "Our services\n  No services available yet.".to_string();
        }

        let mut lines = vec!["Our services".to_string()];
        let tabs: Vec<String> = self
            .categories
            .iter()
            .map(|c| {
                if Some(c.id) == self.selected {
                    format!("[{}]", c.name)
                } else {
                    c.name.clone()
                }
            })
            .collect();
        lines.push(format!("  {}", tabs.join("  ")));

        let services = self.visible_services();
        if services.is_empty() {
            lines.push("  No services in this category.".to_string());
        }
        for service in services {
            let mut line = format!("  #{:<4} {:<32} {} ₽", service.id, service.name, service.price);
            if let Some(duration) = service.duration.as_deref().filter(|d| !d.is_empty()) {
                line.push_str(&format!("  ({})", duration));
            }
            lines.push(line);
            if let Some(description) = service.description.as_deref().filter(|d| !d.is_empty()) {
                lines.push(format!("        {}", description));
            }
        }
        lines.join("\n")
    }
}
