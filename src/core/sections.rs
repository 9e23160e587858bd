//! Read-only views: header, welcome block, branch carousel and footer.
//!
//! Each section loads through [`ApiData`] and renders to plain text. A missing
//! or failed load renders a placeholder instead of an error.

use crate::core::api_data::ApiData;
use crate::core::booking::resolve_company_id;
use crate::core::map_widget::{MapSettings, MapWidget};
use crate::domain::model::{Branch, Company, CompanyId};
use crate::domain::ports::{Notifier, ReservationApi};
use crate::utils::error::Result;

pub const FALLBACK_BRAND: &str = "Barbershop";
pub const FALLBACK_HEADLINE: &str = "Legendary barbershop in Saint Petersburg!";

pub trait Render {
    fn render(&self) -> String;
}

/// Renders a loaded section, or the placeholder for its current state.
pub fn render_state<T: Render>(state: &ApiData<T>, empty_text: &str) -> String {
    if state.loading {
        return "Loading...".to_string();
    }
    if let Some(error) = &state.error {
        return error.clone();
    }
    match state.data() {
        Some(view) => view.render(),
        None => empty_text.to_string(),
    }
}

/// First five characters of an API time, so "09:00:00" shows as "09:00".
fn short_time(value: &str) -> String {
    value.chars().take(5).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct BranchInfo {
    pub name: String,
    pub address: String,
    pub hours: String,
    pub phone: Option<String>,
}

impl BranchInfo {
    pub fn new(branch: &Branch, show_phone: bool) -> Self {
        let or = |value: &str, fallback: &str| {
            if value.trim().is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };

        Self {
            name: or(&branch.name, "Location"),
            address: or(&branch.address, "Not specified"),
            hours: format!(
                "{}-{}",
                short_time(&branch.opening_time),
                short_time(&branch.closing_time)
            ),
            phone: (show_phone && !branch.phone_number_main.is_empty())
                .then(|| branch.phone_number_main.clone()),
        }
    }
}

impl Render for BranchInfo {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("📍 {}", self.name),
            format!("   {}", self.address),
            format!("🕒 Opening hours: {}", self.hours),
        ];
        if let Some(phone) = &self.phone {
            lines.push(format!("📞 {}", phone));
        }
        lines.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSection {
    pub brand: String,
}

impl HeaderSection {
    /// Brands the configured company, or the first listed one.
    pub async fn load(api: &dyn ReservationApi, company: Option<CompanyId>) -> Self {
        let name = match company {
            Some(id) => api.get_company_details(id).await.map(|c| c.name),
            None => api
                .get_companies()
                .await
                .and_then(|companies| companies.into_iter().next())
                .map(|c| c.name),
        };
        let brand = name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_BRAND.to_string());
        Self { brand }
    }
}

impl Render for HeaderSection {
    fn render(&self) -> String {
        format!("✂  {}  |  Services · Book · Contacts", self.brand)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WelcomeSection {
    pub company: Company,
    pub branch: Option<BranchInfo>,
    pub map: Option<MapWidget>,
}

impl WelcomeSection {
    /// `None` data means the API listed no companies.
    pub async fn load(
        api: &dyn ReservationApi,
        notifier: &dyn Notifier,
        company: Option<CompanyId>,
        map: &MapSettings,
    ) -> ApiData<Self> {
        ApiData::load(
            move || async move {
                let Some(company_id) = resolve_company_id(api, company).await else {
                    return Ok(None);
                };
                let (details, branches) = tokio::join!(
                    api.get_company_details(company_id),
                    api.get_branches_by_company(company_id),
                );
                let Some(company) = details else {
                    return Ok(None);
                };
                Self::build(company, branches.unwrap_or_default(), map).map(Some)
            },
            notifier,
        )
        .await
    }

    fn build(company: Company, branches: Vec<Branch>, map: &MapSettings) -> Result<Self> {
        let main = branches
            .iter()
            .find(|b| b.is_active && b.is_main)
            .or_else(|| branches.first());

        let widget = match main {
            Some(branch) if !branch.address.is_empty() => {
                Some(MapWidget::for_address(&branch.address, map)?)
            }
            _ => None,
        };

        Ok(Self {
            company,
            branch: main.map(|b| BranchInfo::new(b, true)),
            map: widget,
        })
    }
}

impl Render for WelcomeSection {
    fn render(&self) -> String {
        let mut lines = vec![format!("Welcome to {}", self.company.name)];
        if self.company.headline.trim().is_empty() {
            lines.push(FALLBACK_HEADLINE.to_string());
        } else {
            lines.push(self.company.headline.clone());
        }
        if !self.company.ya_grade.is_empty() {
            lines.push(format!("⭐ Yandex rating: {}", self.company.ya_grade));
        }
        if let Some(branch) = &self.branch {
            lines.push(String::new());
            lines.push(branch.render());
        }
        if let Some(map) = &self.map {
            lines.push(format!("🗺  {}", map.iframe_src));
        }
        lines.join("\n")
    }
}

/// Active branches shown one at a time, each with its own map.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressSection {
    branches: Vec<Branch>,
    maps: Vec<MapWidget>,
    current: usize,
}

impl AddressSection {
    pub fn new(branches: Vec<Branch>, map: &MapSettings) -> Result<Self> {
        let branches: Vec<Branch> = branches.into_iter().filter(|b| b.is_active).collect();
        let maps = branches
            .iter()
            .map(|b| MapWidget::for_address(&b.address, map))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            branches,
            maps,
            current: 0,
        })
    }

    pub async fn load(
        api: &dyn ReservationApi,
        notifier: &dyn Notifier,
        company: Option<CompanyId>,
        map: &MapSettings,
    ) -> ApiData<Self> {
        ApiData::load(
            move || async move {
                let Some(company_id) = resolve_company_id(api, company).await else {
                    return Ok(None);
                };
                match api.get_branches_by_company(company_id).await {
                    Some(branches) => Self::new(branches, map).map(Some),
                    None => Ok(None),
                }
            },
            notifier,
        )
        .await
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<(&Branch, &MapWidget)> {
        Some((self.branches.get(self.current)?, self.maps.get(self.current)?))
    }

    pub fn next_slide(&mut self) {
        if !self.is_empty() {
            self.current = (self.current + 1) % self.len();
        }
    }

    pub fn prev_slide(&mut self) {
        if !self.is_empty() {
            self.current = if self.current == 0 {
                self.len() - 1
            } else {
                self.current - 1
            };
        }
    }

    /// Jumps to `index`, wrapping past the end.
    pub fn go_to(&mut self, index: usize) {
        if !self.is_empty() {
            self.current = index % self.len();
        }
    }
}

impl Render for AddressSection {
    fn render(&self) -> String {
        let Some((branch, map)) = self.current() else {
            return "No branches found".to_string();
        };
        let mut lines = vec![
            format!("Our branches ({}/{})", self.current + 1, self.len()),
            BranchInfo::new(branch, true).render(),
        ];
        if !branch.landmark.is_empty() {
            lines.push(format!("   Landmark: {}", branch.landmark));
        }
        lines.push(format!("🗺  {}", map.iframe_src));
        lines.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterSection {
    pub company: Company,
}

impl FooterSection {
    pub async fn load(
        api: &dyn ReservationApi,
        notifier: &dyn Notifier,
        company: Option<CompanyId>,
    ) -> ApiData<Self> {
        ApiData::load(
            move || async move {
                let Some(company_id) = resolve_company_id(api, company).await else {
                    return Ok(None);
                };
                Ok(api
                    .get_company_details(company_id)
                    .await
                    .map(|company| Self { company }))
            },
            notifier,
        )
        .await
    }

    /// Non-empty contact links as (label, value) pairs.
    pub fn contacts(&self) -> Vec<(&'static str, &str)> {
        let c = &self.company;
        [
            ("Email", c.email.as_str()),
            ("Instagram", c.link_inst.as_str()),
            ("VK", c.link_vk.as_str()),
            ("Telegram", c.link_tg.as_str()),
            ("WhatsApp", c.link_whatsapp.as_str()),
            ("Facebook", c.link_fb.as_str()),
            ("YouTube", c.link_youtube.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect()
    }
}

impl Render for FooterSection {
    fn render(&self) -> String {
        let mut lines = vec![format!("{} · Contacts", self.company.name)];
        for (label, value) in self.contacts() {
            lines.push(format!("  {:<10} {}", label, value));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(id: u64, address: &str, active: bool) -> Branch {
        Branch {
            id,
            name: format!("Branch {}", id),
            address: address.to_string(),
            opening_time: "09:00:00".to_string(),
            closing_time: "21:00:00".to_string(),
            phone_number_main: "+79990000000".to_string(),
            is_active: active,
            ..Default::default()
        }
    }

    #[test]
    fn test_branch_info_fallbacks_and_hours() {
        let info = BranchInfo::new(&Branch::default(), true);
        assert_eq!(info.name, "Location");
        assert_eq!(info.address, "Not specified");
        assert_eq!(info.hours, "-");
        assert!(info.phone.is_none());

        let info = BranchInfo::new(&branch(1, "Main st 1", true), false);
        assert_eq!(info.hours, "09:00-21:00");
        assert!(info.phone.is_none());
    }

    #[test]
    fn test_carousel_wraps_both_ways() {
        let mut section = AddressSection::new(
            vec![
                branch(1, "A", true),
                branch(2, "B", false),
                branch(3, "C", true),
            ],
            &MapSettings::default(),
        )
        .unwrap();

        assert_eq!(section.len(), 2);
        section.prev_slide();
        assert_eq!(section.current().map(|(b, _)| b.id), Some(3));
        section.next_slide();
        assert_eq!(section.current_index(), 0);
        section.go_to(5);
        assert_eq!(section.current_index(), 1);
    }

    #[test]
    fn test_empty_carousel_renders_placeholder() {
        let mut section = AddressSection::new(vec![], &MapSettings::default()).unwrap();
        section.next_slide();
        assert_eq!(section.render(), "No branches found");
    }

    #[test]
    fn test_footer_skips_blank_links() {
        let footer = FooterSection {
            company: Company {
                name: "Sharp".to_string(),
                email: "hi@sharp.example".to_string(),
                link_tg: "https://t.me/sharp".to_string(),
                link_fb: " ".to_string(),
                ..Default::default()
            },
        };
        let labels: Vec<&str> = footer.contacts().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Email", "Telegram"]);
    }

    #[test]
    fn test_render_state_placeholders() {
        let pending: ApiData<HeaderSection> = ApiData::pending();
        assert_eq!(render_state(&pending, "none"), "Loading...");
        let empty: ApiData<HeaderSection> = ApiData::ready(None);
        assert_eq!(render_state(&empty, "No companies found"), "No companies found");
        let ready = ApiData::ready(Some(HeaderSection {
            brand: "Sharp".to_string(),
        }));
        assert!(render_state(&ready, "none").contains("Sharp"));
    }

    #[test]
    fn test_welcome_prefers_active_main_branch() {
        let mut main = branch(2, "Main st 2", true);
        main.is_main = true;
        let welcome = WelcomeSection::build(
            Company {
                name: "Sharp".to_string(),
                ..Default::default()
            },
            vec![branch(1, "Side st 1", true), main],
            &MapSettings::default(),
        )
        .unwrap();

        assert_eq!(welcome.branch.as_ref().map(|b| b.name.as_str()), Some("Branch 2"));
        assert!(welcome.render().contains(FALLBACK_HEADLINE));
        assert!(welcome.map.unwrap().iframe_src.contains("text=Main+st+2"));
    }
}
