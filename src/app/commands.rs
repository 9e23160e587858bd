use crate::config::cli::{BookArgs, Command};
use crate::config::AppConfig;
use crate::core::booking::{resolve_company_id, BookingData, BookingForm};
use crate::core::catalog::ServiceCatalog;
use crate::core::filters::services_for_employee;
use crate::core::sections::{
    render_state, AddressSection, FooterSection, HeaderSection, Render, WelcomeSection,
};
use crate::core::time_slots::generate_time_slots_every;
use crate::domain::ports::{ConfigProvider, Notifier, ReservationApi};
use crate::utils::error::{BookingError, Result};
use chrono::NaiveDate;

const NO_COMPANIES: &str = "No companies found";
const BOOKING_UNAVAILABLE: &str = "Booking is unavailable right now";

/// Runs one CLI command and returns the text to print.
pub async fn run(
    command: &Command,
    config: &AppConfig,
    api: &dyn ReservationApi,
    notifier: &dyn Notifier,
    today: NaiveDate,
) -> Result<String> {
    match command {
        Command::Companies => companies(api).await,
        Command::Welcome => {
            let header = HeaderSection::load(api, config.company_id()).await;
            let welcome =
                WelcomeSection::load(api, notifier, config.company_id(), &config.map).await;
            Ok(format!(
                "{}\n\n{}",
                header.render(),
                render_state(&welcome, NO_COMPANIES)
            ))
        }
        Command::Services { category } => services(config, api, *category).await,
        Command::Branches { index, embed } => {
            let mut section =
                AddressSection::load(api, notifier, config.company_id(), &config.map).await;
            if let Some(address) = section.data.as_mut() {
                address.go_to(index.saturating_sub(1));
            }
            if *embed {
                if let Some((_, map)) = section.data().and_then(|address| address.current()) {
                    return Ok(map.embed_html());
                }
            }
            Ok(render_state(&section, "No branches found"))
        }
        Command::Contacts => {
            let footer = FooterSection::load(api, notifier, config.company_id()).await;
            Ok(render_state(&footer, "Contacts are unavailable"))
        }
        Command::Slots { branch } => slots(config, api, *branch).await,
        Command::Options {
            service,
            branch,
            specialist,
        } => options(config, api, today, *service, *branch, *specialist).await,
        Command::Book(args) => book(config, api, notifier, today, args).await,
    }
}

async fn companies(api: &dyn ReservationApi) -> Result<String> {
    let companies = api.get_companies().await.unwrap_or_default();
    if companies.is_empty() {
        return Ok(NO_COMPANIES.to_string());
    }

    let lines: Vec<String> = companies
        .iter()
        .map(|c| {
            let status = if c.is_active { "" } else { " (inactive)" };
            format!("#{:<4} {}{}", c.id, c.name, status)
        })
        .collect();
    Ok(lines.join("\n"))
}

async fn services(
    config: &AppConfig,
    api: &dyn ReservationApi,
    category: Option<u64>,
) -> Result<String> {
    let Some(company_id) = resolve_company_id(api, config.company_id()).await else {
        return Ok(NO_COMPANIES.to_string());
    };

    let mut catalog = ServiceCatalog::load(api, company_id).await;
    if let Some(category) = category {
        if !catalog.select_category(category) {
            return Err(BookingError::InvalidSelection {
                field: "category".to_string(),
                reason: format!("category {} does not exist", category),
            });
        }
    }
    Ok(catalog.render())
}

async fn slots(config: &AppConfig, api: &dyn ReservationApi, branch: u64) -> Result<String> {
    let Some(data) = BookingData::load(api, config.company_id()).await else {
        return Ok(BOOKING_UNAVAILABLE.to_string());
    };
    let Some(branch) = data.branch(branch) else {
        return Err(BookingError::InvalidSelection {
            field: "branch".to_string(),
            reason: format!("branch {} is not open for booking", branch),
        });
    };

    let slots = generate_time_slots_every(
        &branch.opening_time,
        &branch.closing_time,
        config.slot_step_minutes(),
    )?;
    if slots.is_empty() {
        return Ok(format!("{}: no available time", branch.name));
    }
    Ok(format!("{}: {}", branch.name, slots.join(" ")))
}

async fn options(
    config: &AppConfig,
    api: &dyn ReservationApi,
    today: NaiveDate,
    service: Option<u64>,
    branch: Option<u64>,
    specialist: Option<u64>,
) -> Result<String> {
    let Some(data) = BookingData::load(api, config.company_id()).await else {
        return Ok(BOOKING_UNAVAILABLE.to_string());
    };

    let mut form = BookingForm::new(today, config.slot_step_minutes());
    let mut lines = Vec::new();

    let Some(service) = service else {
        lines.push("Services:".to_string());
        for s in &data.services {
            lines.push(format!("  #{:<4} {} ({} ₽)", s.id, s.name, s.price));
        }
        if let Some(specialist) = specialist {
            lines.push(format!("Services offered by specialist #{}:", specialist));
            for s in services_for_employee(&data.services, &data.employees, specialist) {
                lines.push(format!("  #{:<4} {}", s.id, s.name));
            }
        }
        return Ok(lines.join("\n"));
    };
    form.select_service(service, &data)?;

    lines.push("Branches:".to_string());
    let branches = form.available_branches(&data);
    if branches.is_empty() {
        lines.push("  No branch offers this service".to_string());
    }
    for b in &branches {
        lines.push(format!("  #{:<4} {} ({})", b.id, b.name, b.address));
    }

    if let Some(branch) = branch {
        form.select_branch(branch, &data)?;

        lines.push("Specialists:".to_string());
        for e in form.available_specialists(&data) {
            lines.push(format!("  #{:<4} {} ({})", e.id, e.full_name, e.grade));
        }
        lines.push(format!("Times: {}", form.available_times(&data)?.join(" ")));
    }

    Ok(lines.join("\n"))
}

async fn book(
    config: &AppConfig,
    api: &dyn ReservationApi,
    notifier: &dyn Notifier,
    today: NaiveDate,
    args: &BookArgs,
) -> Result<String> {
    let data = BookingData::load(api, config.company_id())
        .await
        .ok_or_else(|| BookingError::SubmissionFailed {
            message: "booking data could not be loaded".to_string(),
        })?;

    let mut form = BookingForm::new(today, config.slot_step_minutes());
    form.select_service(args.service, &data)?;
    form.select_branch(args.branch, &data)?;
    form.select_specialist(args.specialist, &data)?;
    if args.date.is_some() {
        form.set_date(args.date);
    }
    form.select_time(&args.time, &data)?;
    form.full_name = args.full_name.clone();
    form.phone = args.phone.clone();
    form.telegram = args.telegram.clone().unwrap_or_default();

    let date = form.date().unwrap_or(today);
    form.submit(api, notifier, today).await?;

    let specialist = data
        .employee(args.specialist)
        .map(|e| e.full_name.as_str())
        .unwrap_or_default();
    let branch = data
        .branch(args.branch)
        .map(|b| b.name.as_str())
        .unwrap_or_default();
    Ok(format!(
        "Booked {} at {} with {} ({})",
        date.format("%Y-%m-%d"),
        args.time,
        specialist,
        branch
    ))
}
