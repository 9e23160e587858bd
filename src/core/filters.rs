use crate::domain::model::{BarberService, Branch, BranchId, Employee, EmployeeId, ServiceId};
use std::collections::HashSet;

/// Branches where at least one employee offers `selected_service`.
///
/// With nothing selected every branch stays available.
pub fn filter_branches(
    branches: &[Branch],
    employees: &[Employee],
    selected_service: Option<ServiceId>,
) -> Vec<Branch> {
    let service = match selected_service {
        Some(service) if !branches.is_empty() => service,
        _ => return branches.to_vec(),
    };

    let staffed: HashSet<BranchId> = employees
        .iter()
        .filter(|employee| employee.offers(service))
        .map(|employee| employee.branch)
        .collect();

    branches
        .iter()
        .filter(|branch| staffed.contains(&branch.id))
        .cloned()
        .collect()
}

/// Employees at `selected_branch` who offer `selected_service`. Empty until both are chosen.
pub fn filter_employees(
    employees: &[Employee],
    selected_service: Option<ServiceId>,
    selected_branch: Option<BranchId>,
) -> Vec<Employee> {
    let (Some(service), Some(branch)) = (selected_service, selected_branch) else {
        return Vec::new();
    };

    employees
        .iter()
        .filter(|employee| employee.branch == branch && employee.offers(service))
        .cloned()
        .collect()
}

pub fn services_for_employee(
    services: &[BarberService],
    employees: &[Employee],
    employee_id: EmployeeId,
) -> Vec<BarberService> {
    let Some(employee) = employees.iter().find(|e| e.id == employee_id) else {
        return Vec::new();
    };

    services
        .iter()
        .filter(|service| employee.offers(service.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(id: BranchId) -> Branch {
        Branch {
            id,
            name: format!("Branch {}", id),
            is_active: true,
            ..Default::default()
        }
    }

    fn employee(id: EmployeeId, branch: BranchId, services: &[ServiceId]) -> Employee {
        Employee {
            id,
            full_name: format!("Barber {}", id),
            branch,
            services: services.to_vec(),
            is_active: true,
            ..Default::default()
        }
    }

    fn roster() -> Vec<Employee> {
        vec![
            employee(10, 1, &[100, 101]),
            employee(11, 2, &[101]),
            employee(12, 1, &[102]),
        ]
    }

    #[test]
    fn test_no_service_keeps_every_branch() {
        let branches = vec![branch(1), branch(2), branch(3)];
        assert_eq!(filter_branches(&branches, &roster(), None), branches);
    }

    #[test]
    fn test_service_narrows_branches_in_order() {
        let branches = vec![branch(1), branch(2), branch(3)];
        let ids: Vec<BranchId> = filter_branches(&branches, &roster(), Some(101))
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_unstaffed_service_yields_no_branches() {
        let branches = vec![branch(1), branch(2)];
        assert!(filter_branches(&branches, &roster(), Some(999)).is_empty());
    }

    #[test]
    fn test_employees_need_both_selections() {
        assert!(filter_employees(&roster(), Some(101), None).is_empty());
        assert!(filter_employees(&roster(), None, Some(1)).is_empty());
    }

    #[test]
    fn test_employees_match_branch_and_service() {
        let ids: Vec<EmployeeId> = filter_employees(&roster(), Some(101), Some(1))
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![10]);
    }

    #[test]
    fn test_services_for_employee() {
        let services = vec![
            BarberService {
                id: 100,
                ..Default::default()
            },
            BarberService {
                id: 102,
                ..Default::default()
            },
        ];
        let offered = services_for_employee(&services, &roster(), 10);
        assert_eq!(offered.len(), 1);
        assert_eq!(offered[0].id, 100);
        assert!(services_for_employee(&services, &roster(), 42).is_empty());
    }
}
