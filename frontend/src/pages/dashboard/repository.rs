use crate::model::{Employee, EmploymentStatus, StatTile, TileColor};

fn tile(title: &str, value: &str, change: &str, icon: &str, color: TileColor) -> StatTile {
    StatTile {
        title: title.into(),
        value: value.into(),
        change: change.into(),
        icon: icon.into(),
        color,
    }
}

fn employee(
    id: &str,
    name: &str,
    department: &str,
    position: &str,
    status: EmploymentStatus,
) -> Employee {
    let email = format!(
        "{}@staffsync.com",
        name.to_lowercase().split_whitespace().collect::<Vec<_>>().join(".")
    );
    Employee {
        id: id.into(),
        name: name.into(),
        email,
        department: department.into(),
        position: position.into(),
        status,
    }
}

pub fn stat_tiles() -> Vec<StatTile> {
    vec![
        tile("Total Employees", "248", "+12%", "fas fa-users", TileColor::Primary),
        tile("Present Today", "221", "+3%", "fas fa-user-check", TileColor::Green),
        tile("On Leave", "14", "-2%", "fas fa-umbrella-beach", TileColor::Amber),
        tile("Open Positions", "9", "+4", "fas fa-briefcase", TileColor::Accent),
    ]
}

/// Directory entries; also the roster offered by the attendance form.
pub fn employee_directory() -> Vec<Employee> {
    vec![
        employee("EMP001", "Alex Johnson", "Engineering", "Senior Developer", EmploymentStatus::Active),
        employee("EMP002", "Sarah Williams", "Marketing", "Marketing Manager", EmploymentStatus::Active),
        employee("EMP003", "Michael Chen", "Design", "UI/UX Designer", EmploymentStatus::Onboarding),
        employee("EMP004", "Emily Rodriguez", "HR", "HR Specialist", EmploymentStatus::Active),
        employee("EMP005", "David Kim", "Finance", "Financial Analyst", EmploymentStatus::Offboarding),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn directory_ids_are_unique() {
        let directory = employee_directory();
        let ids: HashSet<&str> = directory.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), directory.len());
    }

    #[test]
    fn emails_are_derived_from_names() {
        let directory = employee_directory();
        assert_eq!(directory[0].email, "alex.johnson@staffsync.com");
        assert_eq!(directory[3].email, "emily.rodriguez@staffsync.com");
    }

    #[test]
    fn four_stat_tiles() {
        let tiles = stat_tiles();
        assert_eq!(tiles.len(), 4);
        assert!(tiles.iter().any(|t| t.is_negative_change()));
    }
}
