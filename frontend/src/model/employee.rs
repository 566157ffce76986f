#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmploymentStatus {
    Active,
    Onboarding,
    Offboarding,
}

impl EmploymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentStatus::Active => "Active",
            EmploymentStatus::Onboarding => "Onboarding",
            EmploymentStatus::Offboarding => "Offboarding",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            EmploymentStatus::Active => "badge-green",
            EmploymentStatus::Onboarding => "badge-blue",
            EmploymentStatus::Offboarding => "badge-red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub status: EmploymentStatus,
}

impl Employee {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Looks an employee up by id (e.g. `EMP003`).
pub fn find_employee<'a>(directory: &'a [Employee], id: &str) -> Option<&'a Employee> {
    directory.iter().find(|employee| employee.id == id)
}
