#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::model::{Employee, EmploymentStatus};

    pub fn employee(id: &str, name: &str, department: &str) -> Employee {
        Employee {
            id: id.into(),
            name: name.into(),
            email: format!("{}@staffsync.com", name.to_lowercase().replace(' ', ".")),
            department: department.into(),
            position: "Specialist".into(),
            status: EmploymentStatus::Active,
        }
    }

    pub fn small_roster() -> Vec<Employee> {
        vec![
            employee("EMP001", "Alex Johnson", "Engineering"),
            employee("EMP002", "Sarah Williams", "Marketing"),
        ]
    }
}
