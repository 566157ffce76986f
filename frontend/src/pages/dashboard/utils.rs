use crate::model::{Employee, StatTile};

/// Case-insensitive match on name, department, position or id.
pub fn filter_employees(directory: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return directory.to_vec();
    }
    directory
        .iter()
        .filter(|employee| {
            [
                &employee.name,
                &employee.department,
                &employee.position,
                &employee.id,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

pub fn change_class(tile: &StatTile) -> &'static str {
    if tile.is_negative_change() {
        "text-red-500"
    } else {
        "text-green-500"
    }
}
