use leptos::*;

use crate::model::{Employee, StatTile};
use crate::pages::dashboard::{repository, utils::filter_employees};

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub tiles: StoredValue<Vec<StatTile>>,
    pub directory: StoredValue<Vec<Employee>>,
    pub search: RwSignal<String>,
    pub visible_employees: Memo<Vec<Employee>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        Self::with_data(repository::stat_tiles(), repository::employee_directory())
    }

    pub fn with_data(tiles: Vec<StatTile>, directory: Vec<Employee>) -> Self {
        let tiles = store_value(tiles);
        let directory = store_value(directory);
        let search = create_rw_signal(String::new());
        let visible_employees = create_memo(move |_| {
            let query = search.get();
            directory.with_value(|all| filter_employees(all, &query))
        });
        Self {
            tiles,
            directory,
            search,
            visible_employees,
        }
    }

    pub fn on_search(&self) -> impl Fn(String) {
        let search = self.search;
        move |value| search.set(value)
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
