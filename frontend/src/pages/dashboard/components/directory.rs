use crate::{components::empty_state::EmptyState, model::Employee};
use leptos::*;

#[component]
pub fn DirectorySection(
    employees: Signal<Vec<Employee>>,
    search: Signal<String>,
    on_search: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between mb-4">
                <div>
                    <h2 class="text-xl font-bold">"Employee Directory"</h2>
                    <p class="text-sm text-surface-500 dark:text-surface-400">
                        {move || format!("{} people", employees.with(|list| list.len()))}
                    </p>
                </div>
                <input
                    type="search"
                    class="input-field sm:w-64"
                    placeholder="Search by name, department..."
                    prop:value=move || search.get()
                    on:input=move |ev| on_search.call(event_target_value(&ev))
                />
            </div>
            <Show
                when=move || employees.with(|list| !list.is_empty())
                fallback=|| view! {
                    <EmptyState
                        title="No employees found"
                        description="Try a different search term."
                        icon="fas fa-user-slash"
                    />
                }
            >
                <div class="overflow-x-auto">
                    <table class="w-full">
                        <thead>
                            <tr class="bg-surface-100 dark:bg-surface-800">
                                <th class="px-4 py-3 text-left text-xs font-medium text-surface-500 dark:text-surface-400 uppercase tracking-wider">"Employee"</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-surface-500 dark:text-surface-400 uppercase tracking-wider">"Department"</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-surface-500 dark:text-surface-400 uppercase tracking-wider">"Position"</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-surface-500 dark:text-surface-400 uppercase tracking-wider">"Status"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-surface-200 dark:divide-surface-700">
                            <For
                                each=move || employees.get()
                                key=|employee| employee.id.clone()
                                children=move |employee| view! { <DirectoryRow employee=employee /> }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn DirectoryRow(employee: Employee) -> impl IntoView {
    let initials = employee.initials();
    view! {
        <tr class="hover:bg-surface-50 dark:hover:bg-surface-800/60 transition-colors">
            <td class="px-4 py-4 whitespace-nowrap">
                <div class="flex items-center">
                    <div class="h-8 w-8 rounded-full bg-gradient-to-br from-primary-light to-accent flex items-center justify-center text-white font-medium text-sm">
                        {initials}
                    </div>
                    <div class="ml-3">
                        <div class="text-sm font-medium">{employee.name}</div>
                        <div class="text-xs text-surface-500 dark:text-surface-400">{employee.email}</div>
                    </div>
                </div>
            </td>
            <td class="px-4 py-4 whitespace-nowrap text-sm">{employee.department}</td>
            <td class="px-4 py-4 whitespace-nowrap text-sm">{employee.position}</td>
            <td class="px-4 py-4 whitespace-nowrap">
                <span class=format!("badge {}", employee.status.badge_class())>
                    {employee.status.label()}
                </span>
            </td>
        </tr>
    }
}
