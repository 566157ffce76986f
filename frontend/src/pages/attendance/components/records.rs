use crate::{
    components::empty_state::EmptyState,
    model::{format_clock_time, AttendanceRecord},
    utils::time::format_short_date,
};
use leptos::*;

const HEADER_CLASS: &str = "px-4 py-3 text-left text-xs font-medium text-surface-500 dark:text-surface-400 uppercase tracking-wider";
const MISSING: &str = "—";

#[component]
pub fn RecordTable(
    records: Signal<Vec<AttendanceRecord>>,
    expanded: Signal<Option<u32>>,
    department_of: Callback<String, String>,
    on_toggle: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show
            when=move || records.with(|list| !list.is_empty())
            fallback=|| view! {
                <EmptyState
                    title="No attendance recorded"
                    description="Use Record Attendance to add the first entry."
                />
            }
        >
            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead>
                        <tr class="bg-surface-100 dark:bg-surface-800">
                            <th class=HEADER_CLASS>"Employee"</th>
                            <th class=HEADER_CLASS>"Date"</th>
                            <th class=HEADER_CLASS>"Clock In"</th>
                            <th class=HEADER_CLASS>"Clock Out"</th>
                            <th class=HEADER_CLASS>"Status"</th>
                            <th class=format!("{HEADER_CLASS} text-right")>"Details"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-surface-200 dark:divide-surface-700">
                        <For
                            each=move || records.get()
                            key=|record| record.id
                            children=move |record| {
                                let id = record.id;
                                let department = department_of.call(record.employee_id.clone());
                                let is_expanded = Signal::derive(move || expanded.get() == Some(id));
                                view! {
                                    <RecordRows
                                        record=record
                                        department=department
                                        expanded=is_expanded
                                        on_toggle=on_toggle
                                    />
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[component]
fn RecordRows(
    record: AttendanceRecord,
    department: String,
    expanded: Signal<bool>,
    on_toggle: Callback<u32>,
) -> impl IntoView {
    let id = record.id;
    let initials = record.initials();
    let clock_in = record.clock_in.map(format_clock_time).unwrap_or_else(|| MISSING.into());
    let clock_out = record.clock_out.map(format_clock_time).unwrap_or_else(|| MISSING.into());
    let duration = record
        .duration()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "Not available".into());
    let notes = record
        .notes
        .clone()
        .unwrap_or_else(|| "No notes available".into());
    let status = record.status;

    view! {
        <tr class="hover:bg-surface-50 dark:hover:bg-surface-800/60 transition-colors">
            <td class="px-4 py-4 whitespace-nowrap">
                <div class="flex items-center">
                    <div class="h-8 w-8 rounded-full bg-gradient-to-br from-primary-light to-accent flex items-center justify-center text-white font-medium text-sm">
                        {initials}
                    </div>
                    <div class="ml-3">
                        <div class="text-sm font-medium">{record.employee_name}</div>
                        <div class="text-xs text-surface-500 dark:text-surface-400">{record.employee_id}</div>
                    </div>
                </div>
            </td>
            <td class="px-4 py-4 whitespace-nowrap text-sm">{format_short_date(record.date)}</td>
            <td class="px-4 py-4 whitespace-nowrap text-sm">{clock_in}</td>
            <td class="px-4 py-4 whitespace-nowrap text-sm">{clock_out}</td>
            <td class="px-4 py-4 whitespace-nowrap">
                <span class=format!("badge flex items-center space-x-1 {}", status.badge_class())>
                    <i class=status.icon_class()></i>
                    <span>{status.label()}</span>
                </span>
            </td>
            <td class="px-4 py-4 whitespace-nowrap text-right">
                <button
                    type="button"
                    class="text-surface-500 hover:text-primary dark:text-surface-400 dark:hover:text-primary-light"
                    aria-label="Toggle details"
                    aria-expanded=move || expanded.get().to_string()
                    on:click=move |_| on_toggle.call(id)
                >
                    <i class=move || if expanded.get() { "fas fa-chevron-up" } else { "fas fa-chevron-down" }></i>
                </button>
            </td>
        </tr>
        <Show when=move || expanded.get()>
            <tr>
                <td colspan="6" class="px-4 py-4 bg-surface-50 dark:bg-surface-800/40">
                    <div class="text-sm">
                        <div class="font-medium mb-2">"Additional Details"</div>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            <Detail label="Work Duration" value=duration.clone() />
                            <Detail label="Department" value=department.clone() />
                            <Detail label="Notes" value=notes.clone() />
                        </div>
                    </div>
                </td>
            </tr>
        </Show>
    }
}

#[component]
fn Detail(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <div class="text-surface-500 dark:text-surface-400 text-xs mb-1">{label}</div>
            <div>{value}</div>
        </div>
    }
}
