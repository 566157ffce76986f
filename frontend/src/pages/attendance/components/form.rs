use crate::{
    components::{
        common::{Button, ButtonVariant},
        forms::{input_class, FieldError, FormLabel},
    },
    model::Employee,
    pages::attendance::utils::{AttendanceFormState, FormField},
};
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    *,
};

#[component]
pub fn RecordForm(
    form: AttendanceFormState,
    roster: StoredValue<Vec<Employee>>,
    employee_error: Signal<Option<String>>,
    date_error: Signal<Option<String>>,
    clock_in_error: Signal<Option<String>>,
    clock_out_error: Signal<Option<String>>,
    on_input: Callback<(FormField, String)>,
    on_submit: Callback<SubmitEvent>,
    on_cancel: Callback<MouseEvent>,
) -> impl IntoView {
    let time_input = move |field: FormField, label: &'static str, error: Signal<Option<String>>| {
        let value = form.signal(field);
        view! {
            <div>
                <FormLabel text=label for_id=field.input_id() />
                <input
                    id=field.input_id()
                    type="time"
                    class=move || input_class(error.with(Option::is_some))
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.call((field, event_target_value(&ev)))
                />
                <FieldError message=error />
            </div>
        }
    };

    view! {
        <div class="mb-6 p-4 border border-surface-200 dark:border-surface-700 rounded-lg bg-surface-50 dark:bg-surface-800">
            <h3 class="text-lg font-medium mb-4">"Record New Attendance"</h3>
            <form on:submit=move |ev| on_submit.call(ev) novalidate=true>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-4">
                    <div>
                        <FormLabel text="Employee" for_id=FormField::Employee.input_id() />
                        <select
                            id=FormField::Employee.input_id()
                            class=move || input_class(employee_error.with(Option::is_some))
                            prop:value=move || form.employee_id.get()
                            on:change=move |ev| on_input.call((FormField::Employee, event_target_value(&ev)))
                        >
                            <option value="">"Select Employee"</option>
                            {roster.with_value(|roster| {
                                roster
                                    .iter()
                                    .map(|employee| {
                                        let id = employee.id.clone();
                                        let selected_id = id.clone();
                                        view! {
                                            <option
                                                value=id
                                                selected=move || form.employee_id.get() == selected_id
                                            >
                                                {employee.name.clone()}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            })}
                        </select>
                        <FieldError message=employee_error />
                    </div>
                    <div>
                        <FormLabel text="Date" for_id=FormField::Date.input_id() />
                        <input
                            id=FormField::Date.input_id()
                            type="date"
                            class=move || input_class(date_error.with(Option::is_some))
                            prop:value=move || form.date.get()
                            on:input=move |ev| on_input.call((FormField::Date, event_target_value(&ev)))
                        />
                        <FieldError message=date_error />
                    </div>
                    {time_input(FormField::ClockIn, "Clock In Time", clock_in_error)}
                    {time_input(FormField::ClockOut, "Clock Out Time", clock_out_error)}
                </div>
                <div class="mb-4">
                    <FormLabel text="Notes" for_id=FormField::Notes.input_id() />
                    <textarea
                        id=FormField::Notes.input_id()
                        rows="3"
                        class="input-field"
                        placeholder="Add any additional notes..."
                        prop:value=move || form.notes.get()
                        on:input=move |ev| on_input.call((FormField::Notes, event_target_value(&ev)))
                    ></textarea>
                </div>
                <div class="flex justify-end space-x-3">
                    <Button variant=ButtonVariant::Outline on_click=on_cancel>"Cancel"</Button>
                    <Button button_type="submit">"Save Record"</Button>
                </div>
            </form>
        </div>
    }
}
