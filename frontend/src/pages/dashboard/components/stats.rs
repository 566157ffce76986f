use crate::{components::cards::StatCard, model::StatTile};
use leptos::*;

#[component]
pub fn StatsSection(tiles: StoredValue<Vec<StatTile>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <For
                each=move || tiles.get_value()
                key=|tile| tile.title.clone()
                children=move |tile| view! { <StatCard tile=tile /> }
            />
        </div>
    }
}
