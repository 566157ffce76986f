use leptos::*;

use crate::{model::StatTile, pages::dashboard::utils::change_class};

#[component]
pub fn StatCard(tile: StatTile) -> impl IntoView {
    let change_class = change_class(&tile);
    view! {
        <div class="card flex items-start justify-between">
            <div>
                <p class="text-sm font-medium text-surface-500 dark:text-surface-400">{tile.title}</p>
                <p class="mt-2 text-3xl font-bold">{tile.value}</p>
                <p class=format!("mt-1 text-xs font-medium {change_class}")>
                    {tile.change}
                    <span class="text-surface-400">" vs last month"</span>
                </p>
            </div>
            <div class=format!("h-10 w-10 rounded-lg flex items-center justify-center {}", tile.color.icon_classes())>
                <i class=tile.icon></i>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::model::TileColor;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_card_marks_negative_change() {
        let html = render_to_string(|| {
            let tile = StatTile {
                title: "On Leave".into(),
                value: "14".into(),
                change: "-2%".into(),
                icon: "fas fa-umbrella-beach".into(),
                color: TileColor::Amber,
            };
            view! { <StatCard tile=tile /> }
        });
        assert!(html.contains("On Leave"));
        assert!(html.contains("text-red-500"));
        assert!(html.contains("fas fa-umbrella-beach"));
    }
}
