use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

use super::community_selector::CommunitySelector;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let active = ctx.session().active_community();
    let fallback_label = ctx.default_group_label().to_owned();

    rsx! {
        div { class: "page",
            CommunitySelector { active, fallback_label }
            Link { class: "btn home-add-card", to: Route::AddCard {}, "Add Card" }
        }
    }
}
