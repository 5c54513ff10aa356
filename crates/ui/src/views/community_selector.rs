use dioxus::prelude::*;
use dioxus_router::use_navigator;
use study_core::model::CommunityId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{CommunityRowVm, CommunitySelectorVm};

/// "Current group" bar with a chooser for switching communities.
///
/// `active` is looked up in the fetched list for the header; `fallback_label`
/// is shown until it is found. The chooser starts collapsed unless
/// `start_open` is set.
#[component]
pub fn CommunitySelector(
    active: Option<CommunityId>,
    fallback_label: String,
    #[props(default)] start_open: bool,
) -> Element {
    let ctx = use_context::<AppContext>();
    let community_service = ctx.community_service();
    let navigator = use_navigator();
    let mut selector = use_signal(move || {
        let mut vm = CommunitySelectorVm::new();
        if start_open {
            vm.open();
        }
        vm
    });

    let loader = community_service.clone();
    let _communities = use_resource(move || {
        let loader = loader.clone();
        async move {
            let outcome = loader.load_communities().await;
            selector.write().apply_communities(outcome);
        }
    });

    let on_choose = use_callback(move |id: CommunityId| {
        let chosen = selector.write().choose(id);
        if let Some((community, target)) = chosen {
            community_service.select_community(&community);
            navigator.push(Route::from(target));
        }
    });

    let (header, rows, choosing) = {
        let vm = selector.read();
        let header = active
            .and_then(|id| vm.name_of(id))
            .unwrap_or(fallback_label.as_str())
            .to_owned();
        (header, vm.rows(), vm.is_choosing())
    };

    rsx! {
        section { class: "group-bar",
            div {
                span { class: "group-bar-label", "CURRENT GROUP" }
                span { class: "group-bar-name", "{header}" }
            }
            button {
                class: "btn group-bar-choose",
                r#type: "button",
                onclick: move |_| selector.write().open(),
                "Choose Other"
            }
        }
        if choosing {
            div { class: "group-overlay",
                div { class: "group-modal",
                    h2 { class: "group-modal-title", "Choose Other Group" }
                    div { class: "group-list",
                        for row in rows {
                            CommunityRow { key: "{row.id}", row, on_choose }
                        }
                    }
                    div { class: "group-modal-actions",
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| selector.write().close(),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CommunityRow(row: CommunityRowVm, on_choose: Callback<CommunityId>) -> Element {
    let id = row.id;
    rsx! {
        button {
            class: "group-row",
            r#type: "button",
            onclick: move |_| on_choose.call(id),
            span { class: "{row.marker.css_class()}" }
            "{row.name}"
        }
    }
}
