use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use url::form_urlencoded;

use crate::views::{AddCardView, CardsView, HomeView};
use crate::vm::NavTarget;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/cards?:deck_name", CardsView)] Cards { deck_name: DeckNameQuery },
        #[route("/add/card", AddCardView)] AddCard {},
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Root => Route::Home {},
            NavTarget::DeckListing { community_name } => Route::Cards {
                deck_name: DeckNameQuery::new(community_name),
            },
        }
    }
}

/// `deck_name` query value carrying a community name verbatim.
///
/// The router percent-decodes the whole query once before splitting it on `&`
/// and `=`, and it leaves `%` and `&` alone when writing. The name is therefore
/// form-encoded and then has its `%` escaped again, so the router's decode
/// leaves a form-encoded value behind that `from_str` unwraps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeckNameQuery(String);

impl DeckNameQuery {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckNameQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in form_urlencoded::byte_serialize(self.0.as_bytes()) {
            f.write_str(&chunk.replace('%', "%25"))?;
        }
        Ok(())
    }
}

impl FromStr for DeckNameQuery {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        // A form-encoded value holds no bare `=` or `&`, so it parses as a single key.
        let name = form_urlencoded::parse(raw.as_bytes())
            .map(|(key, _)| key.into_owned())
            .next()
            .unwrap_or_default();
        Ok(Self(name))
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Study Groups" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::AddCard {}, "Add Card" } }
            }
        }
    }
}
