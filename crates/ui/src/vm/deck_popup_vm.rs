#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckRefresh {
    Reload,
    Skip,
}

/// Watches the deck popup's open flag and decides when decks must be reloaded.
///
/// The first observation is the mount load. After that only a transition
/// from open to closed reloads, since a deck may have been created while the
/// popup was open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PopupWatch {
    last: Option<bool>,
}

impl PopupWatch {
    pub fn observe(&mut self, open: bool) -> DeckRefresh {
        let previous = self.last.replace(open);
        match previous {
            None => DeckRefresh::Reload,
            Some(true) if !open => DeckRefresh::Reload,
            Some(_) => DeckRefresh::Skip,
        }
    }
}

/// Popup "Create" gate: one `create/deck` write at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CreateGate {
    in_flight: bool,
}

impl CreateGate {
    /// Claim the gate before the write is spawned. `false` means a write is
    /// already running and this press must be dropped.
    pub fn try_begin(&mut self) -> bool {
        !std::mem::replace(&mut self.in_flight, true)
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }
}
