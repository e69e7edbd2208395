//! View models handed to the presentation layer.
//!
//! Views own their fetch lifecycle. A load is split into
//! [`begin_load`](catalog::CatalogView::begin_load), which hands out a
//! [`FetchTicket`], and `finish_load`, which applies the result only if the
//! ticket is still current. Unmounting or starting a newer load makes older
//! tickets stale, so late responses are discarded instead of overwriting
//! fresher state.

pub mod catalog;
pub mod product;

pub use catalog::{CatalogPage, CatalogState, CatalogView, ItemCard};
pub use product::{DetailState, ProductDetail};

/// Proof of a started fetch, checked when the result arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "pass the ticket to finish_load"]
pub struct FetchTicket(u64);

/// Generation counter shared by views with a fetch lifecycle.
#[derive(Debug, Default)]
pub(crate) struct FetchGuard {
    generation: u64,
    mounted: bool,
}

impl FetchGuard {
    /// Start a fetch, invalidating any earlier ticket.
    pub(crate) const fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.mounted = true;
        FetchTicket(self.generation)
    }

    /// Whether a result carrying `ticket` should still be applied.
    pub(crate) const fn accepts(&self, ticket: FetchTicket) -> bool {
        self.mounted && ticket.0 == self.generation
    }

    /// Stop accepting results for any outstanding ticket.
    pub(crate) const fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let mut guard = FetchGuard::default();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.accepts(first));
        assert!(guard.accepts(second));
    }

    #[test]
    fn test_unmount_rejects_outstanding_ticket() {
        let mut guard = FetchGuard::default();
        let ticket = guard.begin();
        guard.unmount();
        assert!(!guard.accepts(ticket));
    }
}
