//! Listing state machine.
//!
//! Defines a pure state transition function for the paginated image listing.
//! Side effects are returned as [`ListingAction`]s and executed by the caller,
//! which reports their results back as events.

use serde::Serialize;

use crate::ids::Cursor;
use crate::image::{ImagePage, ImageRecord};

/// Rendering status of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    /// First fetch pending, no error yet.
    Loading,
    /// First fetch failed.
    Error,
    /// At least one page is present; later pages may still be fetching.
    Ready,
}

/// Which request is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchKind {
    FirstPage,
    NextPage,
}

/// Accumulated listing state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingState {
    pub status: ListingStatus,
    /// Pages in fetch order.
    pub pages: Vec<ImagePage>,
    pub in_flight: Option<FetchKind>,
    /// Bumped on every invalidation; responses from an older epoch are stale.
    pub epoch: u64,
    /// Set when the latest next-page fetch failed. Existing pages are kept.
    pub next_page_failed: bool,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::initial()
    }
}

impl ListingState {
    /// Freshly mounted listing: loading, nothing fetched yet.
    pub fn initial() -> Self {
        Self {
            status: ListingStatus::Loading,
            pages: Vec::new(),
            in_flight: None,
            epoch: 0,
            next_page_failed: false,
        }
    }

    /// Cursor of the most recently fetched page, if it has a successor.
    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.pages.last().and_then(ImagePage::next_cursor)
    }

    pub fn has_next_page(&self) -> bool {
        self.next_cursor().is_some()
    }

    pub fn is_fetching_next_page(&self) -> bool {
        self.in_flight == Some(FetchKind::NextPage)
    }

    /// All images flattened in fetch order.
    pub fn images(&self) -> impl Iterator<Item = &ImageRecord> {
        self.pages.iter().flat_map(|page| page.data.iter())
    }

    pub fn image_count(&self) -> usize {
        self.pages.iter().map(ImagePage::len).sum()
    }
}

/// Events that drive the listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingEvent {
    /// The listing became visible and wants its first page.
    Mounted,
    /// "Load more" was requested.
    NextPageRequested,
    /// The cached collection was invalidated externally.
    Invalidated,
    /// A fetch produced by a [`ListingAction::FetchPage`] was issued.
    FetchStarted { kind: FetchKind },
    /// A fetch completed.
    FetchSucceeded { epoch: u64, page: ImagePage },
    /// A fetch failed.
    FetchFailed { epoch: u64, reason: String },
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingAction {
    /// Fetch one page. `cursor` is `None` for the first page.
    FetchPage {
        epoch: u64,
        kind: FetchKind,
        cursor: Option<Cursor>,
    },
}

/// Pure listing state machine: no side effects.
pub struct ListingStateMachine;

impl ListingStateMachine {
    pub fn transition(
        mut state: ListingState,
        event: ListingEvent,
    ) -> (ListingState, Vec<ListingAction>) {
        match event {
            ListingEvent::Mounted => {
                let fresh = state.status == ListingStatus::Loading
                    && state.pages.is_empty()
                    && state.in_flight.is_none();
                if !fresh {
                    return (state, Vec::new());
                }
                let action = ListingAction::FetchPage {
                    epoch: state.epoch,
                    kind: FetchKind::FirstPage,
                    cursor: None,
                };
                (state, vec![action])
            }
            ListingEvent::NextPageRequested => {
                if state.status != ListingStatus::Ready || state.in_flight.is_some() {
                    return (state, Vec::new());
                }
                let Some(cursor) = state.next_cursor().cloned() else {
                    return (state, Vec::new());
                };
                let action = ListingAction::FetchPage {
                    epoch: state.epoch,
                    kind: FetchKind::NextPage,
                    cursor: Some(cursor),
                };
                (state, vec![action])
            }
            ListingEvent::Invalidated => {
                let state = ListingState {
                    epoch: state.epoch.wrapping_add(1),
                    ..ListingState::initial()
                };
                let action = ListingAction::FetchPage {
                    epoch: state.epoch,
                    kind: FetchKind::FirstPage,
                    cursor: None,
                };
                (state, vec![action])
            }
            ListingEvent::FetchStarted { kind } => {
                state.in_flight = Some(kind);
                (state, Vec::new())
            }
            ListingEvent::FetchSucceeded { epoch, page } => {
                if epoch != state.epoch {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(epoch, current = state.epoch, "Dropping stale page");
                    return (state, Vec::new());
                }
                state.in_flight = None;
                state.next_page_failed = false;
                state.status = ListingStatus::Ready;
                state.pages.push(page);
                (state, Vec::new())
            }
            ListingEvent::FetchFailed { epoch, reason } => {
                if epoch != state.epoch {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(epoch, current = state.epoch, "Dropping stale failure");
                    return (state, Vec::new());
                }
                #[cfg(feature = "tracing")]
                tracing::debug!(epoch, reason = %reason, "Listing fetch failed");
                state.in_flight = None;
                match state.status {
                    ListingStatus::Loading => state.status = ListingStatus::Error,
                    ListingStatus::Ready => state.next_page_failed = true,
                    ListingStatus::Error => {}
                }
                (state, Vec::new())
            }
        }
    }
}
