use std::sync::{Arc, Mutex, MutexGuard};

use gallery_core::listing::{ListingAction, ListingEvent, ListingStateMachine};
use gallery_core::ports::{ImageApiError, ImageApiPort, QueryCachePort};
use gallery_core::{ImageRecord, ListingState, ListingStatus, QueryKey};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// What a single feed operation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A page was fetched and appended.
    Fetched { images: usize },
    /// Nothing to do: already fetching, no next page, or already mounted.
    Skipped,
    /// The fetch failed. The state records it.
    Failed(ImageApiError),
    /// The response belonged to an invalidated epoch and was dropped.
    Stale,
}

/// Rendering view of the feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedSnapshot {
    pub status: ListingStatus,
    pub images: Vec<ImageRecord>,
    pub has_next_page: bool,
    pub is_fetching_next_page: bool,
    pub next_page_failed: bool,
}

struct FeedInner {
    state: ListingState,
    /// Cache generation of the key when the current pages were requested.
    seen_generation: u64,
}

/// Cursor-paginated image listing backed by [`ListingStateMachine`].
///
/// The state lock is held while deciding on a request and marking it in
/// flight, and never across the network call. Invalidations of the
/// `images` key are picked up on the next operation, or right away when
/// [`ImageFeed::spawn_invalidation_listener`] is running.
pub struct ImageFeed {
    image_api: Arc<dyn ImageApiPort>,
    query_cache: Arc<dyn QueryCachePort>,
    key: QueryKey,
    inner: Mutex<FeedInner>,
}

impl ImageFeed {
    pub fn new(image_api: Arc<dyn ImageApiPort>, query_cache: Arc<dyn QueryCachePort>) -> Self {
        let key = QueryKey::images();
        let seen_generation = query_cache.generation(&key);
        Self {
            image_api,
            query_cache,
            key,
            inner: Mutex::new(FeedInner {
                state: ListingState::initial(),
                seen_generation,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FeedInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Loads the first page if nothing was requested yet.
    #[tracing::instrument(name = "usecase.image_feed.mount", skip(self))]
    pub async fn mount(&self) -> FetchOutcome {
        self.dispatch(Some(ListingEvent::Mounted)).await
    }

    /// Appends the next page. No-op while a fetch is in flight or when the
    /// last page has no successor.
    #[tracing::instrument(name = "usecase.image_feed.fetch_next_page", skip(self))]
    pub async fn fetch_next_page(&self) -> FetchOutcome {
        self.dispatch(Some(ListingEvent::NextPageRequested)).await
    }

    /// Refetches from the first page if the cache key was invalidated since
    /// the current pages were requested.
    #[tracing::instrument(name = "usecase.image_feed.refresh_if_invalidated", skip(self))]
    pub async fn refresh_if_invalidated(&self) -> FetchOutcome {
        self.dispatch(None).await
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        let inner = self.lock();
        let state = &inner.state;
        FeedSnapshot {
            status: state.status,
            images: state.images().cloned().collect(),
            has_next_page: state.has_next_page(),
            is_fetching_next_page: state.is_fetching_next_page(),
            next_page_failed: state.next_page_failed,
        }
    }

    /// Watches the cache key and refetches as soon as it is invalidated.
    ///
    /// The task holds a weak reference and ends when the feed is dropped or
    /// the cache goes away.
    pub fn spawn_invalidation_listener(self: &Arc<Self>) -> JoinHandle<()> {
        let mut changes = self.query_cache.subscribe(&self.key);
        let feed = Arc::downgrade(self);
        tokio::spawn(async move {
            while changes.changed().await.is_ok() {
                let Some(feed) = feed.upgrade() else {
                    break;
                };
                let outcome = feed.refresh_if_invalidated().await;
                debug!(?outcome, "Invalidation listener refreshed feed");
            }
        })
    }

    /// Runs `event` through the state machine and executes the fetch it asks
    /// for. A pending invalidation takes precedence over `event`.
    async fn dispatch(&self, event: Option<ListingEvent>) -> FetchOutcome {
        let request = {
            let mut inner = self.lock();

            let generation = self.query_cache.generation(&self.key);
            let event = if generation != inner.seen_generation {
                info!(
                    key = %self.key,
                    from = inner.seen_generation,
                    to = generation,
                    "Listing invalidated, refetching from the first page"
                );
                inner.seen_generation = generation;
                ListingEvent::Invalidated
            } else {
                match event {
                    Some(event) => event,
                    None => return FetchOutcome::Skipped,
                }
            };

            let state = std::mem::take(&mut inner.state);
            let (state, actions) = ListingStateMachine::transition(state, event);
            inner.state = state;

            let Some(ListingAction::FetchPage {
                epoch,
                kind,
                cursor,
            }) = actions.into_iter().next()
            else {
                return FetchOutcome::Skipped;
            };

            let state = std::mem::take(&mut inner.state);
            let (state, _) =
                ListingStateMachine::transition(state, ListingEvent::FetchStarted { kind });
            inner.state = state;
            (epoch, kind, cursor)
        };

        let (epoch, kind, cursor) = request;
        debug!(epoch, ?kind, cursor = ?cursor, "Fetching page");
        let result = self.image_api.fetch_page(cursor.as_ref()).await;

        let mut inner = self.lock();
        let (event, outcome) = match result {
            Ok(page) => {
                let images = page.len();
                (
                    ListingEvent::FetchSucceeded { epoch, page },
                    FetchOutcome::Fetched { images },
                )
            }
            Err(e) => {
                warn!(error = %e, ?kind, "Page fetch failed");
                (
                    ListingEvent::FetchFailed {
                        epoch,
                        reason: e.to_string(),
                    },
                    FetchOutcome::Failed(e),
                )
            }
        };

        let stale = inner.state.epoch != epoch;
        let state = std::mem::take(&mut inner.state);
        let (state, _) = ListingStateMachine::transition(state, event);
        inner.state = state;

        if stale {
            FetchOutcome::Stale
        } else {
            outcome
        }
    }
}
