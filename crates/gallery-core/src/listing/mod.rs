//! Listing domain module.
//!
//! This module defines the paginated listing state machine types.

pub mod state_machine;

pub use state_machine::{
    FetchKind, ListingAction, ListingEvent, ListingState, ListingStateMachine, ListingStatus,
};
