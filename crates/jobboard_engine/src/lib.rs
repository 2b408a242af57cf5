//! Job board engine: feed decoding, detail lookups and state persistence.
mod details;
mod engine;
mod feed;
mod persist;
mod types;

pub use details::{
    decode_details, DetailsFetcher, DetailsSettings, ReqwestDetailsFetcher, DEFAULT_API_BASE,
};
pub use engine::EngineHandle;
pub use feed::{decode_feed, load_feed, FeedError};
pub use persist::{ensure_state_dir, PersistError, StateFile};
pub use types::{EngineEvent, FailureKind, FetchError};
