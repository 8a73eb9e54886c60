//! Cancellable, timeout-capable channel iteration for urchin sorted maps.
//!
//! Extends [`urchin_core::SortedMap`] with asynchronous delivery: a
//! background producer thread walks the (optionally bound-restricted) sorted
//! sequence and hands entries to the consumer through a bounded crossbeam
//! channel, with explicit early cancellation and a per-entry send timeout.
//!
//! # Example
//!
//! ```
//! use urchin_core::{SortedMap, asc};
//! use urchin_channel::{IterState, SortedMapChannelExt};
//!
//! let mut map = SortedMap::new(Some(asc::<i64>));
//! map.insert("low", 10);
//! map.insert("mid", 20);
//! map.insert("high", 30);
//!
//! let mut iter = map.iter_between_ch(Some(&15), None).expect("non-empty range");
//! let keys: Vec<_> = iter.by_ref().map(|rec| rec.key).collect();
//!
//! assert_eq!(keys, vec!["mid", "high"]);
//! assert_eq!(IterState::Completed, iter.state());
//! ```

pub mod cancel_token;
pub mod channel_iter;
pub mod iter_params;
pub mod sorted_map_ext;

pub use cancel_token::CancelToken;
pub use channel_iter::{ChannelIter, IterState};
pub use iter_params::IterChParams;
pub use sorted_map_ext::SortedMapChannelExt;
