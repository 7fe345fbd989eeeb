// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream operators backing the viewflow pipelines.
//!
//! Each operator is provided via an extension trait for composability, the
//! usual `futures` idiom:
//!
//! - [`debounce`](DebounceExt::debounce): trailing debounce; emit the latest
//!   value once the source has been quiet for a full window.
//! - [`combine_latest`](CombineLatestExt::combine_latest): re-emit a combined
//!   value from two sources whenever either updates, once both have emitted.
//! - [`repeat_until`]: a source that re-emits a constant until a predicate
//!   becomes true.
//!
//! Positional pairing (`zip`) is deliberately not reimplemented here;
//! `futures::StreamExt::zip` already has the exact semantics required.

pub mod combine_latest;
pub mod debounce;
pub mod prelude;
pub mod repeat_until;

pub use self::combine_latest::CombineLatestExt;
pub use self::debounce::DebounceExt;
pub use self::repeat_until::repeat_until;
