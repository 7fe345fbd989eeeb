// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude re-exporting the operator extension traits.
//!
//! ```ignore
//! use viewflow_stream::prelude::*;
//!
//! let debounced = events.debounce(window);
//! let combined = names.combine_latest(passwords, validate_pair);
//! ```

pub use crate::combine_latest::CombineLatestExt;
pub use crate::debounce::DebounceExt;
pub use crate::repeat_until::repeat_until;
