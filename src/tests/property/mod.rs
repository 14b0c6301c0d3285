//! Property-based tests for the display helpers
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `class_merge_props`: Tests for class merging
//!   - Only falsy inputs yield an empty string
//!   - Later conflicting utility wins
//!   - Output has no duplicate or empty tokens
//!   - Merging is idempotent
//!
//! - `formatting_props`: Tests for date and runtime formatting
//!   - Non-positive runtimes are "no data"
//!   - Runtime output round-trips to the same minute count
//!   - Valid dates always render in the fixed Korean layout
//!
//! - `lookup_props`: Tests for image URLs and MBTI colors
//!   - URLs are base + size + path
//!   - MBTI lookup ignores case
//!   - Every function is deterministic across threads
//!
//! By default, proptest runs 256 cases per property. Override with
//! `PROPTEST_CASES=1000 cargo test property --release`.

mod class_merge_props;
mod formatting_props;
