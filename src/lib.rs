//! Exceptions as values.
//!
//! Tryblock runs a block of code under Rust's native exception guard, [`catch_unwind`], and hands
//! the caught exception back as an ordinary return value. Callers can detect that a risky operation
//! raised without writing the guard themselves, and without losing any information carried by the
//! exception.
//!
//! [`catch_unwind`]: std::panic::catch_unwind
//!
//!
//! # Usage
//!
//! Run a block with [`try_block`]. It returns [`None`] if the block completed, or the caught
//! [`CaughtException`] if it raised:
//!
//! ```rust
//! use tryblock::try_block;
//!
//! assert!(try_block(|| {}).is_none());
//!
//! let ex = try_block(|| panic!("boom")).unwrap();
//! assert_eq!(ex.message(), Some("boom"));
//! ```
//!
//! To guard a single kind of exception, identified by its type, use [`catch`] or [`try_block_of`].
//! Exceptions of other types are not touched and keep propagating. [`throw`] raises any value as an
//! exception without going through the panic hook:
//!
//! ```rust
//! use tryblock::{catch, throw};
//!
//! #[derive(Debug, PartialEq)]
//! struct Timeout(u32);
//!
//! let res = catch::<(), Timeout>(|| throw(Timeout(30)));
//! assert_eq!(res, Err(Timeout(30)));
//! ```
//!
//! The payload of a caught exception is kept opaque. [`CaughtException`] forwards it as-is, and
//! [`CaughtException::resume`] raises it again unchanged.
//!
//!
//! # Platform support
//!
//! Interception requires `std` and the `unwind` panic strategy. When the crate is built with
//! `panic = "abort"`, nothing can unwind: blocks run to completion or abort the process, and
//! [`try_block`] always returns [`None`]. The backend is chosen at build time and can be forced with
//! the `TRYBLOCK_BACKEND` environment variable (`panic` or `abort`).

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::cargo,
    clippy::pedantic,
    clippy::missing_const_for_fn,
    clippy::allow_attributes,
    clippy::arithmetic_side_effects,
    clippy::as_underscore,
    clippy::assertions_on_result_states,
    clippy::clone_on_ref_ptr,
    clippy::default_numeric_fallback,
    clippy::else_if_without_else,
    clippy::empty_drop,
    clippy::empty_structs_with_brackets,
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::format_push_string,
    clippy::missing_assert_message,
    clippy::missing_inline_in_public_items,
    clippy::mixed_read_write_in_expression,
    clippy::pub_without_shorthand,
    clippy::redundant_type_annotations,
    clippy::same_name_method,
    clippy::self_named_module_files,
    clippy::semicolon_inside_block,
    clippy::shadow_unrelated,
    clippy::string_to_string,
    clippy::tests_outside_test_module,
    clippy::try_err,
    clippy::undocumented_unsafe_blocks,
    clippy::unnecessary_self_imports,
    clippy::unused_result_ok,
    clippy::wildcard_enum_match_arm,
)]

mod api;
mod backend;
mod exception;

pub use api::{catch, throw, try_block, try_block_of};
pub use exception::CaughtException;
