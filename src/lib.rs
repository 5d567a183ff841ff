//! A small dense linear algebra library for dynamically-sized matrices.
//!
//! # Motivation
//!
//! Fixed-size linear algebra libraries lean on const generics to encode matrix
//! dimensions in the type system, which makes dimension mismatches a compile
//! error but rules out matrices whose shape is only known at runtime (data
//! loaded from files, user-supplied tables, and so on). This library covers
//! that runtime-shaped case with a single concrete [`Matrix`] type that tracks
//! its shape as first-class data.
//!
//! # Goals & Non-Goals
//!
//! - Support exactly one storage layout: row-major, unpadded, heap-allocated.
//!   Rows are contiguous and can be borrowed as slices; columns are extracted
//!   by copying.
//! - Enforce rectangularity at construction time. A [`Matrix`] can never be
//!   ragged, so shape queries read stored data instead of measuring rows.
//! - Be generic over the element type, but don't try to support non-[`Copy`]
//!   numeric types (eg. "big decimals").
//! - Don't provide views, slicing, broadcasting, sparse storage, or
//!   parallel/SIMD backends. Operations are plain single-pass loops with no
//!   numerical-stability machinery beyond what the element type's arithmetic
//!   provides.

mod error;
mod matrix;
mod traits;
pub mod vector;

pub use error::*;
pub use matrix::*;
pub use traits::*;
