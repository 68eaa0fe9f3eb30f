//! Espejo: Bit-Exact Software Mirror of the SSE3 Packed-Float Instructions
//!
//! **Espejo** (Spanish: "mirror") gives the SSE3 packed floating-point
//! family (alternating add/subtract, horizontal add/subtract, and the
//! lane-duplication moves) a single semantic definition that behaves
//! identically whether or not the machine running it has the hardware:
//!
//! 1. **One contract** - the [`Sse3Backend`] trait names each operation once,
//!    with its per-lane semantics as the normative definition
//! 2. **One value type** - [`V128`], a plain 128-bit container read as four
//!    `f32` lanes or two `f64` lanes over the same storage
//! 3. **One reference rendition** - [`ScalarBackend`], ordinary scalar
//!    arithmetic that reproduces each instruction bit for bit
//!
//! # Design Principles
//!
//! - **Semantics over speed**: the scalar path exists to be correct anywhere,
//!   not to be fast; lane ordering and operand-to-lane mapping follow the
//!   instruction set reference exactly
//! - **Stateless and total**: every operation is a pure function over whole
//!   values, defined for every bit pattern including NaN and infinity
//! - **Zero unsafe in the public API**: `unsafe` appears only in test code
//!   that compares against the real instructions
//! - **Dispatch stays outside**: probing the host CPU and choosing native
//!   execution over this emulation is the caller's job; the emulation just
//!   answers [`Sse3Backend::is_native`] with `false`
//!
//! # Quick Start
//!
//! ```rust
//! use espejo::{ScalarBackend, Sse3Backend, V128};
//!
//! let a = V128::from_f32x4([1.0, 2.0, 3.0, 4.0]);
//! let b = V128::from_f32x4([10.0, 20.0, 30.0, 40.0]);
//!
//! // haddps: adjacent pairs of a fill the low half, pairs of b the high half
//! let sums = ScalarBackend::hadd_ps(a, b);
//! assert_eq!(sums.to_f32x4(), [3.0, 7.0, 30.0, 70.0]);
//!
//! // addsubps: subtract on even lanes, add on odd lanes
//! let alt = ScalarBackend::addsub_ps(a, b);
//! assert_eq!(alt.to_f32x4(), [-9.0, 22.0, -27.0, 44.0]);
//!
//! // the emulation is what a dispatcher picks when hardware SSE3 is not there
//! assert!(!ScalarBackend::is_native());
//! ```

pub mod backends;
pub mod error;
pub mod vec128;

pub use backends::scalar::ScalarBackend;
pub use backends::Sse3Backend;
pub use error::{EspejoError, Result};
pub use vec128::V128;
