//! Execution backends for the SSE3 packed floating-point operation set
//!
//! This module defines the operation-set contract and its scalar rendition.
//! Every backend implements the same trait so that a code generator or
//! interpreter invokes one operation name and gets one semantic definition,
//! whatever actually executes it.
//!
//! # Backends
//!
//! - `scalar`: portable bit-exact rendition in ordinary scalar arithmetic.
//!   This is the only backend that lives in this crate. Native execution is
//!   not a backend here at all: deciding that the host can run `addsubps`
//!   itself belongs to the dispatcher that consumes this crate, which is why
//!   [`Sse3Backend::is_native`] answers with a constant.

pub mod scalar;

use crate::vec128::V128;

/// The SSE3 packed floating-point operation set.
///
/// Nine pure operations over [`V128`] values plus a constant capability
/// query. Implementations take operands by value, return a fresh value,
/// never mutate, never fail, and are total over every 128-bit pattern;
/// NaN and infinity lanes follow ordinary IEEE 754 add/subtract behavior.
///
/// The normative per-lane semantics (a = first operand, b = second operand,
/// 32-bit lanes numbered 0-3 and 64-bit lanes 0-1, low-to-high):
///
/// | Operation    | Width | dst0    | dst1    | dst2    | dst3    |
/// |--------------|-------|---------|---------|---------|---------|
/// | `addsub_ps`  | 4×32  | a0 - b0 | a1 + b1 | a2 - b2 | a3 + b3 |
/// | `addsub_pd`  | 2×64  | a0 - b0 | a1 + b1 |         |         |
/// | `hadd_ps`    | 4×32  | a0 + a1 | a2 + a3 | b0 + b1 | b2 + b3 |
/// | `hadd_pd`    | 2×64  | a0 + a1 | b0 + b1 |         |         |
/// | `hsub_ps`    | 4×32  | a0 - a1 | a2 - a3 | b0 - b1 | b2 - b3 |
/// | `hsub_pd`    | 2×64  | a0 - a1 | b0 - b1 |         |         |
/// | `movddup`    | 2×64  | a0      | a0      |         |         |
/// | `movshdup`   | 4×32  | a1      | a1      | a3      | a3      |
/// | `movsldup`   | 4×32  | a0      | a0      | a2      | a2      |
///
/// Two mappings are normative and easy to invert: the alternating
/// operations subtract in even lanes and add in odd lanes, and the
/// horizontal operations pair adjacent lanes of the *same* operand, the
/// first operand's pairs filling the low half of the result and the second
/// operand's the high half.
pub trait Sse3Backend {
    /// Whether results come from native hardware execution.
    ///
    /// Constant per implementation. The scalar emulation always answers
    /// `false`: it is the path a dispatcher selects precisely when native
    /// support is unavailable or unneeded. Probing what the host CPU
    /// actually supports is that dispatcher's job, not this crate's.
    fn is_native() -> bool;

    /// Alternating add-subtract of four `f32` lanes (`addsubps`):
    /// `[a0 - b0, a1 + b1, a2 - b2, a3 + b3]`.
    fn addsub_ps(a: V128, b: V128) -> V128;

    /// Alternating add-subtract of two `f64` lanes (`addsubpd`):
    /// `[a0 - b0, a1 + b1]`.
    fn addsub_pd(a: V128, b: V128) -> V128;

    /// Horizontal add of adjacent `f32` lanes (`haddps`):
    /// `[a0 + a1, a2 + a3, b0 + b1, b2 + b3]`.
    fn hadd_ps(a: V128, b: V128) -> V128;

    /// Horizontal add of adjacent `f64` lanes (`haddpd`):
    /// `[a0 + a1, b0 + b1]`.
    fn hadd_pd(a: V128, b: V128) -> V128;

    /// Horizontal subtract of adjacent `f32` lanes (`hsubps`):
    /// `[a0 - a1, a2 - a3, b0 - b1, b2 - b3]`.
    fn hsub_ps(a: V128, b: V128) -> V128;

    /// Horizontal subtract of adjacent `f64` lanes (`hsubpd`):
    /// `[a0 - a1, b0 - b1]`.
    fn hsub_pd(a: V128, b: V128) -> V128;

    /// Duplicate the low `f64` lane (`movddup`): `[a0, a0]`.
    fn movddup(a: V128) -> V128;

    /// Duplicate the odd `f32` lanes (`movshdup`): `[a1, a1, a3, a3]`.
    fn movshdup(a: V128) -> V128;

    /// Duplicate the even `f32` lanes (`movsldup`): `[a0, a0, a2, a2]`.
    fn movsldup(a: V128) -> V128;
}
