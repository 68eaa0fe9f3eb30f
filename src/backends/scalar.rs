//! Scalar (non-SIMD) rendition of the SSE3 operation set
//!
//! This is the portable baseline that works on every platform. Each lane of
//! the result is computed with the same IEEE 754 scalar add or subtract the
//! hardware instruction performs on that lane, so results are bit-for-bit
//! identical to native execution, NaN propagation, signed zeros, infinities
//! and subnormals included.
//!
//! # Performance
//!
//! Correctness reference, not a fast path. A native `addsubps` retires in a
//! few cycles; this unpacks, computes four scalar ops, and repacks.

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::Sse3Backend;
use crate::vec128::V128;

/// Scalar backend (portable, no SIMD)
pub struct ScalarBackend;

impl Sse3Backend for ScalarBackend {
    fn is_native() -> bool {
        false
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    fn addsub_ps(a: V128, b: V128) -> V128 {
        let a = a.to_f32x4();
        let b = b.to_f32x4();
        V128::from_f32x4([a[0] - b[0], a[1] + b[1], a[2] - b[2], a[3] + b[3]])
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    fn addsub_pd(a: V128, b: V128) -> V128 {
        let a = a.to_f64x2();
        let b = b.to_f64x2();
        V128::from_f64x2([a[0] - b[0], a[1] + b[1]])
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    fn hadd_ps(a: V128, b: V128) -> V128 {
        let a = a.to_f32x4();
        let b = b.to_f32x4();
        V128::from_f32x4([a[0] + a[1], a[2] + a[3], b[0] + b[1], b[2] + b[3]])
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    fn hadd_pd(a: V128, b: V128) -> V128 {
        let a = a.to_f64x2();
        let b = b.to_f64x2();
        V128::from_f64x2([a[0] + a[1], b[0] + b[1]])
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    fn hsub_ps(a: V128, b: V128) -> V128 {
        let a = a.to_f32x4();
        let b = b.to_f32x4();
        V128::from_f32x4([a[0] - a[1], a[2] - a[3], b[0] - b[1], b[2] - b[3]])
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    fn hsub_pd(a: V128, b: V128) -> V128 {
        let a = a.to_f64x2();
        let b = b.to_f64x2();
        V128::from_f64x2([a[0] - a[1], b[0] - b[1]])
    }

    // The three moves copy lane bits without arithmetic, so NaN payloads and
    // signs pass through untouched.

    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    fn movddup(a: V128) -> V128 {
        let a = a.to_f64x2();
        V128::from_f64x2([a[0], a[0]])
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    fn movshdup(a: V128) -> V128 {
        let a = a.to_f32x4();
        V128::from_f32x4([a[1], a[1], a[3], a[3]])
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    fn movsldup(a: V128) -> V128 {
        let a = a.to_f32x4();
        V128::from_f32x4([a[0], a[0], a[2], a[2]])
    }
}
