//! # fedsim rate
//!
//! Rate-model strategies for [`fedsim_core::Node`]: a noise-free base model,
//! a noise-injecting decorator, and the overhead configuration they share.
//!
//! ## Gantree Architecture
//!
//! ```text
//! fedsim_rate // L2: Rate Model (완료)
//!     OverheadSpec // 고정/비율 오버헤드 (완료)
//!         fixed(), fraction(), resolve()
//!     NoiseSequence // 주기적 노이즈 시퀀스 (완료)
//!         next(), peek()
//!     BaseRateModel // 노이즈 없는 변환 (완료)
//!     NoisyRateModel // 노이즈 데코레이터 (완료)
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use fedsim_rate::prelude::*;
//! use fedsim_core::NodeRateModel;
//!
//! let base = BaseRateModel::fixed_sync(1_000);
//! let noise = NoiseSequence::new(vec![0.05, -0.02, 0.1]).unwrap();
//! let mut model = NoisyRateModel::new(base, noise);
//!
//! let host_ns = model.quantum_to_host_ns(1_000, 10.0, 5e8);
//! assert!(host_ns > 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Cyclic per-quantum noise factor sequence.
pub mod noise_sequence;

/// Fixed vs. fractional barrier overhead configuration.
pub mod overhead;

/// Concrete rate-model strategies: [`rate_model::BaseRateModel`] and the
/// [`rate_model::NoisyRateModel`] decorator.
pub mod rate_model;

// ============================================================================
// Re-exports
// ============================================================================

pub use noise_sequence::NoiseSequence;
pub use overhead::OverheadSpec;
pub use rate_model::{BaseRateModel, NoisyRateModel};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use fedsim_rate::prelude::*;
    //! ```

    pub use crate::noise_sequence::NoiseSequence;
    pub use crate::overhead::OverheadSpec;
    pub use crate::rate_model::{BaseRateModel, NoisyRateModel};
}

// ============================================================================
// Integration Tests
// ============================================================================
