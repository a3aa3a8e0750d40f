mod core;
mod format;
mod normalize;
mod ops;

pub use core::Angle;
pub use normalize::{fold_latitude, wrap_pm_pi_upper};

pub use core::{deg, rad};
