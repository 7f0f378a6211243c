use std::num::NonZeroUsize;

use nonzero::nonzero;
use serde::{Deserialize, Serialize};

use crate::core::types::Number;

/// Options for the path integrator
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntegratorOpts {
    /// How many times a path may bounce before it is cut off (contributing black)
    pub max_depth: usize,
    /// Closest distance along a ray that counts as an intersection.
    ///
    /// Non-zero so that scattered rays don't hit the surface they start on
    pub min_dist: Number,
}

impl Default for IntegratorOpts {
    fn default() -> Self {
        Self {
            max_depth: 50,
            min_dist: 0.001,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderOpts {
    /// The target dimensions of the render
    pub width: NonZeroUsize,
    pub height: NonZeroUsize,
    /// How many paths are averaged for each pixel
    pub samples: NonZeroUsize,
    pub integrator: IntegratorOpts,
}

impl RenderOpts {
    pub fn aspect_ratio(&self) -> Number { self.width.get() as Number / self.height.get() as Number }
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            width: nonzero!(800_usize),
            height: nonzero!(400_usize),
            samples: nonzero!(100_usize),
            integrator: IntegratorOpts::default(),
        }
    }
}
