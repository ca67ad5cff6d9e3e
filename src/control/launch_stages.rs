use crate::constants::SRB_SEPARATION_STEP;

/// Solid rocket booster jettison at a fixed step. Once detached the boosters
/// never come back.
#[derive(Debug, Clone, PartialEq)]
pub struct SrbStaging {
    separation_step: usize,
    detached: bool,
}

impl Default for SrbStaging {
    fn default() -> Self {
        SrbStaging::new()
    }
}

impl SrbStaging {
    pub fn new() -> Self {
        SrbStaging {
            separation_step: SRB_SEPARATION_STEP,
            detached: false,
        }
    }

    /// Returns true only on the step where the boosters separate.
    pub fn update(&mut self, step: usize) -> bool {
        if !self.detached && step == self.separation_step {
            self.detached = true;
            return true;
        }
        false
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// 1.0 while the boosters are attached, 0.0 afterwards.
    pub fn attached_factor(&self) -> f64 {
        if self.detached {
            0.0
        } else {
            1.0
        }
    }

    pub fn separation_step(&self) -> usize {
        self.separation_step
    }
}
