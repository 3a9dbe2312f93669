use serde::{Deserialize, Serialize};

/// How the requested shift is distributed over the rings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftPolicy {
    /// Every processed ring is rotated by the requested shift.
    #[default]
    Constant,
    /// Ring `k` is rotated by `shift - k`, never dropping below one step in
    /// the requested direction.
    Decreasing,
}

impl ShiftPolicy {
    /// Shift applied to ring `index` for a requested `shift`.
    ///
    /// A zero shift stays zero under every policy.
    pub fn shift_for_layer(self, shift: i64, index: usize) -> i64 {
        match self {
            ShiftPolicy::Constant => shift,
            ShiftPolicy::Decreasing => {
                let k = i64::try_from(index).unwrap_or(i64::MAX);
                match shift.signum() {
                    1 => shift.saturating_sub(k).max(1),
                    -1 => shift.saturating_add(k).min(-1),
                    _ => 0,
                }
            }
        }
    }
}

/// Parameters of one layer shift run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftOptions {
    /// Requested rotation in pixels along each ring. Positive values move
    /// pixels forward in perimeter order, negative values backwards.
    pub shift: i64,
    /// Number of outer rings to rotate. `None` rotates every ring; values
    /// above the ring count are clamped.
    pub max_layers: Option<usize>,
    pub policy: ShiftPolicy,
}

impl Default for ShiftOptions {
    fn default() -> Self {
        Self {
            shift: 1,
            max_layers: None,
            policy: ShiftPolicy::Constant,
        }
    }
}

impl ShiftOptions {
    pub fn new(shift: i64) -> Self {
        Self {
            shift,
            ..Default::default()
        }
    }

    pub fn with_max_layers(mut self, max_layers: usize) -> Self {
        self.max_layers = Some(max_layers);
        self
    }

    pub fn with_policy(mut self, policy: ShiftPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Rings actually processed for a grid with `ring_count` rings.
    pub fn layers_to_process(&self, ring_count: usize) -> usize {
        self.max_layers.map_or(ring_count, |n| n.min(ring_count))
    }
}

/// Input ranges accepted by the upload form of the web front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormLimits {
    pub min_shift: i64,
    pub max_shift: i64,
    pub min_layers: usize,
    pub max_layers: usize,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            min_shift: 1,
            max_shift: 1000,
            min_layers: 1,
            max_layers: 20,
        }
    }
}

impl FormLimits {
    /// Check `options` against the form ranges. A missing layer count is
    /// accepted and means "all rings".
    pub fn validate(&self, options: &ShiftOptions) -> Result<(), String> {
        if options.shift < self.min_shift || options.shift > self.max_shift {
            return Err(format!(
                "shift {} outside [{}, {}]",
                options.shift, self.min_shift, self.max_shift
            ));
        }
        if let Some(layers) = options.max_layers {
            if layers < self.min_layers || layers > self.max_layers {
                return Err(format!(
                    "layer count {layers} outside [{}, {}]",
                    self.min_layers, self.max_layers
                ));
            }
        }
        Ok(())
    }
}
