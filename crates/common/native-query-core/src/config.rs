use bon::bon;

use crate::{ConfigError, ConfigResult};

const MAX_WALK_DEPTH: usize = 4096;

fn validate_max_depth(depth: usize) -> ConfigResult<usize> {
    if depth == 0 {
        return Err(ConfigError::InvalidConfig {
            reason: "max depth cannot be zero".into(),
        });
    }
    if depth > MAX_WALK_DEPTH {
        return Err(ConfigError::InvalidConfig {
            reason: format!("max depth cannot be greater than {MAX_WALK_DEPTH}"),
        });
    }
    Ok(depth)
}

#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Depth limit for recursive walks; `None` walks the whole tree.
    pub max_depth: Option<usize>,
    /// Classify symbolic links by their target instead of dropping them.
    pub follow_links: bool,
}

#[bon]
impl WalkConfig {
    /// Creates a new walk configuration using the builder pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use native_query_core::WalkConfig;
    ///
    /// // Unbounded walk, symbolic links dropped
    /// let config = WalkConfig::builder().build();
    ///
    /// // Children and grandchildren only
    /// let config = WalkConfig::builder()
    ///     .max_depth(2)
    ///     .unwrap()
    ///     .build();
    /// ```
    #[builder]
    pub fn new(
        #[builder(with = |depth: usize| -> Result<_, ConfigError> {
            validate_max_depth(depth)
        })]
        max_depth: Option<usize>,

        #[builder(default)] follow_links: bool,
    ) -> Self {
        Self {
            max_depth,
            follow_links,
        }
    }
}

impl WalkConfig {
    #[must_use]
    pub fn max_depth_or_unbounded(&self) -> usize {
        self.max_depth.unwrap_or(usize::MAX)
    }
}
