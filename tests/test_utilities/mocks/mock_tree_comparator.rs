use async_trait::async_trait;
use crate_viz::prelude::*;

/// Mock TreeComparator returning a fixed count (or a fixed failure)
pub struct MockTreeComparator {
    count: Option<usize>,
}

impl MockTreeComparator {
    pub fn with_count(count: usize) -> Self {
        Self { count: Some(count) }
    }

    pub fn failing() -> Self {
        Self { count: None }
    }
}

#[async_trait]
impl TreeComparator for MockTreeComparator {
    async fn count_nodes(&self, _root: &PackageId) -> Result<usize> {
        self.count
            .ok_or_else(|| anyhow::anyhow!("mock comparator failure"))
    }
}
