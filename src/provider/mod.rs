use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::plan;
use crate::profile::UserProfile;
use crate::wire::Plan;

/// Source of plans for a completed profile.
#[async_trait]
pub trait PlanProvider: Send + Sync {
    async fn generate(&self, profile: &UserProfile) -> Result<Plan>;
}

pub type DynProvider = Box<dyn PlanProvider + Send + Sync>;

/// Builds plans from the built-in tables after a fixed pause, standing in
/// for a remote call.
pub struct StaticProvider {
    pub delay: Duration,
}

impl StaticProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PlanProvider for StaticProvider {
    async fn generate(&self, profile: &UserProfile) -> Result<Plan> {
        tracing::debug!(
            weight_loss = profile.is_weight_loss(),
            method = %profile.training_method,
            equipment = %profile.equipment,
            "building plan"
        );
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(plan::build_plan(profile))
    }
}

pub fn make_provider(delay_ms: u64) -> DynProvider {
    Box::new(StaticProvider::new(Duration::from_millis(delay_ms)))
}
