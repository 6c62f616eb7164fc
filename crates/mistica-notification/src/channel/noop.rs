//! Null-object push channel for environments without the capability.

use async_trait::async_trait;

use mistica_core::result::AppResult;
use mistica_core::traits::push::{PushChannel, PushMessage, PushPermission};

/// Push channel representing an absent platform capability.
///
/// Permission stays at `Default`, prompts resolve immediately without
/// granting, and `show` silently discards. Store logic never needs to
/// special-case the capability being missing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPushChannel;

#[async_trait]
impl PushChannel for NoopPushChannel {
    fn is_available(&self) -> bool {
        false
    }

    fn permission(&self) -> PushPermission {
        PushPermission::Default
    }

    async fn request_permission(&self) -> PushPermission {
        PushPermission::Default
    }

    async fn show(&self, _message: &PushMessage) -> AppResult<()> {
        Ok(())
    }
}
