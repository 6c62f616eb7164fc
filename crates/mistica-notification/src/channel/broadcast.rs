//! Broadcast push channel.

use std::sync::RwLock;

use async_trait::async_trait;
use tokio::sync::broadcast;

use mistica_core::result::AppResult;
use mistica_core::traits::push::{PushChannel, PushMessage, PushPermission};

/// Push channel fanning messages out over a tokio broadcast channel.
///
/// Subscribers (the SSE endpoint, tests) receive every shown message and
/// filter by recipient. The permission prompt resolves to a decision
/// fixed at construction, standing in for the platform's user prompt;
/// once the state is `Denied` the prompt is never applied again.
#[derive(Debug)]
pub struct BroadcastPushChannel {
    permission: RwLock<PushPermission>,
    prompt_decision: PushPermission,
    sender: broadcast::Sender<PushMessage>,
}

impl BroadcastPushChannel {
    /// Create a channel whose prompt resolves to `prompt_decision`.
    /// Permission starts at `Default`.
    pub fn new(capacity: usize, prompt_decision: PushPermission) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            permission: RwLock::new(PushPermission::Default),
            prompt_decision,
            sender,
        }
    }

    /// Create a channel with a pre-existing permission state, as when
    /// the platform reports a decision made in an earlier session.
    pub fn with_permission(
        capacity: usize,
        initial: PushPermission,
        prompt_decision: PushPermission,
    ) -> Self {
        let channel = Self::new(capacity, prompt_decision);
        *channel.permission.write().expect("permission lock poisoned") = initial;
        channel
    }

    /// Subscribe to the stream of shown messages.
    pub fn subscribe(&self) -> broadcast::Receiver<PushMessage> {
        self.sender.subscribe()
    }
}

#[async_trait]
impl PushChannel for BroadcastPushChannel {
    fn is_available(&self) -> bool {
        true
    }

    fn permission(&self) -> PushPermission {
        *self.permission.read().expect("permission lock poisoned")
    }

    async fn request_permission(&self) -> PushPermission {
        let mut state = self.permission.write().expect("permission lock poisoned");
        // Denied is terminal: the platform refuses to re-prompt.
        if *state != PushPermission::Denied {
            *state = self.prompt_decision;
        }
        *state
    }

    async fn show(&self, message: &PushMessage) -> AppResult<()> {
        // A send error only means nobody is subscribed right now, which
        // is not a delivery failure for a broadcast.
        let _ = self.sender.send(message.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn message() -> PushMessage {
        PushMessage {
            user_id: Uuid::new_v4(),
            title: "t".to_string(),
            body: "b".to_string(),
            icon: None,
            tag: "tag".to_string(),
            link: None,
        }
    }

    #[tokio::test]
    async fn test_prompt_applies_decision() {
        let channel = BroadcastPushChannel::new(8, PushPermission::Granted);
        assert_eq!(channel.permission(), PushPermission::Default);
        assert_eq!(channel.request_permission().await, PushPermission::Granted);
        assert_eq!(channel.permission(), PushPermission::Granted);
    }

    #[tokio::test]
    async fn test_denied_is_sticky() {
        let channel =
            BroadcastPushChannel::with_permission(8, PushPermission::Denied, PushPermission::Granted);
        assert_eq!(channel.request_permission().await, PushPermission::Denied);
        assert_eq!(channel.permission(), PushPermission::Denied);
    }

    #[tokio::test]
    async fn test_dismissed_prompt_can_be_asked_again() {
        let channel = BroadcastPushChannel::new(8, PushPermission::Default);
        assert_eq!(channel.request_permission().await, PushPermission::Default);
        assert_eq!(channel.request_permission().await, PushPermission::Default);
    }

    #[tokio::test]
    async fn test_show_reaches_subscribers() {
        let channel = BroadcastPushChannel::new(8, PushPermission::Granted);
        let mut rx = channel.subscribe();
        channel.show(&message()).await.unwrap();
        let received = rx.recv().await.unwrap();
        assert_eq!(received.title, "t");
    }

    #[tokio::test]
    async fn test_show_without_subscribers_is_ok() {
        let channel = BroadcastPushChannel::new(8, PushPermission::Granted);
        channel.show(&message()).await.unwrap();
    }
}
