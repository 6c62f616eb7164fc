//! Audience resolution rules — determines who receives which notifications.

use uuid::Uuid;

/// Audience for a broadcast event (a new feed post): every active user
/// except the actor. Authors do not get notified of their own posts.
pub fn broadcast_audience(active_users: &[Uuid], actor: Uuid) -> Vec<Uuid> {
    active_users
        .iter()
        .copied()
        .filter(|id| *id != actor)
        .collect()
}

/// Audience for an interaction event (like or comment on a community
/// post): the post author, unless they acted on their own post.
pub fn interaction_target(post_author: Uuid, actor: Uuid) -> Option<Uuid> {
    (post_author != actor).then_some(post_author)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_excludes_actor() {
        let actor = Uuid::new_v4();
        let others = [Uuid::new_v4(), Uuid::new_v4()];
        let active = vec![others[0], actor, others[1]];

        let audience = broadcast_audience(&active, actor);
        assert_eq!(audience, others);
    }

    #[test]
    fn test_broadcast_to_nobody_when_actor_is_only_user() {
        let actor = Uuid::new_v4();
        assert!(broadcast_audience(&[actor], actor).is_empty());
    }

    #[test]
    fn test_interaction_notifies_author() {
        let author = Uuid::new_v4();
        let actor = Uuid::new_v4();
        assert_eq!(interaction_target(author, actor), Some(author));
    }

    #[test]
    fn test_self_interaction_notifies_nobody() {
        let author = Uuid::new_v4();
        assert_eq!(interaction_target(author, author), None);
    }
}
