use crate::database::activity_store::ActivityStore;
use crate::models::ActivityRegistry;

/// Outcome of a participant insert/delete against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipChange {
    Applied,
    ActivityMissing,
    // insert: email already present; delete: email absent
    Unchanged,
}

pub async fn list_all(store: &ActivityStore) -> ActivityRegistry {
    store.read().await.clone()
}

pub async fn insert_participant(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> MembershipChange {
    let mut registry = store.write().await;
    let Some(activity) = registry.get_mut(activity_name) else {
        return MembershipChange::ActivityMissing;
    };
    if activity.has_participant(email) {
        return MembershipChange::Unchanged;
    }
    activity.participants.push(email.to_string());
    MembershipChange::Applied
}

pub async fn delete_participant(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> MembershipChange {
    let mut registry = store.write().await;
    let Some(activity) = registry.get_mut(activity_name) else {
        return MembershipChange::ActivityMissing;
    };
    let Some(idx) = activity.participants.iter().position(|p| p == email) else {
        return MembershipChange::Unchanged;
    };
    activity.participants.remove(idx);
    MembershipChange::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;

    async fn chess(store: &ActivityStore) -> Activity {
        list_all(store).await.get("Chess Club").cloned().unwrap()
    }

    fn store() -> ActivityStore {
        let mut registry = ActivityRegistry::new();
        registry
            .insert(
                "Chess Club",
                Activity {
                    description: "Chess".to_string(),
                    schedule: "Fridays".to_string(),
                    max_participants: 2,
                    participants: vec!["michael@mergington.edu".to_string()],
                },
            )
            .unwrap();
        ActivityStore::new(registry)
    }

    #[tokio::test]
    async fn insert_appends_in_order() {
        let store = store();
        assert_eq!(
            insert_participant(&store, "Chess Club", "a@mergington.edu").await,
            MembershipChange::Applied
        );
        assert_eq!(
            chess(&store).await.participants,
            vec!["michael@mergington.edu", "a@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn insert_ignores_capacity() {
        let store = store();
        insert_participant(&store, "Chess Club", "a@mergington.edu").await;
        let change = insert_participant(&store, "Chess Club", "b@mergington.edu").await;
        assert_eq!(change, MembershipChange::Applied);
        let club = chess(&store).await;
        assert_eq!(club.participants.len(), 3);
        assert!(club.participants.len() > club.max_participants as usize);
    }

    #[tokio::test]
    async fn insert_existing_is_unchanged() {
        let store = store();
        let change = insert_participant(&store, "Chess Club", "michael@mergington.edu").await;
        assert_eq!(change, MembershipChange::Unchanged);
        assert_eq!(chess(&store).await.participants.len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_only_target() {
        let store = store();
        insert_participant(&store, "Chess Club", "a@mergington.edu").await;
        let change = delete_participant(&store, "Chess Club", "michael@mergington.edu").await;
        assert_eq!(change, MembershipChange::Applied);
        assert_eq!(chess(&store).await.participants, vec!["a@mergington.edu"]);
        let again = delete_participant(&store, "Chess Club", "michael@mergington.edu").await;
        assert_eq!(again, MembershipChange::Unchanged);
    }

    #[tokio::test]
    async fn unknown_activity_is_missing() {
        let store = store();
        assert_eq!(
            insert_participant(&store, "Chess", "a@mergington.edu").await,
            MembershipChange::ActivityMissing
        );
        assert_eq!(
            delete_participant(&store, "chess club", "michael@mergington.edu").await,
            MembershipChange::ActivityMissing
        );
        assert_eq!(
            insert_participant(&store, "Chess Club ", "a@mergington.edu").await,
            MembershipChange::ActivityMissing
        );
    }

    #[tokio::test]
    async fn list_all_is_a_snapshot() {
        let store = store();
        let before = list_all(&store).await;
        insert_participant(&store, "Chess Club", "a@mergington.edu").await;
        assert_eq!(before.get("Chess Club").unwrap().participants.len(), 1);
        assert_eq!(list_all(&store).await.get("Chess Club").unwrap().participants.len(), 2);
    }
}
