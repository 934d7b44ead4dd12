use uuid::Uuid;

use vitanova_core::document::Document;
use vitanova_core::models::goal::GoalRecord;
use vitanova_core::models::journal::JournalEntry;
use vitanova_core::models::mood::{Mood, MoodEntry};
use vitanova_store::query::RecordView;

fn doc_with_two_owners(alice: Uuid, bob: Uuid) -> Document {
    let mut doc = Document::default();
    for owner in [alice, bob] {
        doc.journal.push(JournalEntry {
            id: Uuid::new_v4(),
            owner_id: owner,
            content: format!("entry for {owner}"),
            created_at: jiff::Timestamp::now(),
        });
        doc.goals.push(GoalRecord {
            id: Uuid::new_v4(),
            owner_id: owner,
            content: "sleep earlier".to_string(),
            completed: false,
            created_at: jiff::Timestamp::now(),
        });
        doc.moods.push(MoodEntry {
            date: jiff::civil::date(2025, 6, 1),
            mood: Mood::Neutral,
            owner_id: owner,
        });
    }
    doc
}

#[test]
fn owner_view_excludes_foreign_records() {
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let doc = doc_with_two_owners(alice, bob);

    let view = RecordView::for_owner(&doc, alice);
    assert_eq!(view.journal.len(), 1);
    assert_eq!(view.goals.len(), 1);
    assert_eq!(view.moods.len(), 1);
    assert!(view.journal.iter().all(|j| j.owner_id == alice));
    assert!(view.goals.iter().all(|g| g.owner_id == alice));
    assert!(view.moods.iter().all(|m| m.owner_id == alice));
}

#[test]
fn owner_view_passes_global_collections_through() {
    let alice = Uuid::new_v4();
    let doc = doc_with_two_owners(alice, Uuid::new_v4());

    let view = RecordView::for_owner(&doc, alice);
    assert_eq!(view.videos.len(), doc.videos.len());
    assert_eq!(view.resources.hotlines.len(), doc.resources.hotlines.len());
    assert_eq!(view.forum.len(), doc.forum.len());
}

#[test]
fn unfiltered_view_contains_every_owner() {
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let doc = doc_with_two_owners(alice, bob);

    let view = RecordView::unfiltered(&doc);
    assert_eq!(view.journal.len(), 2);
    assert_eq!(view.goals.len(), 2);
    assert_eq!(view.moods.len(), 2);
}
