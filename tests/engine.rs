use std::collections::HashSet;

use wardrobe_rs::{
    Category, ImageHandle, ItemEdit, ItemId, NewItem, Season, ValidationError, Wardrobe,
    WardrobeError,
};

fn fall_basics(seed: u64) -> (Wardrobe, ItemId, ItemId, ItemId) {
    let mut w = Wardrobe::seeded(seed);
    let t1 = w
        .add_item(NewItem::new("T1", Category::Tops, Season::Fall))
        .unwrap();
    let b1 = w
        .add_item(NewItem::new("B1", Category::Bottoms, Season::Fall))
        .unwrap();
    let s1 = w
        .add_item(NewItem::new("S1", Category::Shoes, Season::AllSeasons))
        .unwrap();
    (w, t1, b1, s1)
}

#[test]
fn daily_outfit_for_fall_basics_is_always_complete() {
    for seed in 0..25 {
        let (mut w, t1, b1, s1) = fall_basics(seed);
        let outfit = w.generate_daily_outfit(Season::Fall);
        let got: HashSet<_> = outfit.ids().iter().copied().collect();
        assert_eq!(got, HashSet::from([t1, b1, s1]));
        assert_eq!(w.current_outfit(), &outfit);
    }
}

#[test]
fn daily_outfit_replaces_manual_selection() {
    let (mut w, _, _, _) = fall_basics(1);
    let coat = w
        .add_item(NewItem::new("Coat", Category::Tops, Season::Winter))
        .unwrap();
    w.toggle_in_outfit(coat).unwrap();
    let outfit = w.generate_daily_outfit(Season::Summer);
    // only the all-season shoes qualify in summer
    assert_eq!(outfit.len(), 1);
    assert!(!w.current_outfit().contains(coat));
}

#[test]
fn deleting_a_worn_item_cascades_to_the_current_outfit() {
    let (mut w, t1, b1, s1) = fall_basics(2);
    w.generate_daily_outfit(Season::Fall);
    let removed = w.delete_item(b1).unwrap();
    assert_eq!(removed.name, "B1");
    assert!(!w.current_outfit().contains(b1));
    assert_eq!(w.current_outfit().len(), 2);
    assert!(w.current_outfit().contains(t1));
    assert!(w.current_outfit().contains(s1));
}

#[test]
fn deleting_an_unworn_item_leaves_the_outfit_alone() {
    let (mut w, t1, b1, s1) = fall_basics(3);
    w.toggle_in_outfit(t1).unwrap();
    w.toggle_in_outfit(s1).unwrap();
    let before = w.current_outfit().clone();
    w.delete_item(b1).unwrap();
    assert_eq!(w.current_outfit(), &before);
    assert_eq!(
        w.delete_item(b1).unwrap_err(),
        WardrobeError::UnknownItem(b1)
    );
}

#[test]
fn suggestion_queue_survives_catalog_changes() {
    let (mut w, t1, _, _) = fall_basics(4);
    w.generate_suggestions(Season::Fall).unwrap();
    let queued: Vec<_> = w.suggestions().iter().cloned().collect();
    w.delete_item(t1).unwrap();
    let after: Vec<_> = w.suggestions().iter().cloned().collect();
    assert_eq!(queued, after);
    // but the previewed outfit no longer shows the deleted top
    assert!(!w.current_outfit().contains(t1));
}

#[test]
fn deleted_items_are_not_shown_when_a_queued_outfit_comes_up() {
    let (mut w, t1, _, _) = fall_basics(5);
    w.generate_suggestions(Season::Fall).unwrap();
    w.delete_item(t1).unwrap();
    w.start_rotation().unwrap();
    for _ in 0..w.ticks_per_sweep() {
        w.tick();
    }
    assert!(!w.current_outfit().is_empty());
    assert!(!w.current_outfit().contains(t1));
    assert!(w.current_items().iter().all(|i| i.id != t1));
}

#[test]
fn suggestions_need_seasonal_items() {
    let mut w = Wardrobe::seeded(6);
    w.add_item(NewItem::new("Swim shorts", Category::Bottoms, Season::Summer))
        .unwrap();
    assert_eq!(
        w.generate_suggestions(Season::Winter),
        Err(WardrobeError::InsufficientItems)
    );
    assert!(w.suggestions().is_empty());
    assert!(w.current_outfit().is_empty());
    assert!(w.generate_suggestions(Season::Summer).is_ok());
}

#[test]
fn failed_regeneration_empties_the_previous_queue() {
    let (mut w, _, _, s1) = fall_basics(7);
    w.generate_suggestions(Season::Fall).unwrap();
    assert!(!w.suggestions().is_empty());

    // without the all-season shoes nothing qualifies in summer
    w.delete_item(s1).unwrap();
    let preview = w.current_outfit().clone();
    assert_eq!(
        w.generate_suggestions(Season::Summer),
        Err(WardrobeError::InsufficientItems)
    );
    assert!(w.suggestions().is_empty());
    assert_eq!(w.current_outfit(), &preview);
    assert_eq!(w.start_rotation(), Err(WardrobeError::EmptySuggestionQueue));
}

#[test]
fn add_validates_and_edit_mutates_in_place() {
    let mut w = Wardrobe::seeded(8);
    assert_eq!(
        w.add_item(NewItem::new("", Category::Tops, Season::Fall)),
        Err(WardrobeError::Validation(ValidationError::EmptyName))
    );
    assert!(w.catalog().is_empty());

    let id = w
        .add_item(
            NewItem::new("Blazer", Category::Tops, Season::Spring)
                .size("M")
                .color("grey"),
        )
        .unwrap();
    w.toggle_in_outfit(id).unwrap();
    w.edit_item(
        id,
        ItemEdit {
            color: Some("charcoal".into()),
            image: Some(ImageHandle::File("blazer.png".into())),
            ..ItemEdit::default()
        },
    )
    .unwrap();
    assert_eq!(w.outfit_labels(), vec!["Blazer (Tops, charcoal)".to_string()]);
    let item = w.catalog().get(id).unwrap();
    assert_eq!(item.image, ImageHandle::File("blazer.png".into()));
    assert_eq!(item.size, "M");
}
