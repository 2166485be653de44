use mosaic_desk::config::WorkspaceConfig;
use mosaic_desk::content::ContentDescriptor;
use mosaic_desk::window::{StackOrder, WindowDefinition, WindowId, Workspace};
use proptest::prelude::*;

fn workspace(ids: &[String]) -> Workspace {
    let definitions = ids
        .iter()
        .map(|id| WindowDefinition::new(id.as_str(), id.as_str(), ContentDescriptor::text(id, "")))
        .collect();
    Workspace::new(definitions, WorkspaceConfig::default()).expect("distinct ids")
}

fn names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("w{i}")).collect()
}

fn order(stack: &[WindowId]) -> Vec<String> {
    stack.iter().map(|id| id.as_str().to_owned()).collect()
}

#[test]
fn explore_page_focus_walkthrough() {
    let ids: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let mut ws = workspace(&ids);
    assert_eq!(ws.focused().map(WindowId::as_str), Some("a"));

    ws.bring_to_front("c");
    assert_eq!(order(ws.stack_order()), ["c", "a", "b"]);
    assert_eq!(
        ["a", "b", "c"].map(|id| ws.z_index_of(id)),
        [Some(999), Some(998), Some(1000)]
    );

    ws.bring_to_front("c");
    assert_eq!(order(ws.stack_order()), ["c", "a", "b"]);

    ws.bring_to_front("b");
    assert_eq!(order(ws.stack_order()), ["b", "c", "a"]);
    assert_eq!(ws.focused().map(WindowId::as_str), Some("b"));
}

#[test]
fn custom_z_base_shifts_every_window() {
    let ids = names(3);
    let definitions = ids
        .iter()
        .map(|id| WindowDefinition::new(id.as_str(), id.as_str(), ContentDescriptor::text(id, "")))
        .collect();
    let ws = Workspace::new(definitions, WorkspaceConfig::default().with_z_base(10))
        .expect("base above window count");
    assert_eq!(ws.z_index_of("w0"), Some(10));
    assert_eq!(ws.z_index_of("w2"), Some(8));
}

/// A focus target: an index into the known ids, or past them for an id the
/// workspace has never seen.
fn target(count: usize, pick: usize) -> String {
    if pick < count {
        format!("w{pick}")
    } else {
        format!("ghost{pick}")
    }
}

proptest! {
    #[test]
    fn stack_stays_a_permutation(count in 1usize..8, picks in prop::collection::vec(0usize..12, 0..40)) {
        let ids = names(count);
        let mut ws = workspace(&ids);
        for pick in picks {
            ws.bring_to_front(&target(count, pick));
            let mut seen = order(ws.stack_order());
            seen.sort();
            let mut expected = ids.clone();
            expected.sort();
            prop_assert_eq!(seen, expected);
        }
    }

    #[test]
    fn z_indices_follow_the_stack(count in 1usize..8, picks in prop::collection::vec(0usize..12, 0..40)) {
        let ids = names(count);
        let mut ws = workspace(&ids);
        for pick in picks {
            ws.bring_to_front(&target(count, pick));
        }
        let z: Vec<i32> = ws
            .stack_order()
            .iter()
            .filter_map(|id| ws.z_index_of(id.as_str()))
            .collect();
        prop_assert_eq!(z.len(), count);
        prop_assert!(z.windows(2).all(|pair| pair[0] == pair[1] + 1));
        prop_assert_eq!(z.first().copied(), Some(1000));
    }

    #[test]
    fn focus_raises_target_and_keeps_the_rest(count in 1usize..8, start in prop::collection::vec(0usize..8, 0..10), pick in 0usize..8) {
        let ids = names(count);
        let mut ws = workspace(&ids);
        for p in start {
            ws.bring_to_front(&target(count, p % count));
        }
        let before = order(ws.stack_order());
        let id = target(count, pick % count);
        ws.bring_to_front(&id);
        let after = order(ws.stack_order());

        prop_assert_eq!(after.first(), Some(&id));
        let rest_before: Vec<_> = before.iter().filter(|other| **other != id).collect();
        let rest_after: Vec<_> = after.iter().skip(1).collect();
        prop_assert_eq!(rest_before, rest_after);

        // a second focus of the same window changes nothing
        ws.bring_to_front(&id);
        prop_assert_eq!(order(ws.stack_order()), after);
    }

    #[test]
    fn unknown_ids_never_change_the_order(count in 0usize..6, picks in prop::collection::vec(0usize..6, 0..10)) {
        let ids = names(count);
        let mut stack = StackOrder::new(ids.iter().map(|id| WindowId::from(id.as_str())))
            .expect("distinct ids");
        for pick in &picks {
            stack.bring_to_front(&target(count, *pick % count.max(1)));
        }
        let before = order(stack.as_slice());
        prop_assert!(!stack.bring_to_front("nonexistent"));
        prop_assert_eq!(order(stack.as_slice()), before);
    }
}
