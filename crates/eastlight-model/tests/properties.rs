//! Property-based tests for model edits.
//!
//! Range checks must never let a value through or corrupt the stored one,
//! and undo/redo must walk a linear history exactly.

use std::sync::{Arc, OnceLock};

use eastlight_model::{Model, ModelError};
use eastlight_rc0::{Element, ElementKind, RecordTree, Section, write};
use eastlight_schema::SchemaRegistry;
use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

fn registry() -> Arc<SchemaRegistry> {
    static REGISTRY: OnceLock<Arc<SchemaRegistry>> = OnceLock::new();
    Arc::clone(REGISTRY.get_or_init(|| {
        // RUST_LOG=eastlight_model=debug shows each change
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        Arc::new(SchemaRegistry::builtin().expect("builtin catalogue loads"))
    }))
}

fn model() -> Model {
    let tree = RecordTree::new("RC-505MK2", 0).with_element(
        Element::new(ElementKind::Mem, Some(0)).with_section(
            Section::new("TRACK1")
                .with_field("A", 0)
                .with_field("C", 50)
                .with_field("D", 100)
                .with_field("W", 1),
        ),
    );
    Model::new(tree, registry())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn range_is_enforced(value in -500i64..500) {
        let mut model = model();
        let mut track = model.track_mut(1).unwrap();
        let result = track.set_by_name("play_level", value);

        if (0..=200).contains(&value) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(track.get_by_tag("D"), Some(value));
        } else {
            let is_out_of_range = matches!(result, Err(ModelError::OutOfRange { .. }));
            prop_assert!(is_out_of_range);
            prop_assert_eq!(track.get_by_tag("D"), Some(100));
            prop_assert!(!model.can_undo());
        }
    }

    #[test]
    fn read_only_always_fails(value in any::<i64>()) {
        let mut model = model();
        let mut track = model.track_mut(1).unwrap();
        let is_read_only = matches!(
            track.set_by_name("has_audio", value),
            Err(ModelError::ReadOnly { .. })
        );
        prop_assert!(is_read_only);
        prop_assert_eq!(track.get_by_tag("W"), Some(1));
    }

    #[test]
    fn undo_redo_inverse(values in prop::collection::vec(0i64..=100, 1..20)) {
        let mut model = model();
        let original = write(model.tree());
        for &v in &values {
            model.track_mut(1).unwrap().set_by_name("pan", v).unwrap();
        }
        let edited = write(model.tree());
        let pan = |m: &Model| m.track(1).unwrap().get_by_name("pan");

        for _ in &values {
            prop_assert!(model.undo().is_some());
        }
        prop_assert!(model.undo().is_none());
        prop_assert_eq!(pan(&model), Some(50));
        prop_assert_eq!(write(model.tree()), original);

        for _ in &values {
            prop_assert!(model.redo().is_some());
        }
        prop_assert!(model.redo().is_none());
        prop_assert_eq!(pan(&model), values.last().copied());
        prop_assert_eq!(write(model.tree()), edited);
    }

    #[test]
    fn new_edit_discards_redo(
        values in prop::collection::vec(0i64..=100, 2..12),
        undos in 1usize..12,
    ) {
        let mut model = model();
        for &v in &values {
            model.track_mut(1).unwrap().set_by_name("pan", v).unwrap();
        }
        let k = undos.min(values.len());
        for _ in 0..k {
            model.undo();
        }
        prop_assert!(model.can_redo());

        model.track_mut(1).unwrap().set_by_name("pan", 33).unwrap();
        prop_assert!(!model.can_redo());
        prop_assert!(model.redo().is_none());

        model.undo();
        let expected = if k == values.len() { 50 } else { values[values.len() - k - 1] };
        prop_assert_eq!(model.track(1).unwrap().get_by_name("pan"), Some(expected));
    }
}
