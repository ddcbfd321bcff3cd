//! Tests against the compiled-in device catalogue.

use eastlight_schema::{
    FieldKind, FxChain, SchemaError, SchemaMatch, SchemaRegistry, SectionSchema, Subslot,
};
use std::fs;

fn registry() -> SchemaRegistry {
    SchemaRegistry::builtin().expect("builtin catalogue loads")
}

#[test]
fn catalogue_sizes() {
    let registry = registry();
    assert_eq!(registry.fx_effect_names().len(), 70);
    assert_eq!(registry.fx_types().ifx.len(), 66);
    assert_eq!(registry.fx_types().tfx.len(), 70);
}

#[test]
fn every_track_effect_has_a_schema() {
    let registry = registry();
    for (index, name) in registry.fx_types().tfx.iter() {
        assert!(
            registry.fx_effect(name).is_some(),
            "tfx {index} ({name}) has no schema"
        );
    }
}

#[test]
fn effect_type_indexes() {
    let registry = registry();
    let fx = registry.fx_types();
    assert_eq!(fx.ifx_name(0), Some("LPF"));
    assert_eq!(fx.ifx_name(35), Some("DELAY"));
    assert_eq!(fx.ifx_name(48), Some("REVERB"));
    assert_eq!(fx.ifx_name(66), None);
    assert_eq!(fx.tfx_name(66), Some("BEAT_SCATTER"));
    assert_eq!(fx.tfx_name(69), Some("VINYL_FLICK"));
    assert_eq!(fx.tfx_name(70), None);
    assert_eq!(fx.index(FxChain::Input, "Reverb"), Some(48));
    assert_eq!(fx.ifx_index("beat_scatter"), None);
}

#[test]
fn every_prefix_and_effect_resolves() {
    let registry = registry();
    for subslot in Subslot::all() {
        for effect in registry.fx_effect_names() {
            let name = subslot.effect_section(effect);
            match registry.resolve_match(&name) {
                Some(SchemaMatch::Effect {
                    subslot: s,
                    effect: e,
                    schema,
                }) => {
                    assert_eq!(s, subslot);
                    assert_eq!(e, effect);
                    assert_eq!(schema.section(), effect);
                }
                other => panic!("{name} resolved to {other:?}"),
            }
        }
    }
}

#[test]
fn invalid_prefix_or_suffix_is_absent() {
    let registry = registry();
    assert!(registry.resolve("AE_DELAY").is_none());
    assert!(registry.resolve("EA_DELAY").is_none());
    assert!(registry.resolve("A_DELAY").is_none());
    assert!(registry.resolve("AA_CHORUSES").is_none());
    assert!(registry.resolve("AA_").is_none());
    assert!(registry.resolve("UNKNOWN").is_none());
}

#[test]
fn seq_effects_keep_underscored_suffix() {
    let registry = registry();
    let seq = registry.resolve("AB_LPF_SEQ").unwrap();
    assert_eq!(seq.section(), "LPF_SEQ");
    assert_eq!(seq.len(), 22);
    assert_eq!(registry.resolve("AB_LPF").unwrap().section(), "LPF");
}

#[test]
fn subslot_headers_resolve_by_instance() {
    let registry = registry();
    for subslot in Subslot::all() {
        let name = subslot.to_string();
        let schema = registry.resolve(&name).unwrap();
        assert_eq!(schema.section(), "FX_SUBSLOT");
        assert_eq!(schema.tag_to_name("C"), Some("fx_type"));
        assert_eq!(schema.tag_to_name("A"), Some("sw"));
    }
}

#[test]
fn track_fields() {
    let registry = registry();
    for n in 1..=6 {
        let name = format!("TRACK{n}");
        assert!(
            matches!(registry.resolve_match(&name), Some(SchemaMatch::Instance(_))),
            "{name}"
        );
    }

    let track = registry.resolve("TRACK4").unwrap();
    let pan = track.field_by_name("pan").unwrap();
    assert_eq!(pan.tag, "C");
    assert_eq!(pan.range, Some((0, 100)));

    let level = track.field("D").unwrap();
    assert_eq!(level.name, "play_level");
    assert_eq!(level.range, Some((0, 200)));

    let has_audio = track.field_by_name("has_audio").unwrap();
    assert_eq!(has_audio.kind, FieldKind::Bool);
    assert!(has_audio.read_only);

    let reverse = track.field_by_name("reverse").unwrap();
    assert_eq!(reverse.kind, FieldKind::Enum);
    assert_eq!(reverse.format_value(1), "ON");
}

#[test]
fn system_sections() {
    let registry = registry();
    let pref = registry.resolve("PREF").unwrap();
    assert_eq!(pref.len(), 20);
    assert_eq!(pref.name_to_tag("pref_main"), Some("A"));
    assert_eq!(pref.name_to_tag("pref_eq"), Some("K"));
    assert_eq!(pref.name_to_tag("pref_track"), Some("N"));
    assert_eq!(pref.field("K").unwrap().code_for("memory"), Some(1));

    for name in ["SETUP", "COLOR", "USB", "MIDI", "MASTER", "NAME"] {
        assert!(registry.section_types().contains(&name), "{name}");
    }
    assert_eq!(registry.resolve("NAME").unwrap().len(), 12);
}

#[test]
fn master_fields() {
    let registry = registry();
    let master = registry.resolve("MASTER").unwrap();
    assert_eq!(master.field_names(), ["level", "comp", "tempo_x10"]);

    let tempo = master.field_by_name("tempo_x10").unwrap();
    assert_eq!(tempo.tag, "C");
    assert_eq!(tempo.kind, FieldKind::Int);
    assert_eq!(tempo.range, Some((400, 3000)));
    assert_eq!(tempo.unit.as_deref(), Some("BPM x10"));
    assert!(tempo.accepts(800));
    assert!(!tempo.accepts(399));

    let track_tempo = registry.resolve("TRACK1").unwrap().field_by_name("tempo_x10").unwrap();
    assert_eq!(tempo.range, track_tempo.range);
}

#[test]
fn effect_units_format() {
    let registry = registry();
    let delay = registry.resolve("AA_DELAY").unwrap();
    assert_eq!(delay.field_by_name("time").unwrap().format_value(400), "400 ms");
}

#[test]
fn load_dir_reads_layout() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("effects")).unwrap();
    fs::write(
        dir.path().join("track.toml"),
        r#"
section = "TRACK"
instances = ["TRACK1", "TRACK2"]

[[fields]]
tag = "C"
name = "pan"
range = [0, 100]
"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("fx_types.toml"),
        "[ifx]\n0 = \"LPF\"\n[tfx]\n0 = \"LPF\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("effects").join("lpf.toml"),
        "section = \"LPF\"\n[[fields]]\ntag = \"A\"\nname = \"rate\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let registry = SchemaRegistry::load_dir(dir.path()).unwrap();
    assert_eq!(registry.section_types(), ["TRACK"]);
    assert_eq!(registry.fx_effect_names(), ["LPF"]);
    assert_eq!(registry.fx_types().tfx_name(0), Some("LPF"));
    assert_eq!(registry.resolve("TRACK2").unwrap().name_to_tag("pan"), Some("C"));
    assert_eq!(registry.resolve("DD_LPF").unwrap().tag_to_name("A"), Some("rate"));
}

#[test]
fn load_dir_reports_bad_document() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.toml"), "section = [").unwrap();
    let err = SchemaRegistry::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, SchemaError::TomlParse { ref origin, .. } if origin.ends_with("broken.toml")));
}

#[test]
fn load_dir_missing_directory() {
    let err = SchemaRegistry::load_dir("/nonexistent/eastlight/schema").unwrap_err();
    assert!(matches!(err, SchemaError::ReadFile { .. }));
}

#[test]
fn load_single_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("master.toml");
    fs::write(
        &path,
        "section = \"MASTER\"\n[[fields]]\ntag = \"A\"\nname = \"level\"\nunit = \"dB\"\n",
    )
    .unwrap();
    let schema = SectionSchema::load(&path).unwrap();
    assert_eq!(schema.field("A").unwrap().format_value(3), "3 dB");
}
