//! Schema documents compiled into the crate.

/// Section documents as `(file name, text)`.
pub(crate) const SECTIONS: &[(&str, &str)] = &[
    ("track.toml", include_str!("../schema/track.toml")),
    ("name.toml", include_str!("../schema/name.toml")),
    ("master.toml", include_str!("../schema/master.toml")),
    ("fx_subslot.toml", include_str!("../schema/fx_subslot.toml")),
    ("setup.toml", include_str!("../schema/setup.toml")),
    ("pref.toml", include_str!("../schema/pref.toml")),
    ("color.toml", include_str!("../schema/color.toml")),
    ("usb.toml", include_str!("../schema/usb.toml")),
    ("midi.toml", include_str!("../schema/midi.toml")),
];

/// Effect-type tables.
pub(crate) const FX_TYPES: (&str, &str) = ("fx_types.toml", include_str!("../schema/fx_types.toml"));

/// Effect parameter documents in effect-type order.
pub(crate) const EFFECTS: &[(&str, &str)] = &[
    ("effects/lpf.toml", include_str!("../schema/effects/lpf.toml")),
    ("effects/bpf.toml", include_str!("../schema/effects/bpf.toml")),
    ("effects/hpf.toml", include_str!("../schema/effects/hpf.toml")),
    ("effects/phaser.toml", include_str!("../schema/effects/phaser.toml")),
    ("effects/flanger.toml", include_str!("../schema/effects/flanger.toml")),
    ("effects/synth.toml", include_str!("../schema/effects/synth.toml")),
    ("effects/lofi.toml", include_str!("../schema/effects/lofi.toml")),
    ("effects/radio.toml", include_str!("../schema/effects/radio.toml")),
    ("effects/ring_mod.toml", include_str!("../schema/effects/ring_mod.toml")),
    ("effects/g2b.toml", include_str!("../schema/effects/g2b.toml")),
    ("effects/sustainer.toml", include_str!("../schema/effects/sustainer.toml")),
    ("effects/auto_riff.toml", include_str!("../schema/effects/auto_riff.toml")),
    ("effects/slow_gear.toml", include_str!("../schema/effects/slow_gear.toml")),
    ("effects/transpose.toml", include_str!("../schema/effects/transpose.toml")),
    ("effects/pitch_bend.toml", include_str!("../schema/effects/pitch_bend.toml")),
    ("effects/robot.toml", include_str!("../schema/effects/robot.toml")),
    ("effects/electric.toml", include_str!("../schema/effects/electric.toml")),
    ("effects/hrm_manual.toml", include_str!("../schema/effects/hrm_manual.toml")),
    ("effects/hrm_auto.toml", include_str!("../schema/effects/hrm_auto.toml")),
    ("effects/vocoder.toml", include_str!("../schema/effects/vocoder.toml")),
    ("effects/osc_voc.toml", include_str!("../schema/effects/osc_voc.toml")),
    ("effects/osc_bot.toml", include_str!("../schema/effects/osc_bot.toml")),
    ("effects/preamp.toml", include_str!("../schema/effects/preamp.toml")),
    ("effects/dist.toml", include_str!("../schema/effects/dist.toml")),
    ("effects/dynamics.toml", include_str!("../schema/effects/dynamics.toml")),
    ("effects/eq.toml", include_str!("../schema/effects/eq.toml")),
    ("effects/isolator.toml", include_str!("../schema/effects/isolator.toml")),
    ("effects/octave.toml", include_str!("../schema/effects/octave.toml")),
    ("effects/auto_pan.toml", include_str!("../schema/effects/auto_pan.toml")),
    ("effects/manual_pan.toml", include_str!("../schema/effects/manual_pan.toml")),
    ("effects/stereo_enhance.toml", include_str!("../schema/effects/stereo_enhance.toml")),
    ("effects/tremolo.toml", include_str!("../schema/effects/tremolo.toml")),
    ("effects/vibrato.toml", include_str!("../schema/effects/vibrato.toml")),
    ("effects/pattern_slicer.toml", include_str!("../schema/effects/pattern_slicer.toml")),
    ("effects/step_slicer.toml", include_str!("../schema/effects/step_slicer.toml")),
    ("effects/delay.toml", include_str!("../schema/effects/delay.toml")),
    ("effects/panning_delay.toml", include_str!("../schema/effects/panning_delay.toml")),
    ("effects/reverse_delay.toml", include_str!("../schema/effects/reverse_delay.toml")),
    ("effects/mod_delay.toml", include_str!("../schema/effects/mod_delay.toml")),
    ("effects/tape_echo1.toml", include_str!("../schema/effects/tape_echo1.toml")),
    ("effects/tape_echo2.toml", include_str!("../schema/effects/tape_echo2.toml")),
    ("effects/granular_delay.toml", include_str!("../schema/effects/granular_delay.toml")),
    ("effects/warp.toml", include_str!("../schema/effects/warp.toml")),
    ("effects/twist.toml", include_str!("../schema/effects/twist.toml")),
    ("effects/roll1.toml", include_str!("../schema/effects/roll1.toml")),
    ("effects/roll2.toml", include_str!("../schema/effects/roll2.toml")),
    ("effects/freeze.toml", include_str!("../schema/effects/freeze.toml")),
    ("effects/chorus.toml", include_str!("../schema/effects/chorus.toml")),
    ("effects/reverb.toml", include_str!("../schema/effects/reverb.toml")),
    ("effects/gate_reverb.toml", include_str!("../schema/effects/gate_reverb.toml")),
    ("effects/reverse_reverb.toml", include_str!("../schema/effects/reverse_reverb.toml")),
    ("effects/lpf_seq.toml", include_str!("../schema/effects/lpf_seq.toml")),
    ("effects/bpf_seq.toml", include_str!("../schema/effects/bpf_seq.toml")),
    ("effects/hpf_seq.toml", include_str!("../schema/effects/hpf_seq.toml")),
    ("effects/phaser_seq.toml", include_str!("../schema/effects/phaser_seq.toml")),
    ("effects/flanger_seq.toml", include_str!("../schema/effects/flanger_seq.toml")),
    ("effects/synth_seq.toml", include_str!("../schema/effects/synth_seq.toml")),
    ("effects/lofi_seq.toml", include_str!("../schema/effects/lofi_seq.toml")),
    ("effects/radio_seq.toml", include_str!("../schema/effects/radio_seq.toml")),
    ("effects/ring_mod_seq.toml", include_str!("../schema/effects/ring_mod_seq.toml")),
    ("effects/transpose_seq.toml", include_str!("../schema/effects/transpose_seq.toml")),
    ("effects/pitch_bend_seq.toml", include_str!("../schema/effects/pitch_bend_seq.toml")),
    ("effects/robot_seq.toml", include_str!("../schema/effects/robot_seq.toml")),
    ("effects/tremolo_seq.toml", include_str!("../schema/effects/tremolo_seq.toml")),
    ("effects/vibrato_seq.toml", include_str!("../schema/effects/vibrato_seq.toml")),
    ("effects/pan_seq.toml", include_str!("../schema/effects/pan_seq.toml")),
    ("effects/beat_scatter.toml", include_str!("../schema/effects/beat_scatter.toml")),
    ("effects/beat_repeat.toml", include_str!("../schema/effects/beat_repeat.toml")),
    ("effects/beat_shift.toml", include_str!("../schema/effects/beat_shift.toml")),
    ("effects/vinyl_flick.toml", include_str!("../schema/effects/vinyl_flick.toml")),
];
