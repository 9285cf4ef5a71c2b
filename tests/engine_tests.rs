use windsynth::synth::propagation::{HISTORY_CAPACITY, MAX_LOOKBACK};
use windsynth::synth::{AudioProcessor, ControlParameters, Engine, ProcessSpec};

const SAMPLE_RATE: f64 = 44100.0;
const BLOCK: usize = 512;

fn prepared_engine(seed: u64) -> Engine {
    let mut engine = Engine::with_seed(seed);
    engine.prepare(SAMPLE_RATE, BLOCK);
    engine
}

fn rms(samples: &[f32]) -> f32 {
    (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt()
}

#[test]
fn test_end_to_end_default_scenario() {
    let mut engine = prepared_engine(1);
    let params = ControlParameters {
        wind_speed: 1.0,
        dist_amplitude: 0.75,
        whistle_amplitude: 0.75,
        howl_amplitude: 0.75,
        dist_pan: 0.5,
        whistle_pan1: 0.5,
        whistle_pan2: 0.5,
        howl_pan1: 0.5,
        howl_pan2: 0.5,
        master_gain: 0.5,
        ..ControlParameters::default()
    };

    let mut left = vec![0.0; BLOCK];
    let mut right = vec![0.0; BLOCK];
    let mut block_rms = Vec::with_capacity(100);
    for _ in 0..100 {
        engine.process(&mut left, &mut right, &params);
        for sample in left.iter().chain(right.iter()) {
            assert!(sample.is_finite(), "non-finite sample {}", sample);
            assert!(sample.abs() < 10.0, "unbounded sample {}", sample);
        }
        block_rms.push((rms(&left) + rms(&right)) * 0.5);
    }

    let early: f32 = block_rms[20..60].iter().sum::<f32>() / 40.0;
    let late: f32 = block_rms[60..100].iter().sum::<f32>() / 40.0;
    println!("early rms {}, late rms {}", early, late);
    assert!(late > 0.0);
    assert!(late < early * 4.0, "energy keeps growing: {} -> {}", early, late);
}

#[test]
fn test_loud_settings_stay_finite() {
    let mut engine = prepared_engine(2);
    let mut params = ControlParameters::default();
    params.master_gain = 1.0;
    params.dist_amplitude = 1.5;
    params.whistle_amplitude = 1.5;
    params.howl_amplitude = 1.5;
    params.dist_intensity = 50.0;
    params.dist_resonance = 50.0;

    let mut left = vec![0.0; BLOCK];
    let mut right = vec![0.0; BLOCK];
    for block in 0..300 {
        // Sweep the wind so every layer passes through its active range
        params.wind_speed = 0.01 + 39.99 * (block as f32 / 299.0);
        engine.process(&mut left, &mut right, &params);
        assert!(left.iter().chain(right.iter()).all(|s| s.is_finite()));
    }
}

#[test]
fn test_silence_at_minimum_settings() {
    let mut engine = prepared_engine(3);
    let mut params = ControlParameters::minimum();
    params.master_gain = 1.0;

    let mut left = vec![0.0; BLOCK];
    let mut right = vec![0.0; BLOCK];
    let mut peak = 0.0f32;
    for _ in 0..(SAMPLE_RATE as usize / BLOCK + 1) {
        engine.process(&mut left, &mut right, &params);
        for sample in left.iter().chain(right.iter()) {
            peak = peak.max(sample.abs());
        }
    }
    assert!(peak < 1e-3, "peak {}", peak);
}

#[test]
fn test_master_gain_zero_mutes_output() {
    let mut engine = prepared_engine(4);
    let mut params = ControlParameters::default();
    params.master_gain = 0.0;
    params.wind_speed = 25.0;

    let mut left = vec![1.0; BLOCK];
    let mut right = vec![1.0; BLOCK];
    for _ in 0..50 {
        engine.process(&mut left, &mut right, &params);
        assert!(left.iter().chain(right.iter()).all(|s| *s == 0.0));
    }
}

#[test]
fn test_process_overwrites_previous_contents() {
    let mut a = prepared_engine(5);
    let mut b = prepared_engine(5);
    let params = ControlParameters::default();

    let mut left_a = vec![0.0; BLOCK];
    let mut right_a = vec![0.0; BLOCK];
    let mut left_b = vec![123.0; BLOCK];
    let mut right_b = vec![-7.0; BLOCK];
    a.process(&mut left_a, &mut right_a, &params);
    b.process(&mut left_b, &mut right_b, &params);
    assert_eq!(left_a, left_b);
    assert_eq!(right_a, right_b);
}

#[test]
fn test_same_seed_renders_identically() {
    let mut a = prepared_engine(99);
    let mut b = prepared_engine(99);
    let mut params = ControlParameters::default();

    let mut left_a = vec![0.0; BLOCK];
    let mut right_a = vec![0.0; BLOCK];
    let mut left_b = vec![0.0; BLOCK];
    let mut right_b = vec![0.0; BLOCK];
    for block in 0..40 {
        params.wind_speed = 5.0 + block as f32 * 0.5;
        a.process(&mut left_a, &mut right_a, &params);
        b.process(&mut left_b, &mut right_b, &params);
        assert_eq!(left_a, left_b);
        assert_eq!(right_a, right_b);
    }
}

#[test]
fn test_pan_delays_wind_speed_for_whistle_and_howl_taps() {
    let mut engine = prepared_engine(6);
    let mut params = ControlParameters::default();
    params.whistle_pan1 = 0.0;
    params.whistle_pan2 = 1.0;
    params.howl_pan1 = 0.5;
    params.howl_pan2 = 1.0;

    let mut left = vec![0.0; BLOCK];
    let mut right = vec![0.0; BLOCK];
    params.wind_speed = 2.0;
    for _ in 0..30 {
        engine.process(&mut left, &mut right, &params);
    }

    params.wind_speed = 30.0;
    for block in 0..=MAX_LOOKBACK {
        engine.process(&mut left, &mut right, &params);
        let whistle = engine.whistle_taps();
        let howl = engine.howl_taps();

        let newest = engine.history().newest_index();
        assert_eq!(whistle[0].read_index(), newest);
        assert_eq!(
            howl[0].read_index(),
            (newest + HISTORY_CAPACITY - MAX_LOOKBACK / 2) % HISTORY_CAPACITY
        );
        assert_eq!(
            whistle[1].read_index(),
            (newest + HISTORY_CAPACITY - MAX_LOOKBACK) % HISTORY_CAPACITY
        );
        assert_eq!(howl[1].read_index(), whistle[1].read_index());

        // Centre-left tap follows immediately
        assert_eq!(whistle[0].wind_speed(), 30.0);
        let expected_half = if block >= MAX_LOOKBACK / 2 { 30.0 } else { 2.0 };
        assert_eq!(howl[0].wind_speed(), expected_half, "block {}", block);
        let expected_full = if block >= MAX_LOOKBACK { 30.0 } else { 2.0 };
        assert_eq!(whistle[1].wind_speed(), expected_full, "block {}", block);
        assert_eq!(howl[1].wind_speed(), expected_full, "block {}", block);
    }
}

#[test]
fn test_update_settings_retunes_filters() {
    let mut engine = prepared_engine(7);
    let mut params = ControlParameters::default();
    params.wind_speed = 10.0;
    params.dist_intensity = 20.0;
    params.dist_resonance = 3.0;
    params.whistle_pan1 = 0.0;
    params.whistle_pan2 = 0.0;

    let mut left = vec![0.0; BLOCK];
    let mut right = vec![0.0; BLOCK];
    engine.process(&mut left, &mut right, &params);

    assert_eq!(engine.distant().filter().cutoff_frequency(), 200.0);
    assert_eq!(engine.distant().filter().resonance(), 3.0);
    assert_eq!(engine.whistle().cutoffs(), [680.0, 1200.0]);
}

#[test]
fn test_history_advances_once_per_block_regardless_of_length() {
    let mut engine = prepared_engine(8);
    let params = ControlParameters::default();

    let mut short_left = vec![0.0; 16];
    let mut short_right = vec![0.0; 16];
    let mut long_left = vec![0.0; 2048];
    let mut long_right = vec![0.0; 2048];
    engine.process(&mut short_left, &mut short_right, &params);
    engine.process(&mut long_left, &mut long_right, &params);
    engine.process(&mut short_left, &mut short_right, &params);
    assert_eq!(engine.history().write_index(), 3);
}

#[test]
fn test_prepare_resets_to_silence() {
    let mut engine = prepared_engine(9);
    let mut params = ControlParameters::default();
    params.wind_speed = 25.0;

    let mut left = vec![0.0; BLOCK];
    let mut right = vec![0.0; BLOCK];
    for _ in 0..50 {
        engine.process(&mut left, &mut right, &params);
    }
    assert!(engine.howl().envelopes()[0] > 0.0);

    engine.prepare(48000.0, 256);
    assert_eq!(
        engine.spec(),
        Some(ProcessSpec {
            sample_rate: 48000.0,
            block_size: 256
        })
    );
    assert_eq!(engine.history().write_index(), 0);
    assert_eq!(engine.howl().envelopes(), [0.0, 0.0]);
    assert_eq!(engine.whistle().amp_mods(), [0.0, 0.0]);
    assert_eq!(engine.distant().filter().cutoff_frequency(), 10.0);

    // Preparing twice in a row is harmless
    engine.prepare(48000.0, 256);
    assert!(engine.is_prepared());
}

#[test]
fn test_reset_clears_runtime_state() {
    let mut engine = prepared_engine(10);
    let mut params = ControlParameters::default();
    params.wind_speed = 25.0;

    let mut left = vec![0.0; BLOCK];
    let mut right = vec![0.0; BLOCK];
    for _ in 0..50 {
        engine.process(&mut left, &mut right, &params);
    }

    AudioProcessor::reset(&mut engine);
    assert_eq!(engine.history().write_index(), 0);
    assert_eq!(engine.howl().envelopes(), [0.0, 0.0]);
    assert!(engine.is_prepared());

    // After a reset the first block at low wind speed is quiet again
    params.wind_speed = 0.01;
    engine.process(&mut left, &mut right, &params);
    assert!(left.iter().chain(right.iter()).all(|s| s.abs() < 0.1));
}

#[test]
fn test_process_spec_validation() {
    assert!(ProcessSpec::new(44100.0, 512).is_ok());
    assert!(ProcessSpec::new(0.0, 512).is_err());
    assert!(ProcessSpec::new(-1.0, 512).is_err());
    assert!(ProcessSpec::new(f64::NAN, 512).is_err());
    assert!(ProcessSpec::new(44100.0, 0).is_err());

    let spec = ProcessSpec::new(44100.0, 441).unwrap();
    assert!((spec.block_rate() - 100.0).abs() < 1e-9);
}
