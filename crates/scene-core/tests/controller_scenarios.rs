// Scenario tests for the Scene Controller as driven by the UI.

use ascii_scene_core::*;

/// Records every eviction request.
#[derive(Default)]
struct RecordingCache {
    evicted: Vec<String>,
}

impl AssetCache for RecordingCache {
    fn evict(&mut self, asset: &str) -> Result<(), CacheError> {
        self.evicted.push(asset.to_string());
        Ok(())
    }
}

fn logo() -> &'static ModelDescriptor {
    &MODELS[0]
}

#[test]
fn initial_state() {
    let c = SceneController::new();
    assert_eq!(c.selected_id(), logo().id);
    assert_eq!(c.derive_final_scale(), logo().base_scale * 1.0);
    assert_eq!(c.ascii(), &AsciiSettings::default());
    assert!(!c.credits_open());
}

#[test]
fn documented_defaults() {
    let s = AsciiSettings::default();
    assert_eq!(s.resolution, 0.4);
    assert_eq!(s.characters, " .:-=+*#%@");
    assert_eq!(s.fg.to_string(), "#f0ffc0");
    assert_eq!(s.bg.to_string(), "#000000");
    assert!(!s.invert);
}

#[test]
fn selecting_text_evicts_the_logo_once() {
    let mut c = SceneController::new();
    let mut cache = RecordingCache::default();
    c.select_model(TEXT_MODEL_ID, &mut cache);
    assert_eq!(c.selected_id(), TEXT_MODEL_ID);
    assert_eq!(c.derive_final_scale(), 1.0 * c.user_scale());
    assert_eq!(cache.evicted, vec![logo().id.to_string()]);
}

#[test]
fn leaving_text_never_evicts() {
    let mut c = SceneController::new();
    c.select_model(TEXT_MODEL_ID, &mut RecordingCache::default());
    let mut cache = RecordingCache::default();
    c.select_model(logo().id, &mut cache);
    c.select_model(TEXT_MODEL_ID, &mut RecordingCache::default());
    c.select_model("/elsewhere.glb", &mut cache);
    assert!(cache.evicted.is_empty());
}

#[test]
fn logo_to_text_evicts_on_the_cache_passed_in() {
    let mut c = SceneController::new();
    c.select_model(TEXT_MODEL_ID, &mut RecordingCache::default());
    c.select_model(logo().id, &mut RecordingCache::default());
    let mut cache = RecordingCache::default();
    c.select_model(TEXT_MODEL_ID, &mut cache);
    assert_eq!(cache.evicted, vec![logo().id.to_string()]);
}

#[test]
fn selecting_text_from_text_makes_no_call() {
    let mut c = SceneController::new();
    c.select_model(TEXT_MODEL_ID, &mut RecordingCache::default());
    let mut cache = RecordingCache::default();
    c.select_model(TEXT_MODEL_ID, &mut cache);
    assert!(cache.evicted.is_empty());
}

#[test]
fn reset_restores_resolution() {
    let mut c = SceneController::new();
    c.update_ascii_setting(AsciiUpdate::Resolution(0.5)).unwrap();
    assert_eq!(c.ascii().resolution, 0.5);
    c.reset_settings();
    assert_eq!(c.ascii().resolution, 0.4);
}

#[test]
fn reset_keeps_selection_and_dialog() {
    let mut c = SceneController::new();
    c.select_model(TEXT_MODEL_ID, &mut RecordingCache::default());
    c.open_credits();
    c.set_user_scale(2.5);
    c.update_ascii_setting(AsciiUpdate::Invert(true)).unwrap();
    c.reset_settings();
    assert_eq!(c.selected_id(), TEXT_MODEL_ID);
    assert!(c.credits_open());
    assert_eq!(c.user_scale(), 1.0);
    assert_eq!(c.ascii(), &AsciiSettings::default());
}

#[test]
fn effect_key_tracks_settings() {
    let mut c = SceneController::new();
    let k0 = c.ascii_key();
    c.update_ascii_setting(AsciiUpdate::Characters(RAMP_PRESETS[1].characters.into()))
        .unwrap();
    let k1 = c.ascii_key();
    assert_ne!(k0, k1);
    c.reset_settings();
    assert_eq!(c.ascii_key(), k0);
}

#[test]
fn effect_slot_rebuilds_only_on_key_change() {
    let mut c = SceneController::new();
    let mut slot: KeyedSlot<AsciiEffectKey, usize> = KeyedSlot::new();
    let mut builds = 0usize;
    let mut frame = |c: &SceneController, slot: &mut KeyedSlot<AsciiEffectKey, usize>| {
        slot.get_or_rebuild(&c.ascii_key(), |_| {
            builds += 1;
            Ok::<_, ()>(builds)
        })
        .map(|v| *v)
    };
    assert_eq!(frame(&c, &mut slot), Ok(1));
    assert_eq!(frame(&c, &mut slot), Ok(1));
    c.set_user_scale(2.0);
    assert_eq!(frame(&c, &mut slot), Ok(1));
    c.update_ascii_setting(AsciiUpdate::FgColor("#ffffff".parse().unwrap()))
        .unwrap();
    assert_eq!(frame(&c, &mut slot), Ok(2));
    assert_eq!(frame(&c, &mut slot), Ok(2));
}

#[test]
fn credits_dialog_opens_and_dismisses() {
    let mut c = SceneController::new();
    c.open_credits();
    assert!(c.credits_open());
    // escape and backdrop both dismiss through the same setter
    c.set_credits_open(false);
    assert!(!c.credits_open());
    c.set_credits_open(true);
    c.close_credits();
    assert!(!c.credits_open());
}
