//! Property tests for the Scene Controller.
//!
//! 1. Final scale with user scale 1 equals the base scale of every entry
//! 2. Final scale is linear in the user scale
//! 3. Reset is idempotent and lands on the defaults
//! 4. A single-field ASCII update touches only that field

use ascii_scene_core::*;
use proptest::prelude::*;

struct NullCache;

impl AssetCache for NullCache {
    fn evict(&mut self, _asset: &str) -> Result<(), CacheError> {
        Ok(())
    }
}

fn update_strategy() -> impl Strategy<Value = AsciiUpdate> {
    prop_oneof![
        (RESOLUTION_MIN..=RESOLUTION_MAX).prop_map(AsciiUpdate::Resolution),
        "[ -~]{1,20}".prop_map(AsciiUpdate::Characters),
        any::<[u8; 3]>().prop_map(|c| AsciiUpdate::FgColor(Rgb(c))),
        any::<[u8; 3]>().prop_map(|c| AsciiUpdate::BgColor(Rgb(c))),
        any::<bool>().prop_map(AsciiUpdate::Invert),
    ]
}

fn settings_strategy() -> impl Strategy<Value = AsciiSettings> {
    prop::collection::vec(update_strategy(), 0..6).prop_map(|updates| {
        let mut s = AsciiSettings::default();
        for u in updates {
            s.apply(u).unwrap();
        }
        s
    })
}

#[test]
fn unit_user_scale_yields_base_scale() {
    for model in MODELS.iter() {
        let mut c = SceneController::new();
        c.select_model(model.id, &mut NullCache);
        c.set_user_scale(1.0);
        assert_eq!(c.derive_final_scale(), model.base_scale);
    }
}

proptest! {
    #[test]
    fn final_scale_is_linear_in_user_scale(
        model_index in 0usize..MODELS.len(),
        s in USER_SCALE_MIN..=USER_SCALE_MAX,
    ) {
        let mut c = SceneController::new();
        c.select_model(MODELS[model_index].id, &mut NullCache);
        c.set_user_scale(s);
        let expected = MODELS[model_index].base_scale * s;
        prop_assert!((c.derive_final_scale() - expected).abs() <= 1e-6 * expected.max(1.0));
    }

    #[test]
    fn reset_is_idempotent(
        start in settings_strategy(),
        scale in USER_SCALE_MIN..=USER_SCALE_MAX,
    ) {
        let mut c = SceneController::new();
        c.set_user_scale(scale);
        for u in [
            AsciiUpdate::Resolution(start.resolution),
            AsciiUpdate::Characters(start.characters.clone()),
            AsciiUpdate::FgColor(start.fg),
            AsciiUpdate::BgColor(start.bg),
            AsciiUpdate::Invert(start.invert),
        ] {
            c.update_ascii_setting(u).unwrap();
        }
        c.reset_settings();
        let once = c.clone();
        c.reset_settings();
        prop_assert_eq!(&once, &c);
        prop_assert_eq!(c.ascii(), &AsciiSettings::default());
        prop_assert_eq!(c.user_scale(), 1.0);
    }

    #[test]
    fn update_changes_exactly_one_field(
        start in settings_strategy(),
        update in update_strategy(),
    ) {
        let mut s = start.clone();
        s.apply(update.clone()).unwrap();
        let mut expected = start.clone();
        match update {
            AsciiUpdate::Resolution(r) => expected.resolution = r,
            AsciiUpdate::Characters(ch) => expected.characters = ch,
            AsciiUpdate::FgColor(c) => expected.fg = c,
            AsciiUpdate::BgColor(c) => expected.bg = c,
            AsciiUpdate::Invert(v) => expected.invert = v,
        }
        prop_assert_eq!(s, expected);
    }
}
