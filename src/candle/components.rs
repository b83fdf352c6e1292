use bevy::math::Rect;
use bevy::prelude::*;

use crate::candle::config::CandleConfig;
use crate::collision::{CollisionGroup, CollisionHit, HitResponse};
use crate::editor::{ObjectOption, ObjectSettings, PropertyValue};
use crate::particles::SpriteParticle;
use crate::random::RandomSource;
use crate::render::{DrawingContext, RenderTarget, TargetScope};
use crate::scene::ObjectSink;
use crate::sprite::{AnchorPoint, AnimatedSprite, Blend, MovingSprite, LAYER_BACKGROUNDTILES};

pub const CANDLE_SPRITE: &str = "images/objects/candle/candle";
pub const CANDLE_SIZE: Vec2 = Vec2::new(16.0, 32.0);
pub const CANDLE_LIGHT_SPRITE: &str = "images/objects/candle/candle-light-1";
pub const CANDLE_LIGHT_DIM_SPRITE: &str = "images/objects/candle/candle-light-2";
pub const CANDLE_LIGHT_SIZE: Vec2 = Vec2::new(64.0, 64.0);
pub const SMOKE_SPRITE: &str = "images/objects/particles/smoke";
pub const SMOKE_SIZE: Vec2 = Vec2::new(16.0, 16.0);

/// Initial smoke velocity: straight up.
pub const SMOKE_VELOCITY: Vec2 = Vec2::new(0.0, -150.0);
/// Light action used when a tint is configured. It carries no color of its own.
pub const TINTED_LIGHT_ACTION: &str = "white";
/// One in this many draws of a flickering candle uses the dim light.
pub const FLICKER_ODDS: u32 = 10;

/// Base sprite action for a burning state.
pub fn burning_action(burning: bool) -> &'static str {
    if burning {
        "on"
    } else {
        "off"
    }
}

/// A candle: scenery that can be lit and put out, casting light on the lightmap.
#[derive(Component, Clone, Debug)]
pub struct Candle {
    name: String,
    burning: bool,
    flicker: bool,
    light_color: Color,
    base: MovingSprite,
    light: AnimatedSprite,
    light_dim: AnimatedSprite,
}

impl Candle {
    pub fn new(config: &CandleConfig) -> Self {
        let burning = config.burning.unwrap_or(true);
        let mut candle = Self {
            name: config.name.clone().unwrap_or_default(),
            burning,
            flicker: config.flicker.unwrap_or(true),
            light_color: Color::WHITE,
            base: MovingSprite::new(
                config.position(),
                LAYER_BACKGROUNDTILES + 1,
                CollisionGroup::Disabled,
                AnimatedSprite::new(CANDLE_SPRITE, CANDLE_SIZE),
            ),
            light: AnimatedSprite::new(CANDLE_LIGHT_SPRITE, CANDLE_LIGHT_SIZE)
                .with_origin(AnchorPoint::Middle),
            light_dim: AnimatedSprite::new(CANDLE_LIGHT_DIM_SPRITE, CANDLE_LIGHT_SIZE)
                .with_origin(AnchorPoint::Middle),
        };

        if let Some(color) = config.light_color() {
            candle.light_color = color;
            for light in [&mut candle.light, &mut candle.light_dim] {
                light.set_blend(Blend::Additive);
                light.set_color(color);
                light.set_action(TINTED_LIGHT_ACTION);
            }
        }

        candle.base.sprite_mut().set_action(burning_action(burning));
        candle
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn burning(&self) -> bool {
        self.burning
    }

    pub fn flicker(&self) -> bool {
        self.flicker
    }

    pub fn light_color(&self) -> Color {
        self.light_color
    }

    pub fn base(&self) -> &MovingSprite {
        &self.base
    }

    /// The regular light overlay.
    pub fn light(&self) -> &AnimatedSprite {
        &self.light
    }

    /// The darker light overlay shown on flicker frames.
    pub fn light_dim(&self) -> &AnimatedSprite {
        &self.light_dim
    }

    pub fn position(&self) -> Vec2 {
        self.base.position()
    }

    pub fn bbox(&self) -> Rect {
        self.base.bbox()
    }

    pub fn layer(&self) -> i32 {
        self.base.layer()
    }

    /// Re-applies the light tint and the base action after the editor
    /// changed properties directly.
    pub fn after_editor_set(&mut self) {
        self.light.set_color(self.light_color);
        self.light_dim.set_color(self.light_color);
        self.base.sprite_mut().set_action(burning_action(self.burning));
    }

    /// Inspector rows for this candle.
    pub fn settings(&self) -> ObjectSettings {
        let mut settings = ObjectSettings::new("candle");
        settings.options.push(ObjectOption::new(
            "Name",
            "name",
            PropertyValue::Text(self.name.clone()),
        ));
        settings.options.push(ObjectOption::new(
            "Burning",
            "burning",
            PropertyValue::Toggle(self.burning),
        ));
        settings.options.push(ObjectOption::new(
            "Flicker",
            "flicker",
            PropertyValue::Toggle(self.flicker),
        ));
        settings.options.push(ObjectOption::new(
            "Colour",
            "color",
            PropertyValue::Color(self.light_color),
        ));
        settings
    }

    /// Writes a property by its level-data key without running any side
    /// effects. Returns false when the key or value kind does not match.
    /// Callers follow up with `after_editor_set`.
    pub fn set_property(&mut self, key: &str, value: PropertyValue) -> bool {
        match (key, value) {
            ("name", PropertyValue::Text(name)) => self.name = name,
            ("burning", PropertyValue::Toggle(burning)) => self.burning = burning,
            ("flicker", PropertyValue::Toggle(flicker)) => self.flicker = flicker,
            ("color", PropertyValue::Color(color)) => self.light_color = color,
            _ => return false,
        }
        true
    }

    pub fn draw<C, R>(&self, context: &mut C, rng: &mut R)
    where
        C: DrawingContext + ?Sized,
        R: RandomSource + ?Sized,
    {
        self.base.draw(context);

        if !self.burning {
            return;
        }

        let mut lightmap = TargetScope::new(context, RenderTarget::Lightmap);
        let light = self.pick_light(rng);
        light.draw(&mut *lightmap, self.bbox().center(), 0);
    }

    /// Roughly one in ten frames of a flickering candle is drawn darker.
    fn pick_light<R>(&self, rng: &mut R) -> &AnimatedSprite
    where
        R: RandomSource + ?Sized,
    {
        if rng.rand(FLICKER_ODDS) != 0 || !self.flicker {
            &self.light
        } else {
            &self.light_dim
        }
    }

    /// Candles behave like terrain for whatever touches them.
    pub fn collision(&self, _other: Entity, _hit: &CollisionHit) -> HitResponse {
        HitResponse::ForceMove
    }

    pub fn puff_smoke<S>(&self, scene: &mut S)
    where
        S: ObjectSink + ?Sized,
    {
        scene.add_object(SpriteParticle::new(
            AnimatedSprite::new(SMOKE_SPRITE, SMOKE_SIZE),
            self.bbox().center(),
            AnchorPoint::Middle,
            SMOKE_VELOCITY,
            Vec2::ZERO,
            LAYER_BACKGROUNDTILES + 2,
        ));
    }

    pub fn set_burning<S>(&mut self, burning: bool, scene: &mut S)
    where
        S: ObjectSink + ?Sized,
    {
        if self.burning == burning {
            return;
        }
        self.burning = burning;
        self.base.sprite_mut().set_action(burning_action(burning));
        debug!("Candle '{}' is now {}", self.name, burning_action(burning));

        // Only flickering light sources smoke.
        if self.flicker {
            self.puff_smoke(scene);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;
    use crate::sprite::DEFAULT_ACTION;
    use std::collections::VecDeque;

    /// Plays back a fixed sequence of rolls.
    struct ScriptedRolls(VecDeque<u32>);

    impl ScriptedRolls {
        fn new(rolls: &[u32]) -> Self {
            Self(rolls.iter().copied().collect())
        }
    }

    impl RandomSource for ScriptedRolls {
        fn rand(&mut self, upper: u32) -> u32 {
            assert_eq!(upper, FLICKER_ODDS);
            self.0.pop_front().unwrap_or(1)
        }
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        Draw(String, RenderTarget),
        Push,
        Set(RenderTarget),
        Pop,
    }

    /// Logs every call made on the context.
    #[derive(Default)]
    struct CallLog {
        calls: Vec<Call>,
        target: RenderTarget,
        saved: Vec<RenderTarget>,
    }

    impl DrawingContext for CallLog {
        fn draw_sprite(&mut self, sprite: &AnimatedSprite, _position: Vec2, _layer: i32) {
            self.calls.push(Call::Draw(sprite.sheet().to_string(), self.target));
        }

        fn push_target(&mut self) {
            self.saved.push(self.target);
            self.calls.push(Call::Push);
        }

        fn set_target(&mut self, target: RenderTarget) {
            self.target = target;
            self.calls.push(Call::Set(target));
        }

        fn pop_target(&mut self) {
            self.target = self.saved.pop().unwrap_or_default();
            self.calls.push(Call::Pop);
        }
    }

    fn tinted_config() -> CandleConfig {
        CandleConfig {
            color: Some(vec![0.2, 0.4, 0.6]),
            ..default()
        }
    }

    mod construction_tests {
        use super::*;

        #[test]
        fn test_defaults_when_keys_missing() {
            let candle = Candle::new(&CandleConfig::default());
            assert!(candle.burning());
            assert!(candle.flicker());
            assert_eq!(candle.name(), "");
            assert_eq!(candle.light_color(), Color::WHITE);
            assert_eq!(candle.base().sprite().action(), "on");
        }

        #[test]
        fn test_reads_configured_values() {
            let candle = Candle::new(&CandleConfig {
                x: 64.0,
                y: 128.0,
                name: Some("altar".to_string()),
                burning: Some(false),
                flicker: Some(false),
                color: None,
            });
            assert!(!candle.burning());
            assert!(!candle.flicker());
            assert_eq!(candle.name(), "altar");
            assert_eq!(candle.position(), Vec2::new(64.0, 128.0));
            assert_eq!(candle.base().sprite().action(), "off");
        }

        #[test]
        fn test_candle_sits_above_background_tiles() {
            let candle = Candle::new(&CandleConfig::default());
            assert_eq!(candle.layer(), LAYER_BACKGROUNDTILES + 1);
            assert_eq!(candle.base().collision_group(), CollisionGroup::Disabled);
        }

        #[test]
        fn test_color_tints_both_lights() {
            let candle = Candle::new(&tinted_config());
            let tint = Color::srgb(0.2, 0.4, 0.6);
            assert_eq!(candle.light_color(), tint);
            for light in [candle.light(), candle.light_dim()] {
                assert_eq!(light.color(), tint);
                assert_eq!(light.blend(), Blend::Additive);
                assert_eq!(light.action(), TINTED_LIGHT_ACTION);
            }
        }

        #[test]
        fn test_no_color_leaves_lights_native() {
            let candle = Candle::new(&CandleConfig::default());
            for light in [candle.light(), candle.light_dim()] {
                assert_eq!(light.color(), Color::WHITE);
                assert_eq!(light.blend(), Blend::Alpha);
                assert_eq!(light.action(), DEFAULT_ACTION);
            }
        }

        #[test]
        fn test_short_color_leaves_lights_native() {
            let candle = Candle::new(&CandleConfig {
                color: Some(vec![0.2, 0.4]),
                ..default()
            });
            assert_eq!(candle.light_color(), Color::WHITE);
            assert_eq!(candle.light().blend(), Blend::Alpha);
            assert_eq!(candle.light_dim().action(), DEFAULT_ACTION);
        }
    }

    mod burning_tests {
        use super::*;

        #[test]
        fn test_self_transition_is_noop() {
            let mut candle = Candle::new(&CandleConfig::default());
            let mut scene: Vec<SpriteParticle> = Vec::new();

            candle.set_burning(true, &mut scene);
            candle.set_burning(true, &mut scene);

            assert!(candle.burning());
            assert_eq!(candle.base().sprite().action(), "on");
            assert!(scene.is_empty());
        }

        #[test]
        fn test_put_out_puffs_one_smoke() {
            let mut candle = Candle::new(&CandleConfig {
                x: 100.0,
                y: 200.0,
                ..default()
            });
            let mut scene: Vec<SpriteParticle> = Vec::new();

            candle.set_burning(false, &mut scene);

            assert!(!candle.burning());
            assert_eq!(candle.base().sprite().action(), "off");
            assert_eq!(scene.len(), 1);
            let smoke = &scene[0];
            assert_eq!(smoke.velocity, Vec2::new(0.0, -150.0));
            assert_eq!(smoke.acceleration, Vec2::ZERO);
            assert_eq!(smoke.position, candle.bbox().center());
            assert_eq!(smoke.position, Vec2::new(108.0, 216.0));
            assert_eq!(smoke.anchor, AnchorPoint::Middle);
            assert_eq!(smoke.layer, LAYER_BACKGROUNDTILES + 2);
            assert_eq!(smoke.sprite.sheet(), SMOKE_SPRITE);
            assert_eq!(smoke.sprite.action(), DEFAULT_ACTION);
        }

        #[test]
        fn test_no_smoke_without_flicker() {
            let mut candle = Candle::new(&CandleConfig {
                flicker: Some(false),
                ..default()
            });
            let mut scene: Vec<SpriteParticle> = Vec::new();

            candle.set_burning(false, &mut scene);

            assert!(!candle.burning());
            assert!(scene.is_empty());
        }

        #[test]
        fn test_relight_puffs_smoke_too() {
            let mut candle = Candle::new(&CandleConfig {
                burning: Some(false),
                ..default()
            });
            let mut scene: Vec<SpriteParticle> = Vec::new();

            candle.set_burning(true, &mut scene);

            assert_eq!(candle.base().sprite().action(), "on");
            assert_eq!(scene.len(), 1);
        }

        #[test]
        fn test_toggle_sequence_counts_real_transitions() {
            let mut candle = Candle::new(&CandleConfig::default());
            let mut scene: Vec<SpriteParticle> = Vec::new();

            for burning in [false, false, true, true, false] {
                candle.set_burning(burning, &mut scene);
            }

            assert_eq!(scene.len(), 3);
            assert!(!candle.burning());
        }
    }

    mod draw_tests {
        use super::*;

        #[test]
        fn test_unlit_candle_skips_lightmap() {
            let candle = Candle::new(&CandleConfig {
                burning: Some(false),
                ..default()
            });
            let mut log = CallLog::default();

            candle.draw(&mut log, &mut ScriptedRolls::new(&[]));

            assert_eq!(
                log.calls,
                vec![Call::Draw(CANDLE_SPRITE.to_string(), RenderTarget::Normal)]
            );
        }

        #[test]
        fn test_lit_candle_brackets_one_lightmap_draw() {
            let candle = Candle::new(&CandleConfig::default());
            let mut log = CallLog::default();

            candle.draw(&mut log, &mut ScriptedRolls::new(&[3]));

            assert_eq!(
                log.calls,
                vec![
                    Call::Draw(CANDLE_SPRITE.to_string(), RenderTarget::Normal),
                    Call::Push,
                    Call::Set(RenderTarget::Lightmap),
                    Call::Draw(CANDLE_LIGHT_SPRITE.to_string(), RenderTarget::Lightmap),
                    Call::Pop,
                ]
            );
            assert_eq!(log.target, RenderTarget::Normal);
        }

        #[test]
        fn test_zero_roll_draws_dim_light() {
            let candle = Candle::new(&CandleConfig::default());
            let mut log = CallLog::default();

            candle.draw(&mut log, &mut ScriptedRolls::new(&[0]));

            assert!(log.calls.contains(&Call::Draw(
                CANDLE_LIGHT_DIM_SPRITE.to_string(),
                RenderTarget::Lightmap
            )));
        }

        #[test]
        fn test_no_flicker_never_draws_dim_light() {
            let candle = Candle::new(&CandleConfig {
                flicker: Some(false),
                ..default()
            });
            let mut log = CallLog::default();

            candle.draw(&mut log, &mut ScriptedRolls::new(&[0, 0, 0]));
            candle.draw(&mut log, &mut ScriptedRolls::new(&[0]));

            let dim_draws = log
                .calls
                .iter()
                .filter(|call| matches!(call, Call::Draw(sheet, _) if sheet == CANDLE_LIGHT_DIM_SPRITE))
                .count();
            assert_eq!(dim_draws, 0);
        }

        #[test]
        fn test_light_is_centered_on_bbox() {
            let candle = Candle::new(&CandleConfig {
                x: 100.0,
                y: 200.0,
                ..default()
            });
            let mut list = DrawList::default();

            candle.draw(&mut list, &mut ScriptedRolls::new(&[5]));

            let light = list.commands_on(RenderTarget::Lightmap).next().unwrap();
            assert_eq!(light.center(), candle.bbox().center());
            assert_eq!(light.layer, 0);
            let base = list.commands_on(RenderTarget::Normal).next().unwrap();
            assert_eq!(base.top_left, Vec2::new(100.0, 200.0));
            assert_eq!(base.image, "images/objects/candle/candle/on.png");
        }

        #[test]
        fn test_flicker_rate_is_about_one_in_ten() {
            use crate::random::GameRng;

            let candle = Candle::new(&CandleConfig::default());
            let mut rng = GameRng::seeded(2006);
            let mut dim = 0;
            for _ in 0..10_000 {
                let mut list = DrawList::default();
                candle.draw(&mut list, &mut rng);
                let light = list.commands_on(RenderTarget::Lightmap).next().unwrap();
                if light.image.starts_with(CANDLE_LIGHT_DIM_SPRITE) {
                    dim += 1;
                }
            }
            assert!((700..1300).contains(&dim), "dim frames: {}", dim);
        }
    }

    mod editor_tests {
        use super::*;
        use crate::editor::OptionKind;

        #[test]
        fn test_settings_expose_candle_properties() {
            let candle = Candle::new(&tinted_config());
            let settings = candle.settings();

            let keys: Vec<&str> = settings.options.iter().map(|option| option.key).collect();
            assert_eq!(keys, vec!["name", "burning", "flicker", "color"]);
            assert_eq!(settings.option("burning").unwrap().kind(), OptionKind::Toggle);
            assert_eq!(
                settings.option("color").unwrap().value,
                PropertyValue::Color(Color::srgb(0.2, 0.4, 0.6))
            );
        }

        #[test]
        fn test_flicker_option_reflects_flicker_field() {
            let candle = Candle::new(&CandleConfig {
                name: Some("not a bool".to_string()),
                flicker: Some(false),
                ..default()
            });
            let option = candle.settings().option("flicker").cloned().unwrap();
            assert_eq!(option.label, "Flicker");
            assert_eq!(option.value, PropertyValue::Toggle(false));
        }

        #[test]
        fn test_set_property_rejects_mismatched_kinds() {
            let mut candle = Candle::new(&CandleConfig::default());
            assert!(!candle.set_property("burning", PropertyValue::Text("no".to_string())));
            assert!(!candle.set_property("wick", PropertyValue::Toggle(true)));
            assert!(candle.burning());
        }

        #[test]
        fn test_after_editor_set_resyncs_sprites() {
            let mut candle = Candle::new(&tinted_config());
            let tint = Color::srgb(1.0, 0.5, 0.0);

            assert!(candle.set_property("burning", PropertyValue::Toggle(false)));
            assert!(candle.set_property("color", PropertyValue::Color(tint)));
            assert_eq!(candle.base().sprite().action(), "on");

            candle.after_editor_set();

            assert_eq!(candle.base().sprite().action(), "off");
            assert_eq!(candle.light().color(), tint);
            assert_eq!(candle.light_dim().color(), tint);
        }

        #[test]
        fn test_after_editor_set_is_idempotent() {
            let mut candle = Candle::new(&tinted_config());
            candle.after_editor_set();
            let once = candle.clone();
            candle.after_editor_set();

            assert_eq!(candle.base(), once.base());
            assert_eq!(candle.light(), once.light());
            assert_eq!(candle.light_dim(), once.light_dim());
        }
    }

    #[test]
    fn test_collision_always_forces_move() {
        let candle = Candle::new(&CandleConfig::default());
        let hits = [
            CollisionHit::default(),
            CollisionHit {
                top: true,
                crush: true,
                ..default()
            },
        ];
        for hit in hits {
            assert_eq!(
                candle.collision(Entity::PLACEHOLDER, &hit),
                HitResponse::ForceMove
            );
        }
    }
}
