use bevy::prelude::*;

use crate::render::resources::DrawList;
use crate::render::systems::{clear_draw_list, present_draw_list};
use crate::scene::SceneSet;

pub fn plugin(app: &mut App) {
    app.init_resource::<DrawList>()
        .add_systems(Update, clear_draw_list.in_set(SceneSet::FrameStart))
        .add_systems(Update, present_draw_list.in_set(SceneSet::Present));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::components::FrameSprite;
    use crate::render::DrawingContext;
    use crate::sprite::AnimatedSprite;

    fn draw_one(mut draw_list: ResMut<DrawList>) {
        draw_list.draw_sprite(&AnimatedSprite::new("images/test", Vec2::ONE), Vec2::ZERO, 0);
    }

    #[test]
    fn test_plugin_presents_one_sprite_per_draw_each_frame() {
        let mut app = App::new();
        crate::scene::plugin(&mut app);
        plugin(&mut app);
        app.add_systems(Update, draw_one.in_set(SceneSet::Draw));

        app.update();
        app.update();
        app.update();

        let mut query = app.world_mut().query::<&FrameSprite>();
        assert_eq!(query.iter(app.world()).count(), 1);
    }
}
