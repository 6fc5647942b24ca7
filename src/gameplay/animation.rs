use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::{AnimationMode, Player};
use crate::core::system::system_order::PostPhysicsAdjustSet;

/// A contiguous run of atlas frames played at a fixed rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clip {
    pub start: usize,
    pub len: usize,
    pub fps: f32,
}

// Frame layout of the player spritesheet.
pub const CLIP_RUN: Clip = Clip { start: 0, len: 6, fps: 20.0 };
pub const CLIP_JUMP: Clip = Clip { start: 7, len: 1, fps: 20.0 };
pub const CLIP_IDLE: Clip = Clip { start: 12, len: 2, fps: 4.0 };

pub fn clip_for(mode: AnimationMode) -> Clip {
    match mode {
        AnimationMode::Idle => CLIP_IDLE,
        AnimationMode::Run => CLIP_RUN,
        AnimationMode::Jump => CLIP_JUMP,
    }
}

/// Frame-advance state for one animated sprite.
#[derive(Component, Debug)]
pub struct Anim {
    pub clip: Clip,
    pub timer: Timer,
}

impl Anim {
    pub fn from_clip(clip: Clip) -> Self {
        Self {
            clip,
            timer: Timer::from_seconds(1.0 / clip.fps.max(1.0), TimerMode::Repeating),
        }
    }

    /// Switch clips, snapping to the new clip's first frame. No-op when the
    /// clip is unchanged so mid-cycle frames are not reset.
    pub fn set_clip(&mut self, clip: Clip, atlas_index: &mut usize) {
        if self.clip == clip {
            return;
        }
        self.clip = clip;
        self.timer = Timer::from_seconds(1.0 / clip.fps.max(1.0), TimerMode::Repeating);
        *atlas_index = clip.start;
    }
}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (sync_player_clip, advance_frames)
                .chain()
                .in_set(PostPhysicsAdjustSet)
                .run_if(in_state(AppState::Playing)),
        );
    }
}

/// Swap the player's clip whenever the per-frame animation selection changed.
fn sync_player_clip(
    mut q_player: Query<(&AnimationMode, &mut Anim, &mut Sprite), (With<Player>, Changed<AnimationMode>)>,
) {
    for (mode, mut anim, mut sprite) in &mut q_player {
        let Some(atlas) = sprite.texture_atlas.as_mut() else {
            continue;
        };
        anim.set_clip(clip_for(*mode), &mut atlas.index);
    }
}

/// Advance every animated sprite within its current clip.
fn advance_frames(time: Res<Time>, mut q_anim: Query<(&mut Anim, &mut Sprite)>) {
    for (mut anim, mut sprite) in &mut q_anim {
        anim.timer.tick(time.delta());
        if !anim.timer.just_finished() || anim.clip.len == 0 {
            continue;
        }
        let Some(atlas) = sprite.texture_atlas.as_mut() else {
            continue;
        };
        let clip = anim.clip;
        if atlas.index < clip.start || atlas.index >= clip.start + clip.len {
            atlas.index = clip.start;
            continue;
        }
        let local = atlas.index - clip.start;
        atlas.index = clip.start + (local + 1) % clip.len;
    }
}
