use draglist::ItemKey;

use crate::key::KeyMap;
use crate::{Easing, Tween};

/// The interpolation service a render layer animates item offsets with.
///
/// The engine never computes intermediate frames itself: it only hands out targets through
/// [`Animator::set_target`] and reads the current value back with [`Animator::sample`].
/// Springs, tweens or a platform animation API can all sit behind this trait.
pub trait Animator<K> {
    /// Moves the destination for `id`. Implementations continue from the current value so
    /// that retargeting mid-flight does not jump.
    fn set_target(&mut self, id: &K, value: f32, now_ms: u64);

    /// Current animated value for `id`, `None` when it never had a target.
    fn sample(&self, id: &K, now_ms: u64) -> Option<f32>;

    /// Whether any value is still moving.
    fn is_animating(&self, now_ms: u64) -> bool;

    /// Drops state for ids that `keep` rejects.
    fn retain(&mut self, keep: &dyn Fn(&K) -> bool);
}

/// Configuration for [`TweenAnimator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimatorOptions {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for AnimatorOptions {
    fn default() -> Self {
        Self {
            duration_ms: 240,
            easing: Easing::SmoothStep,
        }
    }
}

impl AnimatorOptions {
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// An [`Animator`] backed by one [`Tween`] per id.
///
/// The first target an id receives is applied immediately; later targets retarget the
/// running tween from its current sample.
#[derive(Clone, Debug)]
pub struct TweenAnimator<K> {
    options: AnimatorOptions,
    tweens: KeyMap<K, Tween>,
}

impl<K: ItemKey> Default for TweenAnimator<K> {
    fn default() -> Self {
        Self::new(AnimatorOptions::default())
    }
}

impl<K: ItemKey> TweenAnimator<K> {
    pub fn new(options: AnimatorOptions) -> Self {
        Self {
            options,
            tweens: KeyMap::new(),
        }
    }

    pub fn options(&self) -> AnimatorOptions {
        self.options
    }

    pub fn set_options(&mut self, options: AnimatorOptions) {
        self.options = options;
    }

    pub fn tween(&self, id: &K) -> Option<&Tween> {
        self.tweens.get(id)
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

impl<K: ItemKey> Animator<K> for TweenAnimator<K> {
    fn set_target(&mut self, id: &K, value: f32, now_ms: u64) {
        match self.tweens.get_mut(id) {
            Some(tween) if tween.to == value => {}
            Some(tween) => tween.retarget(now_ms, value, self.options.duration_ms),
            None => {
                self.tweens
                    .insert(id.clone(), Tween::settled(value, now_ms, self.options.easing));
            }
        }
    }

    fn sample(&self, id: &K, now_ms: u64) -> Option<f32> {
        self.tweens.get(id).map(|t| t.sample(now_ms))
    }

    fn is_animating(&self, now_ms: u64) -> bool {
        self.tweens.values().any(|t| !t.is_done(now_ms))
    }

    fn retain(&mut self, keep: &dyn Fn(&K) -> bool) {
        self.tweens.retain(|k, _| keep(k));
    }
}
