//! Market counter animation.
//!
//! `#market` is watched by a one-shot `IntersectionObserver`. When half of it
//! is visible the [`CounterAnimator`] goes Idle -> Running and a
//! `requestAnimationFrame` loop walks it through its steps; under reduced
//! motion it jumps straight to Settled. Interpolation is a pure function of
//! the step index, so the frame loop only decides *which* step is due.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Array;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::PageConfig;
use crate::dom;
use crate::error::{LandingError, Result};
use crate::motion::MotionPreference;
use crate::state::PageState;

/// The three headline figures of the market section (billions USD).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MarketNumbers {
    pub tam: f64,
    pub india: f64,
    pub serviceable: f64,
}

/// Final values the counters settle on.
pub const ANIMATION_TARGETS: MarketNumbers = MarketNumbers {
    tam: 50.0,
    india: 18.0,
    serviceable: 1.8,
};

impl MarketNumbers {
    pub const ZERO: Self = Self {
        tam: 0.0,
        india: 0.0,
        serviceable: 0.0,
    };

    /// Values shown at `progress` (0..=1) of the run, eased and rounded to one
    /// decimal. Never above the corresponding target.
    pub fn at_progress(targets: &Self, progress: f64) -> Self {
        let eased = ease_out_quart(progress);
        let value = |target: f64| round_tenth(target * eased).min(target);
        Self {
            tam: value(targets.tam),
            india: value(targets.india),
            serviceable: value(targets.serviceable),
        }
    }
}

/// Quartic ease-out: fast start, decelerating into 1.0.
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Round half away from zero to one decimal place.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Render a counter value: whole numbers without decimals, the rest with one.
pub fn format_figure(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CounterPhase {
    #[default]
    Idle,
    Running,
    Settled,
}

/// Step-driven state machine behind the counters.
#[derive(Clone, Debug)]
pub struct CounterAnimator {
    targets: MarketNumbers,
    steps: u32,
    step: u32,
    phase: CounterPhase,
    values: MarketNumbers,
}

impl CounterAnimator {
    pub fn new(targets: MarketNumbers, steps: u32) -> Self {
        Self {
            targets,
            steps: steps.max(1),
            step: 0,
            phase: CounterPhase::Idle,
            values: MarketNumbers::ZERO,
        }
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn values(&self) -> MarketNumbers {
        self.values
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Leave Idle. Returns `false` if the animator was already triggered.
    /// With reduced motion the run completes here, in one step.
    pub fn trigger(&mut self, motion: MotionPreference) -> bool {
        if self.phase != CounterPhase::Idle {
            return false;
        }
        if motion.reduced() {
            self.settle();
        } else {
            self.phase = CounterPhase::Running;
        }
        true
    }

    /// Move one step forward. The final step assigns the targets exactly so no
    /// rounding residue survives. `None` unless Running.
    pub fn advance(&mut self) -> Option<MarketNumbers> {
        if self.phase != CounterPhase::Running {
            return None;
        }
        self.step += 1;
        if self.step >= self.steps {
            self.settle();
        } else {
            let progress = f64::from(self.step) / f64::from(self.steps);
            self.values = MarketNumbers::at_progress(&self.targets, progress);
        }
        Some(self.values)
    }

    /// Advance until `due` steps have run (or the run ends).
    pub fn advance_to(&mut self, due: u32) -> Option<MarketNumbers> {
        let mut latest = None;
        while self.phase == CounterPhase::Running && self.step < due {
            latest = self.advance();
        }
        latest
    }

    fn settle(&mut self) {
        self.step = self.steps;
        self.values = self.targets;
        self.phase = CounterPhase::Settled;
    }
}

/// Steps due after `elapsed_ms` of a `duration_ms` run split into `steps`,
/// capped at `steps`. Scales elapsed time by the step count instead of
/// dividing by the (inexact) step length, so step k lands at exactly
/// `k * duration / steps`.
pub fn due_step(elapsed_ms: f64, duration_ms: f64, steps: u32) -> u32 {
    if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
        return 0;
    }
    if duration_ms <= 0.0 {
        return steps;
    }
    let due = (elapsed_ms * f64::from(steps) / duration_ms).floor();
    if due >= f64::from(steps) {
        steps
    } else {
        due as u32
    }
}

/// Latch that lets exactly one visibility event through.
#[derive(Debug, Default)]
pub struct OneShot {
    fired: Cell<bool>,
}

impl OneShot {
    /// `true` the first time it is called, `false` afterwards.
    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

/// Observe `#market` and start the counters the first time it is half visible.
/// A page without the section is not an error.
pub fn attach(state: PageState, config: &PageConfig, motion: MotionPreference) -> Result<()> {
    let document = dom::document()?;
    let Some(section) = dom::query_one(&document, config.market_selector)? else {
        tracing::debug!(selector = config.market_selector, "no market section, counters idle");
        return Ok(());
    };

    let animator = Rc::new(RefCell::new(CounterAnimator::new(
        ANIMATION_TARGETS,
        config.counter_steps,
    )));
    let latch = Rc::new(OneShot::default());
    let duration_ms = config.counter_duration_ms();

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let visible = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if !visible || !latch.fire() {
            return;
        }
        observer.disconnect();
        start(state, animator.clone(), motion, duration_ms);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&config.visibility_threshold.into());
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(LandingError::js("IntersectionObserver"))?;
    observer.observe(&section);
    callback.forget();

    Ok(())
}

fn start(
    state: PageState,
    animator: Rc<RefCell<CounterAnimator>>,
    motion: MotionPreference,
    duration_ms: f64,
) {
    if !animator.borrow_mut().trigger(motion) {
        return;
    }
    let phase = animator.borrow().phase();
    state.counter_phase.set(phase);
    if phase == CounterPhase::Settled {
        state.market.set(animator.borrow().values());
        tracing::info!("market counters settled without animation");
        return;
    }
    tracing::info!("market counters started");
    schedule_frame(state, animator, js_sys::Date::now(), duration_ms);
}

fn schedule_frame(
    state: PageState,
    animator: Rc<RefCell<CounterAnimator>>,
    started_at: f64,
    duration_ms: f64,
) {
    request_animation_frame(move || {
        let elapsed = js_sys::Date::now() - started_at;
        let (update, phase) = {
            let mut anim = animator.borrow_mut();
            let due = due_step(elapsed, duration_ms, anim.steps);
            (anim.advance_to(due), anim.phase())
        };
        if let Some(values) = update {
            state.market.set(values);
        }
        if phase == CounterPhase::Settled {
            state.counter_phase.set(phase);
            tracing::info!("market counters settled");
        } else {
            schedule_frame(state, animator, started_at, duration_ms);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn running() -> CounterAnimator {
        let mut anim = CounterAnimator::new(ANIMATION_TARGETS, 60);
        assert!(anim.trigger(MotionPreference::new(false)));
        anim
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(0.5), 0.9375);
    }

    #[test]
    fn easing_clamps_out_of_range_progress() {
        assert_eq!(ease_out_quart(-0.5), 0.0);
        assert_eq!(ease_out_quart(1.5), 1.0);
    }

    #[test]
    fn halfway_step_matches_expected_figures() {
        let mut anim = running();
        let values = anim.advance_to(30).unwrap();
        assert_eq!(anim.step(), 30);
        assert_eq!(
            values,
            MarketNumbers {
                tam: 46.9,
                india: 16.9,
                serviceable: 1.7,
            }
        );
    }

    #[test]
    fn values_never_decrease_or_exceed_targets() {
        let mut anim = running();
        let mut previous = MarketNumbers::ZERO;
        while let Some(values) = anim.advance() {
            for (now, before, target) in [
                (values.tam, previous.tam, ANIMATION_TARGETS.tam),
                (values.india, previous.india, ANIMATION_TARGETS.india),
                (values.serviceable, previous.serviceable, ANIMATION_TARGETS.serviceable),
            ] {
                assert!(now >= before, "{now} dropped below {before}");
                assert!(now <= target, "{now} overshot {target}");
            }
            previous = values;
        }
        assert_eq!(anim.step(), 60);
    }

    #[test]
    fn settled_values_are_exact_targets() {
        let mut anim = running();
        anim.advance_to(60);
        assert_eq!(anim.phase(), CounterPhase::Settled);
        assert_eq!(anim.values(), ANIMATION_TARGETS);
        assert_eq!(anim.advance(), None);
    }

    #[test]
    fn reduced_motion_settles_on_trigger() {
        let mut anim = CounterAnimator::new(ANIMATION_TARGETS, 60);
        assert!(anim.trigger(MotionPreference::new(true)));
        assert_eq!(anim.phase(), CounterPhase::Settled);
        assert_eq!(anim.values(), ANIMATION_TARGETS);
        assert_eq!(anim.advance(), None);
    }

    #[test]
    fn trigger_only_counts_once() {
        let mut anim = running();
        anim.advance_to(10);
        assert!(!anim.trigger(MotionPreference::new(false)));
        assert!(!anim.trigger(MotionPreference::new(true)));
        assert_eq!(anim.phase(), CounterPhase::Running);
        assert_eq!(anim.step(), 10);
    }

    #[test]
    fn idle_animator_does_not_advance() {
        let mut anim = CounterAnimator::new(ANIMATION_TARGETS, 60);
        assert_eq!(anim.advance(), None);
        assert_eq!(anim.values(), MarketNumbers::ZERO);
    }

    #[test]
    fn due_step_follows_wall_clock() {
        assert_eq!(due_step(0.0, 2000.0, 60), 0);
        assert_eq!(due_step(50.0, 2000.0, 60), 1);
        assert_eq!(due_step(1000.0, 2000.0, 60), 30);
        assert_eq!(due_step(5000.0, 2000.0, 60), 60);
        assert_eq!(due_step(f64::NAN, 2000.0, 60), 0);
    }

    #[test]
    fn due_step_lands_on_step_boundaries() {
        assert_eq!(due_step(100.0, 2000.0, 60), 3);
        assert_eq!(due_step(1500.0, 2000.0, 60), 45);
        assert_eq!(due_step(1999.0, 2000.0, 60), 59);
        assert_eq!(due_step(2000.0, 2000.0, 60), 60);
        assert_eq!(due_step(10.0, 0.0, 60), 60);
    }

    #[test]
    fn one_shot_fires_once() {
        let latch = OneShot::default();
        assert!(!latch.has_fired());
        assert!(latch.fire());
        assert!(!latch.fire());
        assert!(!latch.fire());
        assert!(latch.has_fired());
    }

    #[test]
    fn figures_render_like_the_cards() {
        assert_eq!(format_figure(50.0), "50");
        assert_eq!(format_figure(46.9), "46.9");
        assert_eq!(format_figure(1.8), "1.8");
        assert_eq!(format_figure(0.0), "0");
    }
}
