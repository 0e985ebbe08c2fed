//! The circular gallery
//!
//! Mounting wires three host capabilities together:
//!
//! - an [`InputSource`] delivering pointer, wheel and resize events
//! - a [`FrameScheduler`] running the frame driver once per refresh
//! - an [`ImageLoader`] resolving item images in the background
//!
//! All carousel state sits behind one mutex. Input handlers and the frame
//! callback hold weak references to it, and image completions go through a
//! separate inbox drained at the start of each frame, so a late completion
//! after teardown touches nothing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crowdnest_animation::ScrollState;
use crowdnest_core::events::event_types;
use crowdnest_core::{
    EventData, FrameInfo, FrameScheduler, FrameToken, InputEvent, InputSource, ListenerId,
    ListenerStatus,
};
use crowdnest_image::{ImageInfo, ImageLoader, ThreadedLoader};

use crate::caption::{CaptionTexture, EstimatedTextMeasurer, TextMeasurer};
use crate::config::GalleryConfig;
use crate::controller::ScrollController;
use crate::error::Result;
use crate::layout::StripLayout;
use crate::media::{FrameContext, MediaInstance};
use crate::renderer::{NullRenderer, SceneFrame, SceneRenderer};
use crate::strip::build_strip;
use crate::viewport::{Viewport, ViewportMetrics};

/// Upper bound of the random initial wave phase
const MAX_INITIAL_PHASE: f32 = 100.0;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A finished image load waiting to be applied on the next frame
#[derive(Debug, Clone, Copy)]
struct LoadOutcome {
    index: usize,
    info: Option<ImageInfo>,
}

type LoadInbox = Arc<Mutex<Vec<LoadOutcome>>>;

/// Running totals, mostly for diagnostics and headless reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryStats {
    pub frames: u64,
    pub recycles: u64,
    pub images_loaded: u32,
    pub images_failed: u32,
}

/// Point-in-time copy of the carousel state
#[derive(Debug, Clone)]
pub struct GallerySnapshot {
    pub scroll: ScrollState,
    pub viewport: ViewportMetrics,
    pub layout: StripLayout,
    pub media: Vec<MediaInstance>,
    pub stats: GalleryStats,
}

impl GallerySnapshot {
    /// Largest distance between a rendered position and the loop lattice
    /// `base - current + k * loop_width`
    pub fn max_loop_drift(&self) -> f32 {
        let loop_width = self.layout.loop_width();
        if loop_width <= 0.0 {
            return 0.0;
        }
        self.media
            .iter()
            .map(|media| {
                let loops = (media.position - (media.base_position - self.scroll.current))
                    / loop_width;
                (loops - loops.round()).abs() * loop_width
            })
            .fold(0.0, f32::max)
    }
}

struct GalleryState {
    bend: f32,
    border_radius: f32,
    text_color: [f32; 4],
    viewport: Viewport,
    layout: StripLayout,
    media: Vec<MediaInstance>,
    controller: ScrollController,
    renderer: Box<dyn SceneRenderer>,
    inbox: LoadInbox,
    stats: GalleryStats,
}

impl GalleryState {
    fn handle_input(&mut self, event: &InputEvent) {
        match (event.event_type, &event.data) {
            (event_types::POINTER_DOWN, EventData::Pointer { x, .. }) => {
                self.controller.pointer_down(*x);
            }
            (event_types::POINTER_MOVE, EventData::Pointer { x, .. }) => {
                self.controller.pointer_move(*x);
            }
            (event_types::POINTER_UP, _) => self.controller.pointer_up(event.timestamp),
            (event_types::WHEEL, EventData::Wheel { delta_y, .. }) => {
                self.controller.wheel(*delta_y, event.timestamp);
            }
            (event_types::RESIZE, EventData::Resize { width, height }) => {
                self.resize(*width, *height);
            }
            _ => {}
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            tracing::debug!(width, height, "gallery resize ignored");
            return;
        }
        let metrics = self.viewport.resize(width, height);
        self.renderer.resize(width, height);
        self.layout = StripLayout::compute(&metrics, self.media.len());

        let current = self.controller.scroll().current;
        for media in &mut self.media {
            media.resize(&self.layout, current);
            media.project(current, self.bend, metrics.half_width());
        }
    }

    fn apply_loads(&mut self) {
        let finished = std::mem::take(&mut *lock(&self.inbox));
        for outcome in finished {
            match (outcome.info, self.media.get_mut(outcome.index)) {
                (Some(info), Some(media)) => {
                    media.set_image(&info);
                    self.stats.images_loaded += 1;
                }
                (None, _) => self.stats.images_failed += 1,
                (Some(_), None) => {}
            }
        }
    }

    fn frame(&mut self, info: &FrameInfo) {
        self.apply_loads();
        self.controller
            .poll_snap(info.time_ms, self.layout.item_width);

        let scroll = self.controller.scroll_mut();
        scroll.step();
        let ctx = FrameContext {
            current: scroll.current,
            velocity: scroll.velocity(),
            direction: scroll.direction(),
            viewport_half_width: self.viewport.metrics().half_width(),
            bend: self.bend,
        };

        let mut wrapped: SmallVec<[usize; 4]> = SmallVec::new();
        for media in &mut self.media {
            if media.update(&ctx).is_wrap() {
                wrapped.push(media.index);
            }
        }
        if !wrapped.is_empty() {
            tracing::debug!(?wrapped, current = ctx.current, "gallery items recycled");
            self.stats.recycles += wrapped.len() as u64;
        }

        self.renderer.render(&SceneFrame {
            frame_index: info.frame_index,
            viewport: self.viewport.metrics(),
            media: &self.media,
            border_radius: self.border_radius,
            text_color: self.text_color,
        });

        self.controller.scroll_mut().commit_frame();
        self.stats.frames += 1;
    }

    fn snapshot(&self) -> GallerySnapshot {
        GallerySnapshot {
            scroll: *self.controller.scroll(),
            viewport: *self.viewport.metrics(),
            layout: self.layout,
            media: self.media.clone(),
            stats: self.stats,
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Collects the host capabilities a gallery needs before mounting
pub struct GalleryBuilder {
    config: GalleryConfig,
    renderer: Box<dyn SceneRenderer>,
    loader: Arc<dyn ImageLoader>,
    measurer: Arc<dyn TextMeasurer>,
    seed: Option<u64>,
}

impl GalleryBuilder {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            renderer: Box::new(NullRenderer),
            loader: Arc::new(ThreadedLoader),
            measurer: Arc::new(EstimatedTextMeasurer),
            seed: None,
        }
    }

    pub fn renderer(mut self, renderer: impl SceneRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn loader(mut self, loader: Arc<dyn ImageLoader>) -> Self {
        self.loader = loader;
        self
    }

    pub fn measurer(mut self, measurer: Arc<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    /// Fix the initial wave phases for reproducible runs
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the strip, attach the surface, start image loads, and
    /// register the input listener and frame callback.
    pub fn mount(
        self,
        width: u32,
        height: u32,
        input: &mut dyn InputSource,
        frames: &mut dyn FrameScheduler,
    ) -> Result<CircularGallery> {
        let Self {
            config,
            mut renderer,
            loader,
            measurer,
            seed,
        } = self;

        let style = config.validate()?;
        let strip = build_strip(&config.items);

        let mut viewport = Viewport::default();
        let metrics = viewport.resize(width, height);
        let layout = StripLayout::compute(&metrics, strip.len());

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let media: Vec<MediaInstance> = strip
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let texture =
                    CaptionTexture::measure(&item.caption, &style.font, measurer.as_ref());
                let phase = rng.gen_range(0.0..MAX_INITIAL_PHASE);
                MediaInstance::new(index, &item.caption, texture, phase, &layout)
            })
            .collect();

        renderer.attach(width, height);

        let inbox: LoadInbox = Arc::new(Mutex::new(Vec::with_capacity(strip.len())));
        for (index, item) in strip.iter().enumerate() {
            let source = item.source();
            let label = source.describe();
            let inbox = Arc::downgrade(&inbox);
            loader.load(
                source,
                Box::new(move |result| {
                    let info = match result {
                        Ok(info) => Some(info),
                        Err(error) => {
                            tracing::debug!(index, source = %label, %error, "gallery image not loaded");
                            None
                        }
                    };
                    if let Some(inbox) = inbox.upgrade() {
                        lock(&inbox).push(LoadOutcome { index, info });
                    }
                }),
            );
        }

        let mut state = GalleryState {
            bend: config.bend,
            border_radius: config.border_radius,
            text_color: style.color.to_array(),
            viewport,
            layout,
            media,
            controller: ScrollController::new(
                config.scroll_ease,
                config.scroll_speed,
                config.wheel_settle_ms,
                config.release_settle_ms,
            ),
            renderer,
            inbox,
            stats: GalleryStats::default(),
        };
        // Lay out and draw once before the first refresh
        state.frame(&FrameInfo::default());
        let state = Arc::new(Mutex::new(state));

        let weak: Weak<Mutex<GalleryState>> = Arc::downgrade(&state);
        let listener = input.subscribe(Box::new(move |event| match weak.upgrade() {
            Some(state) => {
                lock(&state).handle_input(event);
                ListenerStatus::Keep
            }
            None => ListenerStatus::Detach,
        }));

        let weak = Arc::downgrade(&state);
        let token = frames.request_frames(Box::new(move |info| {
            if let Some(state) = weak.upgrade() {
                lock(&state).frame(info);
            }
        }));

        tracing::info!(
            items = strip.len(),
            width,
            height,
            item_width = layout.item_width,
            "circular gallery mounted"
        );

        Ok(CircularGallery {
            state,
            listener: Some(listener),
            token: Some(token),
        })
    }
}

// ============================================================================
// Gallery handle
// ============================================================================

/// Handle to a mounted carousel
pub struct CircularGallery {
    state: Arc<Mutex<GalleryState>>,
    listener: Option<ListenerId>,
    token: Option<FrameToken>,
}

impl CircularGallery {
    pub fn builder(config: GalleryConfig) -> GalleryBuilder {
        GalleryBuilder::new(config)
    }

    pub fn scroll(&self) -> ScrollState {
        *lock(&self.state).controller.scroll()
    }

    pub fn item_width(&self) -> f32 {
        lock(&self.state).layout.item_width
    }

    pub fn loop_width(&self) -> f32 {
        lock(&self.state).layout.loop_width()
    }

    pub fn stats(&self) -> GalleryStats {
        lock(&self.state).stats
    }

    /// Whether a drag is in progress or a snap is still pending
    pub fn is_interacting(&self) -> bool {
        let state = lock(&self.state);
        state.controller.is_dragging() || state.controller.has_pending_snap()
    }

    pub fn snapshot(&self) -> GallerySnapshot {
        lock(&self.state).snapshot()
    }

    pub fn is_mounted(&self) -> bool {
        self.token.is_some()
    }

    /// Stop the frame callback, detach the input listener and release the
    /// rendering surface. Safe to call more than once.
    pub fn teardown(&mut self, input: &mut dyn InputSource) {
        let Some(token) = self.token.take() else {
            return;
        };
        token.cancel();
        if let Some(listener) = self.listener.take() {
            input.unsubscribe(listener);
        }
        lock(&self.state).renderer.detach();
        tracing::info!("circular gallery torn down");
    }
}

/// Dropping without [`CircularGallery::teardown`] stops the frame callback;
/// the input listener detaches itself on the next event it receives.
impl Drop for CircularGallery {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
    }
}
