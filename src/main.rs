//! Heart Catch entry point
//!
//! Web: mounts the three screens (game, proposal, letter) and routes between
//! them. Native: plays the game headless with a simple autopilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, Window,
    };

    use heart_catch::platform::{
        EventListener, Interval, RafScheduler, defer, input_from_event, set_visible,
        viewport_surface,
    };
    use heart_catch::ui::carousel::CAROUSEL_INTERVAL_MS;
    use heart_catch::ui::proposal::{FLOATING_HEART_INTERVAL_MS, YES_NAVIGATE_DELAY_MS};
    use heart_catch::ui::{
        Carousel, ConfettiBurst, ConfettiShow, FloatingHeart, FloatingHearts, Letter, Navigator,
        NoButton, Route, YesButton,
    };
    use heart_catch::{GameSession, Tuning};

    type AppRef = Rc<RefCell<App>>;

    /// Router state: the one mounted screen
    struct App {
        window: Window,
        document: Document,
        nav: Navigator,
        view: Option<View>,
        /// Outlives screen changes so a burst keeps falling over the letter
        confetti: Option<Rc<ConfettiLayer>>,
    }

    #[allow(dead_code)] // views are held for their Drop
    enum View {
        Home(HomeView),
        Proposal(ProposalView),
        Letter(LetterView),
    }

    /// Unmount the current screen, show the next one and mount it
    fn navigate(app: &AppRef, route: Route, push_history: bool) {
        let mut a = app.borrow_mut();
        // Dropping the view stops its frame loop, timers and listeners
        a.view = None;

        for r in Route::ALL {
            if let Some(el) = a.document.get_element_by_id(r.view_id()) {
                set_visible(&el, r == route);
            }
        }
        if push_history && a.nav.route() != route {
            if let Ok(history) = a.window.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(route.path()));
            }
        }
        a.nav.arrive(route);

        let weak = Rc::downgrade(app);
        let mounted = match route {
            Route::Home => HomeView::mount(weak, &a.window, &a.document).map(|v| v.map(View::Home)),
            Route::Proposal => {
                ProposalView::mount(weak, &a.window, &a.document, a.confetti.clone())
                    .map(|v| Some(View::Proposal(v)))
            }
            Route::Letter => LetterView::mount(&a.document).map(|v| Some(View::Letter(v))),
        };
        match mounted {
            Ok(view) => a.view = view,
            Err(e) => log::error!("Failed to mount {:?}: {:?}", route, e),
        }
        log::info!("Route: {}", route.path());
    }

    /// Navigate from a timer, never from inside the callback being torn down.
    /// Dropped if the screen that scheduled it was left in the meantime.
    fn navigate_later(app: &Weak<RefCell<App>>, window: &Window, route: Route, delay_ms: i32) {
        let Some(ticket) = app.upgrade().map(|app| app.borrow().nav.ticket()) else {
            return;
        };
        let app = app.clone();
        let scheduled = defer(window, delay_ms, move || {
            let Some(app) = app.upgrade() else {
                return;
            };
            let current = app.borrow().nav.is_current(ticket);
            if current {
                navigate(&app, route, true);
            } else {
                log::debug!("Skipped stale navigation to {:?}", route);
            }
        });
        if let Err(e) = scheduled {
            log::warn!("Could not schedule navigation to {:?}: {:?}", route, e);
        }
    }

    /// The catch game screen
    struct HomeView {
        session: Rc<RefCell<GameSession<RafScheduler>>>,
        _listeners: Vec<EventListener>,
    }

    impl HomeView {
        /// `Ok(None)` when there is no canvas or 2D context to draw on
        fn mount(
            app: Weak<RefCell<App>>,
            window: &Window,
            document: &Document,
        ) -> Result<Option<Self>, JsValue> {
            let Some(canvas) = document
                .get_element_by_id("canvas")
                .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            else {
                log::warn!("No #canvas element, game not mounted");
                return Ok(None);
            };
            let Some(ctx) = canvas
                .get_context("2d")?
                .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            else {
                log::warn!("No 2D context, game not mounted");
                return Ok(None);
            };

            let tuning = load_tuning(&canvas);
            let surface = viewport_surface(window);
            canvas.set_width(surface.width as u32);
            canvas.set_height(surface.height as u32);

            let seed = js_sys::Date::now() as u64;
            let scheduler = RafScheduler::new(window.clone());
            let slot = scheduler.slot();
            let session = Rc::new(RefCell::new(GameSession::new(seed, surface, tuning, scheduler)));

            let love_fill = document
                .get_element_by_id("love-fill")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            set_love_fill(love_fill.as_ref(), 0.0);
            if let Some(el) = document.get_element_by_id("start-screen") {
                set_visible(&el, true);
            }

            // Frame callback
            {
                let session = Rc::downgrade(&session);
                let window = window.clone();
                let mut ctx = ctx;
                *slot.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
                    let Some(session) = session.upgrade() else {
                        return;
                    };
                    let report = session.borrow_mut().frame(&mut ctx);
                    set_love_fill(love_fill.as_ref(), report.progress);
                    if report.won {
                        navigate_later(&app, &window, Route::Proposal, 0);
                    }
                }));
            }

            let mut listeners = Vec::new();

            // Resize keeps the canvas at viewport size
            {
                let session = Rc::downgrade(&session);
                let window_clone = window.clone();
                listeners.push(EventListener::new(window, "resize", move |_| {
                    let surface = viewport_surface(&window_clone);
                    canvas.set_width(surface.width as u32);
                    canvas.set_height(surface.height as u32);
                    if let Some(session) = session.upgrade() {
                        session.borrow_mut().resize(surface);
                    }
                })?);
            }

            // Pointer and touch move the paddle
            for kind in ["mousemove", "touchmove"] {
                let session = Rc::downgrade(&session);
                listeners.push(EventListener::new(window, kind, move |event| {
                    let (Some(session), Some(input)) = (session.upgrade(), input_from_event(&event))
                    else {
                        return;
                    };
                    session.borrow_mut().handle_input(&input);
                })?);
            }

            // Start button
            if let Some(btn) = document.get_element_by_id("start-btn") {
                let session = Rc::downgrade(&session);
                let start_screen = document.get_element_by_id("start-screen");
                listeners.push(EventListener::new(&btn, "click", move |_| {
                    if let Some(session) = session.upgrade() {
                        session.borrow_mut().start();
                    }
                    if let Some(el) = &start_screen {
                        set_visible(el, false);
                    }
                })?);
            }

            log::info!(
                "Game mounted at {}x{} with seed: {}",
                surface.width,
                surface.height,
                seed
            );
            Ok(Some(Self {
                session,
                _listeners: listeners,
            }))
        }
    }

    impl Drop for HomeView {
        fn drop(&mut self) {
            if let Ok(mut session) = self.session.try_borrow_mut() {
                session.stop();
            }
        }
    }

    /// The yes/no card
    struct ProposalView {
        document: Document,
        hearts: Rc<RefCell<FloatingHearts>>,
        _timers: Vec<Interval>,
        _listeners: Vec<EventListener>,
    }

    impl ProposalView {
        fn mount(
            app: Weak<RefCell<App>>,
            window: &Window,
            document: &Document,
            confetti: Option<Rc<ConfettiLayer>>,
        ) -> Result<Self, JsValue> {
            let seed = js_sys::Date::now() as u64;
            let mut timers = Vec::new();
            let mut listeners = Vec::new();

            // Carousel
            if let Some(img) = document.get_element_by_id("img") {
                let mut carousel = Carousel::new();
                img.set_attribute("src", carousel.current())?;
                timers.push(Interval::new(window, CAROUSEL_INTERVAL_MS, move || {
                    let _ = img.set_attribute("src", carousel.advance());
                })?);
            }

            // Background hearts
            let hearts = Rc::new(RefCell::new(FloatingHearts::new(seed)));
            if let Some(container) = document.get_element_by_id("main-container") {
                let hearts = hearts.clone();
                let document = document.clone();
                timers.push(Interval::new(window, FLOATING_HEART_INTERVAL_MS, move || {
                    let now = js_sys::Date::now();
                    let mut hearts = hearts.borrow_mut();
                    for id in hearts.expire(now) {
                        remove_floating_heart(&document, id);
                    }
                    let heart = hearts.emit(now);
                    if let Err(e) = spawn_floating_heart(&document, &container, &heart) {
                        log::warn!("Floating heart failed: {:?}", e);
                    }
                })?);
            }

            // The "No" button runs away
            let no_btn = document
                .get_element_by_id("no")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let (Some(no_btn), Some(card)) = (no_btn, document.get_element_by_id("proposal-card")) {
                let state = Rc::new(RefCell::new((NoButton::new(), Pcg32::seed_from_u64(seed))));
                no_btn.set_text_content(Some(&no_caption(&state.borrow().0)));
                for kind in ["mouseenter", "touchstart"] {
                    let state = state.clone();
                    let button_el = no_btn.clone();
                    let card = card.clone();
                    listeners.push(EventListener::new(&no_btn, kind, move |_| {
                        let mut guard = state.borrow_mut();
                        let (button, rng) = &mut *guard;
                        let card_size = (card.client_width() as f32, card.client_height() as f32);
                        let button_size = (
                            button_el.offset_width() as f32,
                            button_el.offset_height() as f32,
                        );
                        let (left, top) = button.evade(rng, card_size, button_size);
                        let style = button_el.style();
                        let _ = style.set_property("left", &format!("{left}px"));
                        let _ = style.set_property("top", &format!("{top}px"));
                        button_el.set_text_content(Some(&no_caption(button)));
                    })?);
                }
            }

            // "Yes": confetti, then the letter
            if let Some(yes) = document.get_element_by_id("yes") {
                let window = window.clone();
                let mut button = YesButton::default();
                listeners.push(EventListener::new(&yes, "click", move |_| {
                    if !button.press() {
                        return;
                    }
                    if let Some(layer) = &confetti {
                        layer.fire(&ConfettiBurst::YES);
                    }
                    navigate_later(&app, &window, Route::Letter, YES_NAVIGATE_DELAY_MS);
                })?);
            }

            Ok(Self {
                document: document.clone(),
                hearts,
                _timers: timers,
                _listeners: listeners,
            })
        }
    }

    impl Drop for ProposalView {
        fn drop(&mut self) {
            if let Ok(mut hearts) = self.hearts.try_borrow_mut() {
                for id in hearts.drain() {
                    remove_floating_heart(&self.document, id);
                }
            }
        }
    }

    /// The closing letter
    struct LetterView {
        _listeners: Vec<EventListener>,
    }

    impl LetterView {
        fn mount(document: &Document) -> Result<Self, JsValue> {
            let letter = Rc::new(RefCell::new(Letter::default()));
            let overlay = document.get_element_by_id("letter-overlay");
            if let Some(el) = &overlay {
                set_visible(el, false);
            }

            let mut listeners = Vec::new();
            for (id, open) in [("open-letter", true), ("close-letter", false)] {
                let Some(btn) = document.get_element_by_id(id) else {
                    continue;
                };
                let letter = letter.clone();
                let overlay = overlay.clone();
                listeners.push(EventListener::new(&btn, "click", move |_| {
                    let mut letter = letter.borrow_mut();
                    if open {
                        letter.open();
                    } else {
                        letter.close();
                    }
                    if let Some(el) = &overlay {
                        set_visible(el, letter.is_open());
                    }
                })?);
            }
            Ok(Self {
                _listeners: listeners,
            })
        }
    }

    /// Full-viewport overlay canvas the confetti show paints on
    struct ConfettiLayer {
        window: Window,
        canvas: HtmlCanvasElement,
        show: Rc<RefCell<ConfettiShow<RafScheduler>>>,
    }

    impl ConfettiLayer {
        /// `Ok(None)` when the page has no `#confetti-canvas`
        fn mount(window: &Window, document: &Document) -> Result<Option<Self>, JsValue> {
            let Some(canvas) = document
                .get_element_by_id("confetti-canvas")
                .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            else {
                log::warn!("No #confetti-canvas element, confetti disabled");
                return Ok(None);
            };
            let Some(ctx) = canvas
                .get_context("2d")?
                .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            else {
                log::warn!("No 2D context for confetti");
                return Ok(None);
            };

            let scheduler = RafScheduler::new(window.clone());
            let slot = scheduler.slot();
            let show = Rc::new(RefCell::new(ConfettiShow::new(
                js_sys::Date::now() as u64,
                viewport_surface(window),
                scheduler,
            )));
            let weak = Rc::downgrade(&show);
            let mut ctx = ctx;
            *slot.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
                if let Some(show) = weak.upgrade() {
                    show.borrow_mut().frame(&mut ctx);
                }
            }));

            Ok(Some(Self {
                window: window.clone(),
                canvas,
                show,
            }))
        }

        fn fire(&self, burst: &ConfettiBurst) {
            let surface = viewport_surface(&self.window);
            self.canvas.set_width(surface.width as u32);
            self.canvas.set_height(surface.height as u32);
            if let Ok(mut show) = self.show.try_borrow_mut() {
                show.resize(surface);
                show.fire(burst);
            }
        }
    }

    fn no_caption(button: &NoButton) -> String {
        format!("{} 🙈", button.caption())
    }

    fn floating_heart_id(id: u32) -> String {
        format!("floating-heart-{id}")
    }

    fn spawn_floating_heart(
        document: &Document,
        container: &Element,
        heart: &FloatingHeart,
    ) -> Result<(), JsValue> {
        let el = document.create_element("div")?.dyn_into::<HtmlElement>()?;
        el.set_id(&floating_heart_id(heart.id));
        el.set_class_name("heart");
        el.set_text_content(Some(heart.glyph));
        let style = el.style();
        style.set_property("left", &format!("{}vw", heart.left_vw))?;
        style.set_property("font-size", &format!("{}px", heart.font_px))?;
        style.set_property("animation-duration", &format!("{}s", heart.duration_s))?;
        style.set_property("opacity", &heart.opacity.to_string())?;
        container.append_child(&el)?;
        Ok(())
    }

    fn remove_floating_heart(document: &Document, id: u32) {
        if let Some(el) = document.get_element_by_id(&floating_heart_id(id)) {
            el.remove();
        }
    }

    fn set_love_fill(fill: Option<&HtmlElement>, progress: f32) {
        if let Some(fill) = fill {
            let _ = fill
                .style()
                .set_property("width", &format!("{:.1}%", progress * 100.0));
        }
    }

    /// Optional JSON overrides from `<canvas data-tuning="...">`
    fn load_tuning(canvas: &HtmlCanvasElement) -> Tuning {
        let Some(json) = canvas.get_attribute("data-tuning") else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring bad data-tuning ({}), using defaults", e);
                Tuning::default()
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Heart Catch starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            set_visible(&loading, false);
        }

        let confetti = ConfettiLayer::mount(&window, &document)?.map(Rc::new);
        let route = Route::from_path(&window.location().pathname()?);
        let app = Rc::new(RefCell::new(App {
            window: window.clone(),
            document,
            nav: Navigator::new(route),
            view: None,
            confetti,
        }));
        navigate(&app, route, false);

        // Back/forward buttons. The listener holds the app for the page's lifetime.
        let popstate = {
            let app = app.clone();
            let window_clone = window.clone();
            EventListener::new(&window, "popstate", move |_| {
                let path = window_clone.location().pathname().unwrap_or_default();
                navigate(&app, Route::from_path(&path), false);
            })?
        };
        std::mem::forget(popstate);

        log::info!("Heart Catch running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_app::run() {
        log::error!("Heart Catch failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Heart Catch (native) starting...");
    log::info!("Native mode plays headless - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2024);
    headless::run(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use heart_catch::input::InputEvent;
    use heart_catch::renderer::RecordingCanvas;
    use heart_catch::sim::Surface;
    use heart_catch::{GameSession, ManualScheduler, Tuning};

    /// Five minutes at 60 fps
    const MAX_FRAMES: u32 = 60 * 60 * 5;

    /// Chase the lowest heart until the win score is reached
    pub fn run(seed: u64) {
        let mut session = GameSession::new(
            seed,
            Surface::new(800.0, 600.0),
            Tuning::default(),
            ManualScheduler::new(),
        );
        let mut canvas = RecordingCanvas::default();
        let mut frames = 0u32;
        let mut last_draw_calls = 0usize;

        session.start();
        while let Some(report) = session.pump(&mut canvas) {
            frames += 1;
            last_draw_calls = canvas.commands.len();
            canvas.clear();

            if report.won {
                log::info!("Won after {} frames", frames);
                break;
            }
            if frames >= MAX_FRAMES {
                log::warn!("Gave up after {} frames at score {}", frames, report.score);
                break;
            }

            let lowest = session
                .state()
                .hearts
                .iter()
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|h| h.pos.x);
            if let Some(x) = lowest {
                session.handle_input(&InputEvent::PointerMove { client_x: x });
            }
        }
        session.stop();

        println!(
            "seed {}: score {} after {} frames ({} draw calls in the last frame)",
            seed,
            session.score(),
            frames,
            last_draw_calls
        );
    }
}
