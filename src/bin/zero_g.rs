//! Zero-G Prototype
//!
//! Run with: `cargo run --bin zero_g [config.json]`
//!
//! A cannon at the world origin lobs shells under gravity. The view can be
//! dragged and zoomed; a red cross marks the world origin.
//!
//! Controls:
//! - Left/Right arrows: Rotate barrel
//! - Up/Down arrows: Adjust power
//! - Space: Fire (one shell at a time)
//! - Left-drag: Pan camera
//! - Scroll: Zoom in/out
//! - R: Reset camera
//! - ESC: Exit
//!
//! Set `ZERO_G_CONFIG` (or pass a path) to load a JSON config. `RUST_LOG`
//! overrides the default log filter.

use std::sync::Arc;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use zero_g_engine::game::{EventTranslator, Simulation, SimulationConfig};
use zero_g_engine::input::InputEvent;
use zero_g_engine::render::{DrawList, GpuContext, GpuContextConfig, ShapeRenderer};
use zero_g_engine::time::{FrameTimer, SystemClock};

/// Everything that exists once the window does.
struct AppState {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: ShapeRenderer,
    simulation: Simulation,
    translator: EventTranslator,
    /// Events received since the last frame, drained on redraw
    pending: Vec<InputEvent>,
    draw_list: DrawList,
    clock: SystemClock,
    timer: FrameTimer,
}

impl AppState {
    fn new(event_loop: &ActiveEventLoop, config: &SimulationConfig) -> anyhow::Result<Self> {
        let window_attrs = WindowAttributes::default()
            .with_title(config.window.title.as_str())
            .with_inner_size(PhysicalSize::new(config.window.width, config.window.height))
            .with_resizable(config.window.resizable);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .context("failed to create window")?,
        );

        let gpu = GpuContext::new(
            Arc::clone(&window),
            GpuContextConfig {
                vsync: config.window.vsync,
                ..Default::default()
            },
        )?;
        let mut renderer = ShapeRenderer::new(&gpu);
        renderer.set_line_width(config.visuals.line_width);

        let mut simulation = Simulation::with_config(config);
        let (width, height) = gpu.dimensions();
        simulation.handle_event(&InputEvent::Resized { width, height });

        let clock = SystemClock::new();
        let timer = FrameTimer::start(&clock);

        Ok(Self {
            window,
            gpu,
            renderer,
            simulation,
            translator: EventTranslator::new(),
            pending: Vec::new(),
            draw_list: DrawList::new(),
            clock,
            timer,
        })
    }

    /// Run one simulation frame and present it.
    ///
    /// Returns `false` when the app should exit.
    fn frame(&mut self) -> bool {
        let dt = self.timer.tick_clock(&self.clock);
        let events = std::mem::take(&mut self.pending);
        self.simulation.frame(events, dt);

        if !self.simulation.is_running() {
            return false;
        }

        // Sized by the Resized events drained above
        self.draw_list.reset();
        self.simulation.draw_to_screen(&mut self.draw_list);

        match self.renderer.render(&self.gpu, &self.draw_list) {
            Ok(()) => true,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
                true
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory");
                false
            }
            Err(e) => {
                log::warn!("surface error: {e:?}");
                true
            }
        }
    }
}

struct App {
    config: SimulationConfig,
    state: Option<AppState>,
    error: Option<anyhow::Error>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("creating window...");
        match AppState::new(event_loop, &self.config) {
            Ok(state) => {
                log::info!("ready: arrows aim, Space fires, drag pans, wheel zooms, R resets, Esc quits");
                self.state = Some(state);
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::RedrawRequested => {
                if !state.frame() {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(size) => {
                state.gpu.resize(size.width, size.height);
                state.pending.push(InputEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
            }
            other => {
                if let Some(input) = state.translator.translate(&other) {
                    state.pending.push(input);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = SimulationConfig::from_env_or_args().context("failed to load config")?;

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        config,
        state: None,
        error: None,
    };
    event_loop.run_app(&mut app).context("event loop failed")?;

    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,wgpu_core=warn,wgpu_hal=warn,naga=warn"),
    )
    .init();

    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
