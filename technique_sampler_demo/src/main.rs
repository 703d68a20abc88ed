//! Technique Sampler demo
//!
//! Opens a window and drives the scene with the recording backend. The
//! FPS overlay and the draw count of the last presented frame are
//! mirrored into the window title.
//!
//! Usage: technique_sampler_demo [gimbal|shadow|billboard|light|all] [--fixed-step] [--verbose]

use std::time::Duration;

use technique_sampler::input::winit::translate_window_event;
use technique_sampler::input::{InputEvent, Key};
use technique_sampler::render::RecordingBackend;
use technique_sampler::sampler::log::LogSeverity;
use technique_sampler::sampler::{Engine, FrameSequencer, SceneConfig};
use technique_sampler::{sampler_error, sampler_info, sampler_warn};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

struct App {
    config: SceneConfig,
    window: Option<Window>,
    sequencer: Option<FrameSequencer<RecordingBackend>>,
    shown_title: Option<(u32, usize)>,
}

impl App {
    fn new(config: SceneConfig) -> Self {
        Self { config, window: None, sequencer: None, shown_title: None }
    }

    fn create_scene(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.window.width, self.config.window.height));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => window,
            Err(err) => {
                sampler_error!("sampler::Demo", "Failed to create window: {}", err);
                event_loop.exit();
                return;
            }
        };

        let backend = RecordingBackend::new().with_retained_frames(2).without_command_log();
        match FrameSequencer::new(self.config.clone(), backend) {
            Ok(sequencer) => self.sequencer = Some(sequencer),
            Err(err) => {
                sampler_error!("sampler::Demo", "Failed to build scene: {}", err);
                event_loop.exit();
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(sequencer)) = (&self.window, &mut self.sequencer) else {
            return;
        };

        if let Err(err) = sequencer.tick() {
            sampler_error!("sampler::Demo", "Unrecoverable frame error: {}", err);
            event_loop.exit();
            return;
        }

        if self.config.show_fps {
            let fps = sequencer.clock().frames_per_second();
            let draws = sequencer
                .backend()
                .last_presented_frame()
                .map_or(0, |frame| frame.draws().count());
            if self.shown_title != Some((fps, draws)) {
                window.set_title(&format!("{} - FPS={} draws={}", self.config.window.title, fps, draws));
                self.shown_title = Some((fps, draws));
            }
        }
        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        match self.sequencer.as_mut() {
            Some(sequencer) => sequencer.on_resuming(),
            None => self.create_scene(event_loop),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(size) => {
                if let Some(sequencer) = self.sequencer.as_mut() {
                    if let Err(err) = sequencer.on_resize(size.width, size.height) {
                        sampler_warn!("sampler::Demo", "Resize failed: {}", err);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                return;
            }
            _ => {}
        }

        match translate_window_event(&event) {
            Some(InputEvent::KeyPressed(Key::Escape)) => event_loop.exit(),
            Some(input) => {
                if let Some(sequencer) = self.sequencer.as_mut() {
                    sequencer.handle_input(input);
                }
            }
            None => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|arg| arg == "--verbose");
    let fixed_step = args.iter().any(|arg| arg == "--fixed-step");
    let preset = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .cloned()
        .unwrap_or_else(|| "all".to_string());

    Engine::set_min_severity(if verbose { LogSeverity::Trace } else { LogSeverity::Info });

    let mut config = match SceneConfig::from_preset(&preset) {
        Some(config) => config,
        None => {
            sampler_warn!("sampler::Demo", "Unknown preset '{}', showing all techniques", preset);
            SceneConfig::all()
        }
    };
    if fixed_step {
        config = config.with_fixed_time_step(Duration::from_secs_f64(1.0 / 60.0));
    }
    sampler_info!("sampler::Demo", "Starting with preset '{}'", preset);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
