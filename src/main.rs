const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

mod circle;
mod color;
mod config;
mod driver;
mod gpu;
mod intersection;
mod motion;
mod panel;
mod projection;
mod random;
mod scheduler;
mod surface;
mod viewport;

use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::Window,
    window::WindowBuilder,
};

use config::Settings;
use driver::{Driver, DriverState};
use gpu::GpuSurface;
use panel::{Panel, PanelCommand};
use random::RngSource;
use scheduler::RedrawScheduler;

struct App {
    // Declared before `window` so the surface is dropped first.
    gpu: GpuSurface,
    window: Window,
    driver: Driver<RngSource<rand::rngs::ThreadRng>>,
    panel: Panel,
    tick_pending: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::from_env();
    log::info!(
        "{} circles, speed {}, markers {}",
        settings.circle_count,
        settings.speed,
        settings.marker_color.to_hex()
    );

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Circles")
        .with_inner_size(winit::dpi::PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build(&event_loop)?;
    let mut app = pollster::block_on(App::new(window, settings))?;
    app.start()?;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == app.window.id() => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                    match input.virtual_keycode.and_then(PanelCommand::for_key) {
                        Some(PanelCommand::Quit) => *control_flow = ControlFlow::Exit,
                        Some(command) => app.command(command),
                        None => {}
                    }
                }
                WindowEvent::Resized(physical_size) => {
                    app.resize(*physical_size);
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    app.resize(**new_inner_size);
                }
                _ => {}
            },
            Event::RedrawRequested(window_id) if window_id == app.window.id() => {
                match app.redraw() {
                    Ok(_) => {}
                    // Reconfigure the surface if lost
                    Err(wgpu::SurfaceError::Lost) => app.gpu.resize(app.gpu.size()),
                    // The system is out of memory, we should probably quit
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("out of GPU memory");
                        *control_flow = ControlFlow::Exit
                    }
                    // All other errors (Outdated, Timeout) should be resolved by the next frame
                    Err(e) => log::error!("{:?}", e),
                }
            }
            _ => {}
        }
    });
}

impl App {
    async fn new(window: Window, settings: Settings) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let gpu = GpuSurface::new(&window).await?;

        let mut driver = Driver::new(settings, RngSource::thread())?;
        driver.set_viewport(size.width.max(1) as f32, size.height.max(1) as f32)?;

        Ok(Self {
            gpu,
            window,
            panel: Panel::new(settings.marker_color),
            driver,
            tick_pending: false,
        })
    }

    fn start(&mut self) -> Result<(), driver::DriverError> {
        let mut scheduler = RedrawScheduler {
            window: &self.window,
            pending: &mut self.tick_pending,
        };
        self.driver.start(&mut scheduler)?;
        self.refresh_title();
        Ok(())
    }

    fn command(&mut self, command: PanelCommand) {
        let mut scheduler = RedrawScheduler {
            window: &self.window,
            pending: &mut self.tick_pending,
        };
        if let Err(e) = self.panel.apply(command, &mut self.driver, &mut scheduler) {
            log::warn!("{:?} rejected: {e}", command);
        }
        self.refresh_title();
        self.repaint_if_paused();
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            log::debug!("ignoring resize to {}x{}", new_size.width, new_size.height);
            return;
        }
        self.gpu.resize(new_size);
        if let Err(e) = self
            .driver
            .set_viewport(new_size.width as f32, new_size.height as f32)
        {
            log::warn!("resize rejected: {e}");
        }
        self.repaint_if_paused();
    }

    /// While paused no tick will redraw, so a reset has to be painted here.
    fn repaint_if_paused(&mut self) {
        if self.driver.state() != DriverState::Idle {
            return;
        }
        match self.driver.draw(&mut self.gpu) {
            Ok(_) => self.window.request_redraw(),
            Err(e) => log::warn!("repaint skipped: {e}"),
        }
    }

    /// Runs the scheduled tick, or repaints the last frame if none is pending.
    fn redraw(&mut self) -> Result<(), wgpu::SurfaceError> {
        if !std::mem::take(&mut self.tick_pending) {
            return self.gpu.present();
        }
        let mut scheduler = RedrawScheduler {
            window: &self.window,
            pending: &mut self.tick_pending,
        };
        match self.driver.tick(&mut self.gpu, &mut scheduler) {
            Ok(Some(_)) => self.gpu.present(),
            Ok(None) => Ok(()),
            Err(e) => {
                log::error!("frame skipped: {e}");
                Ok(())
            }
        }
    }

    fn refresh_title(&self) {
        self.window.set_title(&panel::title(&self.driver));
    }
}
