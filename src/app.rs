use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::config::{ShowcaseConfig, WindowConfig};
use crate::gpu::GpuContext;
use crate::input::{Input, Step};
use crate::showcase::Showcase;

/// Run the showcase in a window until it is closed.
///
/// # Example
/// ```ignore
/// showcase::run(ShowcaseConfig::default())?;
/// ```
pub fn run(config: ShowcaseConfig) -> anyhow::Result<()> {
    let showcase = Showcase::new(&config).context("invalid showcase config")?;

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ShowcaseApp::Pending {
        window: config.window,
        showcase: Some(showcase),
    };
    event_loop
        .run_app(&mut app)
        .context("event loop terminated with an error")?;
    Ok(())
}

enum ShowcaseApp {
    Pending {
        window: WindowConfig,
        showcase: Option<Showcase>,
    },
    Running {
        window: Arc<Window>,
        gpu: GpuContext,
        showcase: Showcase,
        input: Input,
        title: String,
        caption: String,
    },
}

impl ShowcaseApp {
    fn start(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
        showcase: Showcase,
    ) -> anyhow::Result<Self> {
        let window_attrs = WindowAttributes::default()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .context("failed to create window")?,
        );
        let gpu = GpuContext::new(window.clone()).context("failed to initialize GPU")?;

        let mut showcase = showcase;
        showcase.stage_mut().resize(gpu.width(), gpu.height());

        Ok(ShowcaseApp::Running {
            window,
            gpu,
            showcase,
            input: Input::new(),
            title: config.title.clone(),
            caption: String::new(),
        })
    }
}

impl ApplicationHandler for ShowcaseApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let ShowcaseApp::Pending { window, showcase } = self else {
            return;
        };
        let Some(showcase) = showcase.take() else {
            return;
        };

        match ShowcaseApp::start(event_loop, window, showcase) {
            Ok(running) => *self = running,
            Err(e) => {
                log::error!("{:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let ShowcaseApp::Running {
            gpu,
            showcase,
            input,
            ..
        } = self
        else {
            return;
        };

        input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                gpu.resize(size.width, size.height);
                showcase.stage_mut().resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                gpu.present_clear(showcase.stage().background);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let ShowcaseApp::Running {
            window,
            showcase,
            input,
            title,
            caption,
            ..
        } = self
        else {
            return;
        };

        let dt = showcase.frame_delta(Instant::now());
        let intent = input.intent();

        if let Some(step) = intent.navigate {
            let accepted = match step {
                Step::Next => showcase.navigate_next(None),
                Step::Previous => showcase.navigate_previous(None),
            };
            if !accepted {
                log::debug!("Navigation {:?} ignored while flying", step);
            }
        }
        if let Some(spin) = intent.spin {
            showcase.spin_focused(spin, dt);
        }

        let redraw = showcase.step(dt);

        let current = showcase.caption();
        if *caption != current {
            window.set_title(&format!("{} | {}", title, current));
            *caption = current;
        }

        if redraw {
            window.request_redraw();
        } else {
            showcase.pause_clock();
        }
        event_loop.set_control_flow(control_flow(redraw));
        input.begin_frame();
    }
}

/// Keep polling while frames are produced; sleep until the next event otherwise.
fn control_flow(redraw: bool) -> ControlFlow {
    if redraw {
        ControlFlow::Poll
    } else {
        ControlFlow::Wait
    }
}
