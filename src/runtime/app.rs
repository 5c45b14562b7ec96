use std::rc::Rc;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::Window;

use panekit::commands::{Cmd, Damage};
use panekit::messages::{Msg, PointerMsg};
use panekit::model::{AppModel, Point, Size};
use panekit::update::update;
use panekit::view::Renderer;

use super::input::{cursor_icon, key_to_msg, pointer_button, to_point};

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    modifiers: ModifiersState,
    /// Last cursor position, kept after the cursor leaves the window
    last_pointer: Point,
    /// Accumulated since the last present
    damage: Damage,
}

fn physical(size: Size) -> PhysicalSize<u32> {
    PhysicalSize::new(size.width.max(1) as u32, size.height.max(1) as u32)
}

impl App {
    pub fn new(model: AppModel) -> Self {
        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            modifiers: ModifiersState::empty(),
            last_pointer: Point::default(),
            damage: Damage::Full,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("panekit")
            .with_inner_size(physical(self.model.container.size()))
            .with_min_inner_size(physical(self.model.container.minimum_size()));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create context: {}", e))?;

        self.renderer = Some(Renderer::new(Rc::clone(&window), &context)?);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => update(
                &mut self.model,
                Msg::resized(size.width as i32, size.height as i32),
            ),
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                let command = if cfg!(target_os = "macos") {
                    self.modifiers.super_key()
                } else {
                    self.modifiers.control_key()
                };
                let msg = key_to_msg(&event.logical_key, command)?;
                update(&mut self.model, msg)
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.last_pointer = to_point(*position);
                update(
                    &mut self.model,
                    Msg::Pointer(PointerMsg::Moved(self.last_pointer)),
                )
            }
            WindowEvent::CursorLeft { .. } => update(&mut self.model, Msg::Pointer(PointerMsg::Left)),
            WindowEvent::MouseInput { state, button, .. } => {
                let position = self.model.pointer.unwrap_or(self.last_pointer);
                let button = pointer_button(*button);
                let msg = match state {
                    ElementState::Pressed => PointerMsg::Pressed(position, button),
                    ElementState::Released => PointerMsg::Released(position, button),
                };
                update(&mut self.model, Msg::Pointer(msg))
            }
            _ => None,
        }
    }

    /// Apply side effects. Returns true when the app should exit.
    fn process_cmd(&mut self, cmd: Cmd) -> bool {
        self.damage.add(&cmd);
        let mut quit = false;
        cmd.for_each(&mut |cmd| match cmd {
            Cmd::SetCursor(shape) => {
                if let Some(window) = &self.window {
                    window.set_cursor(cursor_icon(shape));
                }
            }
            Cmd::SetMinimumSize(size) => {
                if let Some(window) = &self.window {
                    window.set_min_inner_size(Some(physical(size)));
                }
            }
            Cmd::Quit => quit = true,
            Cmd::None | Cmd::Redraw | Cmd::RedrawAreas(_) | Cmd::Batch(_) => {}
        });
        quit
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model, &self.damage)?;
        }
        self.damage = Damage::None;
        Ok(())
    }

    fn save_on_exit(&mut self) {
        if let Err(e) = self.model.save_layout() {
            tracing::error!("Failed to save layout on exit: {}", e);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to create window: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.save_on_exit();
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render failed: {:#}", e);
                }
            }
            event => {
                if let Some(cmd) = self.handle_event(&event) {
                    let needs_redraw = cmd.needs_redraw();
                    if self.process_cmd(cmd) {
                        self.save_on_exit();
                        event_loop.exit();
                    } else if needs_redraw {
                        window.request_redraw();
                    }
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}
