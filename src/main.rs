use anyhow::Result;
use arcade_input::core::clock::Clock;
use arcade_input::engine::input::{DesktopHardware, Hardware, InputController, UiEventState};
use log::{error, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting input demo...");

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Arcade Input")
        .with_inner_size(winit::dpi::LogicalSize::new(640, 400))
        .build(&event_loop)?;

    let mut input = InputController::new(DesktopHardware::new());
    for device in input.device_inventory() {
        info!("Available: {} ({:?})", device.name, device.joystick_slot);
    }
    info!("Press fire on any device to join");
    let mut awaiting_release = false;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.hardware_mut().process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.hardware_mut().keyboard_mut().release_all();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                input.hardware_mut().pump();
                poll_frame(&mut input, &mut awaiting_release);
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// One input poll per rendered frame. Returns the player events that fired.
///
/// `awaiting_release` is set when a fire press joins the players. Player
/// polling waits until every button is let go, so the joining press does not
/// also count as player 1's first shot.
fn poll_frame<H: Hardware, C: Clock>(
    input: &mut InputController<H, C>,
    awaiting_release: &mut bool,
) -> Vec<(usize, UiEventState)> {
    if input.player_count() == 0 {
        if let Some(events) = input.ui_events_combined() {
            if events.pressed_button {
                input.assign_devices();
                *awaiting_release = true;
                if input.has_two_or_more_devices() {
                    info!("Two-player mode available");
                }
            }
        }
        return Vec::new();
    }

    if *awaiting_release {
        if input.combined_state().is_button_pressed() {
            return Vec::new();
        }
        *awaiting_release = false;
    }

    let mut fired = Vec::new();
    for player in 0..input.player_count() {
        match input.ui_events(player) {
            Ok(Some(events)) if events.any() => {
                info!("Player {}: {:?}", player + 1, events);
                fired.push((player, events));
            }
            Ok(_) => {}
            Err(e) => error!("{}", e),
        }
    }
    fired
}
