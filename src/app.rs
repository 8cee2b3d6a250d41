use anyhow::{Context, anyhow};
use raylib::prelude::*;
use tracing::info;

use crate::audio::RaylibEffects;
use crate::cli::Args;
use crate::deck_data::{BACKGROUND_IMAGE, builtin_deck};
use crate::effects::Effects;
use crate::presenter::CardPresenter;
use crate::scene::{Frame, Layout, Scene, contains};
use crate::state::PresentationState;
use crate::texture_loader::CardTextures;
use crate::typewriter::Typewriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open,
    Next,
    Prev,
}

/// Maps a left click to a presenter command.
pub fn command_for_click(state: PresentationState, layout: &Layout, point: Vector2) -> Option<Command> {
    match state {
        PresentationState::Closed if contains(&layout.envelope, point) => Some(Command::Open),
        PresentationState::Open(_) if contains(&layout.prev_button, point) => Some(Command::Prev),
        PresentationState::Open(_) if contains(&layout.next_button, point) => Some(Command::Next),
        _ => None,
    }
}

/// Keyboard equivalents of the envelope and the two buttons.
pub fn command_for_key(state: PresentationState, key: KeyboardKey) -> Option<Command> {
    match (state, key) {
        (PresentationState::Closed, KeyboardKey::KEY_ENTER | KeyboardKey::KEY_SPACE) => Some(Command::Open),
        (PresentationState::Open(_), KeyboardKey::KEY_RIGHT) => Some(Command::Next),
        (PresentationState::Open(_), KeyboardKey::KEY_LEFT) => Some(Command::Prev),
        _ => None,
    }
}

/// Applies a command. Disabled controls are ignored by the presenter itself.
pub fn dispatch<E: Effects>(presenter: &mut CardPresenter<E>, command: Command) -> bool {
    match command {
        Command::Open => presenter.open(),
        Command::Next => presenter.next(),
        Command::Prev => presenter.prev(),
    }
}

fn poll_commands(rl: &RaylibHandle, state: PresentationState, layout: &Layout) -> Vec<Command> {
    let mut commands = Vec::new();
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        commands.extend(command_for_click(state, layout, rl.get_mouse_position()));
    }
    for key in [
        KeyboardKey::KEY_ENTER,
        KeyboardKey::KEY_SPACE,
        KeyboardKey::KEY_RIGHT,
        KeyboardKey::KEY_LEFT,
    ] {
        if rl.is_key_pressed(key) {
            commands.extend(command_for_key(state, key));
        }
    }
    commands
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let deck = builtin_deck().context("built-in card deck is invalid")?;
    info!(cards = deck.len(), assets = %args.assets.display(), "starting");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Greeting Card")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let audio = RaylibAudio::init_audio_device()
        .map_err(|e| anyhow!("failed to open audio device: {e:?}"))?;

    let textures = CardTextures::load(&mut rl, &thread, &args.assets, BACKGROUND_IMAGE, &deck);
    let mut presenter = CardPresenter::new(deck, RaylibEffects::new(&audio, &args.assets));
    let mut scene = Scene::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let layout = Layout::compute(rl.get_screen_width() as f32, rl.get_screen_height() as f32);

        for command in poll_commands(&rl, presenter.state(), &layout) {
            dispatch(&mut presenter, command);
        }
        presenter.update(dt);
        scene.update(dt, presenter.state());

        let index = presenter.current_index();
        let frame = Frame {
            state: presenter.state(),
            text: presenter.typing().map(Typewriter::rendered).unwrap_or_default(),
            portrait: index.is_some_and(|i| presenter.deck().is_portrait(i)),
            image: index.and_then(|i| textures.card(i)),
            background: textures.background.as_ref(),
            can_prev: presenter.can_prev(),
            can_next: presenter.can_next(),
            mouse: rl.get_mouse_position(),
        };

        let mut d = rl.begin_drawing(&thread);
        scene.draw(&mut d, &layout, &frame);
    }

    // Release the typing effect and the track while the audio device is still open
    drop(presenter);
    info!("closed");
    Ok(())
}
