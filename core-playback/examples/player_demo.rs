//! # Player Controls Demo
//!
//! Drives a player over the headless media element the way a page with a row
//! of control buttons would, printing every notification.
//!
//! Run with: `cargo run --example player_demo --package core-playback`
//!
//! Set `RUST_LOG=core_playback=debug` to see the controller's own logs.

use anyhow::Result;
use bridge_headless::HeadlessMediaElement;
use bridge_traits::LogLevel;
use core_playback::{Notifications, PlaybackController, PlayerOptions};
use core_runtime::events::{EventBus, EventStream, PlayerEvent};
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use std::sync::Arc;

const DEMO_URL: &str = "https://media.example.com/video/sample.mp4?token=demo-token";

fn main() -> Result<()> {
    init_logging(
        LoggingConfig::default()
            .with_format(LogFormat::Compact)
            .with_level(LogLevel::Info),
    )?;

    let options = PlayerOptions::builder(DEMO_URL)
        .volume_delta(0.25)
        .change_delta(15.0)
        .controls(true)
        .class_name("example-name")
        .build();

    let notifications = Notifications::builder()
        .on_play(|| println!("onPlay"))
        .on_pause(|| println!("onPause"))
        .on_muted(|| println!("onMuted"))
        .on_unmuted(|| println!("onUnmuted"))
        .on_restart(|| println!("onRestart"))
        .on_ended(|| println!("onEnded"))
        .on_time_changed(|time| println!("onTimeChanged: {time}"))
        .on_volume_change(|volume| println!("onVolumeChange: {volume}"))
        .build();

    let bus = EventBus::default();
    let mut observer = EventStream::new(bus.subscribe()).filter(|event| {
        matches!(
            event,
            PlayerEvent::Restart { .. } | PlayerEvent::Ended { .. }
        )
    });

    let element = Arc::new(HeadlessMediaElement::new().with_duration(95.0));
    let mut player =
        PlaybackController::new(options, element.clone(), notifications).with_event_bus(bus);
    let pump = |player: &mut PlaybackController| {
        while let Some(signal) = element.next_signal() {
            player.handle_signal(signal);
        }
    };

    println!("> play");
    player.play();
    pump(&mut player);

    element.advance(30.0);

    println!("> forward");
    player.forward();
    println!("> backward");
    player.backward();

    println!("> decrease volume");
    player.decrease_volume();
    pump(&mut player);
    println!("> increase volume");
    player.increase_volume();
    pump(&mut player);

    println!("> mute");
    player.mute();
    pump(&mut player);
    println!("> unmute");
    player.unmute();
    pump(&mut player);

    println!("> pause");
    player.pause();
    pump(&mut player);

    println!("> restart");
    player.restart();
    pump(&mut player);

    element.advance(120.0);
    pump(&mut player);

    println!("view: {}", serde_json::to_string_pretty(&player.view())?);

    while let Some(Ok(event)) = observer.try_recv() {
        println!("bus: {} ({})", event.description(), event.player_id());
    }

    Ok(())
}
