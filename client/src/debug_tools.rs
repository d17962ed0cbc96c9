//! Debug/performance tooling for native dev builds.
//!
//! Compiled only behind `dev_native` (see `main.rs`): the iyes_perf_ui overlay
//! plus a text readout of the player controller's state.

use crate::player::PlayerController;
use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin, SystemInformationDiagnosticsPlugin,
};
use bevy::prelude::*;
use bevy::render::diagnostic::RenderDiagnosticsPlugin;
use iyes_perf_ui::prelude::*;

#[derive(Component)]
struct ControllerReadout;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        SystemInformationDiagnosticsPlugin::default(),
        RenderDiagnosticsPlugin,
        PerfUiPlugin,
    ));

    app.add_systems(Startup, (spawn_perf_ui, spawn_readout));
    app.add_systems(Update, update_readout);
}

fn spawn_perf_ui(mut commands: Commands) {
    commands.spawn(PerfUiAllEntries::default());
}

fn spawn_readout(mut commands: Commands) {
    commands.spawn((
        ControllerReadout,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
    ));
}

fn update_readout(
    controller: Option<Single<&PlayerController>>,
    mut text: Single<&mut Text, With<ControllerReadout>>,
) {
    let Some(controller) = controller else {
        text.0 = "no player".to_string();
        return;
    };
    let state = controller.state();
    text.0 = format!(
        "grounded: {}\nspeed: {:.2}\nvertical: {:.2}\npos: ({:.2}, {:.2}, {:.2})",
        state.grounded,
        state.current_speed,
        state.vertical_velocity,
        state.position.x,
        state.position.y,
        state.position.z,
    );
}
