use std::time::Duration;

use macroquad::prelude::*;
use neon_life::{
    LifeConfig, SimulationController,
    input, rendering, ui,
};
use tracing::{debug, error, info};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life - Neon Edition".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Config from the JSON file named by the first argument, else defaults
fn load_config() -> LifeConfig {
    let Some(path) = std::env::args().nth(1) else {
        return LifeConfig::default();
    };
    LifeConfig::from_path(&path).unwrap_or_else(|err| {
        error!(%path, %err, "Falling back to default config");
        LifeConfig::default()
    })
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let mut sim = match SimulationController::new(load_config()) {
        Ok(sim) => sim,
        Err(err) => {
            error!(%err, "Could not start simulation");
            return;
        }
    };
    info!("Starting Neon Life");

    loop {
        let mouse_pos = mouse_position();

        // Gather this frame's intents against the current snapshot
        let snapshot = sim.snapshot();
        let mut intents = if snapshot.controls_visible {
            input::button_intents(&ui::create_buttons(&snapshot), mouse_pos)
        } else {
            Vec::new()
        };
        intents.extend(input::keyboard_intents());
        intents.extend(input::cell_click_intent(&snapshot, mouse_pos));

        for intent in intents {
            if let Err(err) = sim.apply(intent) {
                debug!(?intent, %err, "Intent rejected");
            }
        }

        sim.advance(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        let snapshot = sim.snapshot();
        rendering::draw_grid(&snapshot);
        if snapshot.controls_visible {
            rendering::draw_controls(&snapshot, &ui::create_buttons(&snapshot), mouse_pos);
        } else {
            rendering::draw_panel_hint();
        }

        next_frame().await;
    }
}
