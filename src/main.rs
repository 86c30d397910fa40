use macroquad::prelude::*;
use wireworld::{
    Camera, Simulation, WireworldConfig,
    input,
    rendering,
    ui::{self, CELL_SIZE},
};

fn window_conf(config: &WireworldConfig) -> Conf {
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width,
        window_height: config.window.height,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn home_camera(sim: &Simulation) -> Camera {
    let (width, height) = sim.grid().dimensions();
    Camera::framing(
        width,
        height,
        (ui::grid_area_width(), ui::grid_area_height()),
        CELL_SIZE,
    )
}

async fn run(config: WireworldConfig) {
    let mut sim = config.build_simulation();
    let mut camera = home_camera(&sim);
    let world_path = config.files.world_path.clone();

    log::info!(
        "Wireworld {}x{} world, {} ticks/s, world file {}",
        config.world.width,
        config.world.height,
        sim.tick_rate(),
        world_path.display()
    );

    loop {
        let mouse_pos = mouse_position();
        let frame_time = get_frame_time();

        // Buttons follow the panel when the window is resized
        let buttons = ui::create_buttons();

        let mut commands = input::button_commands(&buttons, mouse_pos);
        commands.extend(input::keyboard_commands());
        for command in commands {
            input::apply(command, &mut sim, &mut camera, &world_path);
        }

        input::handle_zoom(&mut camera, mouse_pos);
        input::handle_pan(&mut camera, frame_time);
        input::handle_mouse_paint(&mut sim, &camera, mouse_pos);

        sim.advance(frame_time);

        rendering::draw_grid(sim.grid(), &camera);
        rendering::draw_controls(&sim, &buttons, mouse_pos);

        next_frame().await;
    }
}

fn main() {
    let loaded = WireworldConfig::load();
    let level = loaded
        .as_ref()
        .map_or("info", |config| config.debug.log_level.as_str())
        .to_string();
    init_logging(&level);

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        WireworldConfig::default()
    });

    macroquad::Window::from_config(window_conf(&config), run(config));
}
