use log::error;

fn main() {
    if let Err(err) = grid_snake::log::init() {
        eprintln!("logging disabled: {err}");
    }

    if let Err(err) = grid_snake::event_loop::run() {
        error!("{err}");
        std::process::exit(1);
    }
}
