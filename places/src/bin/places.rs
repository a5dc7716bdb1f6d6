use clap::Parser;
use places::app::PlacesApp;

fn main() {
    env_logger::init();
    let args = PlacesApp::parse();
    match args.run() {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                log::error!("failure serializing response: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            log::error!("{e}");
            eprintln!("places failed: {e}");
            std::process::exit(1);
        }
    }
}
