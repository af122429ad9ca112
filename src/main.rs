//! Cosmos — graph universe viewer. Runs the graph_universe app.

use graph_universe::prelude::*;

fn main() {
    let _ = dotenvy::dotenv();

    if let Some(path) = fixture_path() {
        UniverseBuilder::new().fixture(path).build().run();
        return;
    }

    match graph_endpoint() {
        Ok(config) => {
            UniverseBuilder::new().config(config).build().run();
        }
        Err(err) => {
            eprintln!("cosmos: {err}");
            std::process::exit(1);
        }
    }
}
