use graph_sketcher;

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the graph sketcher application
    graph_sketcher::run_app()
}
