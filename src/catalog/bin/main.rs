use tracing::info;
use lms_catalog::catalog::factory::instance;
use lms_catalog::catalog::scenario::{run_scenario, wire_sinks};
use lms_catalog::core::library::LibraryError;
use lms_catalog::utils::console::stdout;
use lms_catalog::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    setup_tracing();

    let catalog = instance();
    info!("starting catalog for branch {}", catalog.configuration().branch_id);

    let out = stdout();
    wire_sinks(&catalog, &out).await;
    run_scenario(catalog, out).await
}
