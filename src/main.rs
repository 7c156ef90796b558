use anyhow::Result;
use module_contacts::config::Settings;
use module_contacts::domain::sample_data::sample_persons;
use module_contacts::telemetry;
use tracing::info;

fn main() -> Result<()> {
    let settings = Settings::new()?;
    telemetry::init(&settings.logging)?;

    info!(
        environment = %settings.application.environment,
        "Starting {}", settings.application.name
    );

    let persons = if settings.application.sample_data {
        sample_persons()?
    } else {
        Vec::new()
    };
    info!(count = persons.len(), "Loaded contacts");

    println!("{}", serde_json::to_string_pretty(&persons)?);

    Ok(())
}
