use statebits::{DriverHost, DriverSync, MemoryHost, SyncBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Five gestures need three synced bits.
    let builder = SyncBuilder::new()
        .slots(["Gesture_b2", "Gesture_b1", "Gesture_b0"])
        .state("Idle")?
        .state("Wave")?
        .state("Point")?
        .state("Peace")?
        .state("ThumbsUp")?;

    let sync = DriverSync::from_builder(&builder)?;

    let mut host = MemoryHost::new();
    for entry in builder.states.entries() {
        host.add_state(&entry.name);
    }

    let reports = sync.ensure_all(&mut host, &builder.states)?;
    for report in &reports {
        println!("{}", serde_json::to_string(report)?);
    }

    // A second pass must find nothing to do.
    for analysis in sync.verify_all(&host, &builder.states)? {
        assert!(analysis.is_synchronized());
        tracing::info!(
            "{} -> {:?}",
            analysis.state,
            host.read_driver_entries(&analysis.state)?.unwrap_or_default()
        );
    }

    let conditions = sync.transition_conditions(4)?;
    println!("ThumbsUp transition: {}", serde_json::to_string(&conditions)?);

    Ok(())
}
