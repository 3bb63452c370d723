use sprinkler_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut panel = ControlPanel::new();
    panel.select_scenario(2)?;
    panel.set_angle(45)?;
    panel.set_speed(3.5);

    let mut engine = SimulationEngine::new();
    let mut telemetry = Telemetry::new();

    let time_step = 1.0 / 60.0;

    // Hold the trigger for one second of spray, then let the last droplets
    // land before reporting.
    panel.fire();
    let mut elapsed_time = 0.0;
    while elapsed_time < 1.0 {
        let report = engine.tick(&panel, time_step);
        telemetry.collect_frame(&report, time_step);
        elapsed_time += time_step;
    }

    panel.stop();
    while engine.live_particle_count() > 0 {
        let report = engine.tick(&panel, time_step);
        telemetry.collect_frame(&report, time_step);
    }

    let headline = scenario_readout(panel.scenario(), panel.angle_degrees(), panel.speed());
    let bars = comparison(panel.angle_degrees(), panel.speed());
    telemetry.display_data(&headline, &bars);

    Ok(())
}
