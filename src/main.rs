use std::error::Error;

use clap::Parser;
use rayon::prelude::*;

use windplant::cli::cli::Args;
use windplant::core::pipeline::{self, EstimateReport};
use windplant::utils::csv_export::ReportExporter;
use windplant::utils::logging;
use windplant::{ModelError, Scenario};

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Parse command line arguments
    let args = Args::parse();

    logging::init_logging(args.debug_logging());

    println!("Wind Plant Cost and Scaling Model");

    let scenario = match args.scenario() {
        Some(path) => Scenario::from_json_file(path)?,
        None => Scenario::default(),
    };

    if let Some((first_year, last_year)) = args.sweep_years() {
        run_year_sweep(&scenario, first_year, last_year);
        return Ok(());
    }

    let report = pipeline::evaluate_with_defaults(&scenario)?;
    print_summary(&report);

    if args.export() {
        let exporter = ReportExporter::new(args.output_dir())?;
        exporter.export(&report)?;
        println!("\nResults written to {}", exporter.output_dir().display());
    }

    Ok(())
}

/// Re-prices the same machine for every cost year in the range, one
/// rayon task per year. Years the index tables do not cover are
/// reported inline rather than aborting the sweep.
fn run_year_sweep(scenario: &Scenario, first_year: u32, last_year: u32) {
    let (first, last) = if first_year <= last_year {
        (first_year, last_year)
    } else {
        (last_year, first_year)
    };

    let rows: Vec<(u32, Result<EstimateReport, ModelError>)> = (first..=last)
        .into_par_iter()
        .map(|year| {
            let mut shifted = scenario.clone();
            shifted.year = year;
            (year, pipeline::evaluate_with_defaults(&shifted))
        })
        .collect();

    println!("\nCost year sweep ({} turbines)", scenario.turbine_count);
    println!(
        "{:<6} {:>14} {:>14} {:>12} {:>12}",
        "year", "TCC ($)", "BOS ($)", "COE ($/kWh)", "LCOE ($/kWh)"
    );
    for (year, outcome) in rows {
        match outcome {
            Ok(report) => println!(
                "{:<6} {:>14.0} {:>14.0} {:>12.6} {:>12.6}",
                year,
                report.turbine.total_cost,
                report.bos.cost,
                report.finance.coe,
                report.finance.lcoe
            ),
            Err(error) => println!("{:<6} {}", year, error),
        }
    }
}

fn print_summary(report: &EstimateReport) {
    let scenario = &report.scenario;

    println!("\nMachine");
    println!(
        "  {:.0} kW, {:.0} m rotor, {:.0} m hub height, {} blades, {} drivetrain",
        scenario.machine_rating,
        scenario.rotor_diameter,
        scenario.hub_height,
        scenario.blade_count,
        scenario.drivetrain
    );
    println!(
        "  Site: {} ({} m sea depth), cost year {}-{:02}",
        report.site_class, scenario.sea_depth, scenario.year, scenario.month
    );

    println!("\nPerformance");
    println!(
        "  Rated wind speed:      {:>12.2} m/s",
        report.power_curve.rated_wind_speed()
    );
    println!(
        "  Air density at hub:    {:>12.4} kg/m^3",
        report.power_curve.air_density()
    );
    println!("  Net AEP per turbine:   {:>12.0} kWh/yr", report.aep.aep);
    println!(
        "  Capacity factor:       {:>12.1} %",
        report.aep.capacity_factor * 100.0
    );

    println!("\nTurbine capital cost");
    println!("  Rotor:                 {:>12.0} $", report.turbine.rotor_cost);
    println!(
        "  Nacelle:               {:>12.0} $",
        report.turbine.nacelle.total_cost()
    );
    println!("  Tower:                 {:>12.0} $", report.turbine.tower.cost);
    if report.turbine.marinization_cost > 0.0 {
        println!(
            "  Marinization:          {:>12.0} $",
            report.turbine.marinization_cost
        );
    }
    println!(
        "  Total ({:>7.0} kg):   {:>12.0} $",
        report.turbine.total_mass, report.turbine.total_cost
    );

    println!("\nBalance of station");
    println!("  Foundation:            {:>12.0} $", report.bos.foundation);
    if report.bos.surety_bond > 0.0 {
        println!("  Surety bond:           {:>12.0} $", report.bos.surety_bond);
    }
    println!("  Total per turbine:     {:>12.0} $", report.bos.cost);

    println!("\nOperating charges per year");
    println!("  O&M:                   {:>12.0} $", report.om.cost);
    println!(
        "  Levelized replacement: {:>12.0} $",
        report.om.levelized_replacement
    );
    println!("  Land lease:            {:>12.0} $", report.om.land_lease);

    println!("\nCost of energy");
    println!(
        "  Installed capital:     {:>12.0} $",
        report.finance.installed_capital_cost
    );
    println!("  COE:                   {:>12.6} $/kWh", report.finance.coe);
    println!("  LCOE:                  {:>12.6} $/kWh", report.finance.lcoe);
}
