use std::error::Error;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::Local;
use csv::Writer;
use tracing::info;

use crate::core::pipeline::EstimateReport;

/// Writes one estimate to a timestamped directory: a summary table, the
/// power curve, the component bill of materials and the full report as
/// JSON.
pub struct ReportExporter {
    output_dir: PathBuf,
    timestamp: String,
}

impl ReportExporter {
    /// Creates `<output_dir>/<timestamp>` and exports into it.
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let full_path = Path::new(output_dir.as_ref()).join(&timestamp);
        fs::create_dir_all(&full_path)?;

        Ok(Self {
            output_dir: full_path,
            timestamp,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn export(&self, report: &EstimateReport) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.write_summary(report)?;
        self.write_power_curve(report)?;
        self.write_components(report)?;
        self.write_json(report)?;
        info!(directory = %self.output_dir.display(), "estimate exported");
        Ok(())
    }

    fn write_summary(&self, report: &EstimateReport) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut writer = Writer::from_path(self.output_dir.join("summary.csv"))?;
        writer.write_record(["metric", "value"])?;

        let scenario = &report.scenario;
        let rows = [
            ("timestamp", self.timestamp.clone()),
            ("site_class", report.site_class.to_string()),
            ("machine_rating_kw", format!("{:.1}", scenario.machine_rating)),
            ("rotor_diameter_m", format!("{:.1}", scenario.rotor_diameter)),
            ("hub_height_m", format!("{:.1}", scenario.hub_height)),
            ("cost_year", format!("{}-{:02}", scenario.year, scenario.month)),
            (
                "rated_wind_speed_ms",
                format!("{:.2}", report.power_curve.rated_wind_speed()),
            ),
            (
                "air_density_kg_m3",
                format!("{:.4}", report.power_curve.air_density()),
            ),
            ("aep_kwh", format!("{:.2}", report.aep.aep)),
            ("capacity_factor", format!("{:.4}", report.aep.capacity_factor)),
            ("turbine_mass_kg", format!("{:.1}", report.turbine.total_mass)),
            ("turbine_cost_usd", format!("{:.2}", report.turbine.total_cost)),
            ("bos_cost_usd", format!("{:.2}", report.bos.cost)),
            ("om_cost_usd_per_year", format!("{:.2}", report.om.cost)),
            (
                "levelized_replacement_usd_per_year",
                format!("{:.2}", report.om.levelized_replacement),
            ),
            ("land_lease_usd_per_year", format!("{:.2}", report.om.land_lease)),
            (
                "installed_capital_cost_usd",
                format!("{:.2}", report.finance.installed_capital_cost),
            ),
            ("coe_usd_per_kwh", format!("{:.6}", report.finance.coe)),
            ("lcoe_usd_per_kwh", format!("{:.6}", report.finance.lcoe)),
        ];
        for (metric, value) in rows {
            writer.write_record([metric, value.as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_power_curve(
        &self,
        report: &EstimateReport,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut writer = Writer::from_path(self.output_dir.join("power_curve.csv"))?;
        writer.write_record(["wind_speed_ms", "power_kw"])?;
        for point in report.power_curve.points() {
            writer.write_record([
                format!("{:.2}", point.wind_speed),
                format!("{:.3}", point.power),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_components(
        &self,
        report: &EstimateReport,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut writer = Writer::from_path(self.output_dir.join("components.csv"))?;
        writer.write_record(["component", "mass_kg", "cost_usd"])?;

        let turbine = &report.turbine;
        let blade_count = report.scenario.blade_count as f64;
        let mut write_row =
            |name: &str, mass: f64, cost: f64| -> Result<(), Box<dyn Error + Send + Sync>> {
                writer.write_record([
                    name.to_string(),
                    format!("{:.1}", mass),
                    format!("{:.2}", cost),
                ])?;
                Ok(())
            };

        write_row(
            "blades",
            turbine.blade.mass * blade_count,
            turbine.blade.cost * blade_count,
        )?;
        write_row("hub", turbine.hub_system.hub_mass, turbine.hub_system.hub_cost)?;
        write_row(
            "pitch_system",
            turbine.hub_system.pitch_system_mass,
            turbine.hub_system.pitch_system_cost,
        )?;
        write_row(
            "spinner",
            turbine.hub_system.spinner_mass,
            turbine.hub_system.spinner_cost,
        )?;
        for (name, part) in turbine.nacelle.named_parts() {
            write_row(name, part.mass, part.cost)?;
        }
        write_row("tower", turbine.tower.mass, turbine.tower.cost)?;
        write_row("marinization", 0.0, turbine.marinization_cost)?;
        writer.flush()?;
        Ok(())
    }

    fn write_json(&self, report: &EstimateReport) -> Result<(), Box<dyn Error + Send + Sync>> {
        let file = File::create(self.output_dir.join("report.json"))?;
        serde_json::to_writer_pretty(file, report)?;
        Ok(())
    }
}
