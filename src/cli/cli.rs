use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(
        short,
        long,
        help = "JSON scenario file; defaults to the built-in reference machine"
    )]
    scenario: Option<String>,

    #[arg(short, long, default_value = "results")]
    output_dir: String,

    #[arg(short, long, default_value_t = false)]
    export: bool,

    #[arg(
        long,
        num_args = 2,
        value_names = ["FIRST", "LAST"],
        help = "Re-price the scenario for every cost year in the range"
    )]
    sweep_years: Option<Vec<u32>>,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

// Add getter methods for all fields
impl Args {
    pub fn scenario(&self) -> Option<&str> {
        self.scenario.as_deref()
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn export(&self) -> bool {
        self.export
    }

    pub fn sweep_years(&self) -> Option<(u32, u32)> {
        self.sweep_years.as_ref().map(|range| (range[0], range[1]))
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}
