use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wh_hydraulics::{
    Calculator, CalculatorConfig, ColebrookConfig, FlowRegime, ReynoldsSweep, SweepPoint,
    SweepSpacing, friction_sweep,
};
use wh_worksheet::{WorksheetInputs, WorksheetReport, WorksheetResult, run_case, solve_worksheet};

#[derive(Parser)]
#[command(name = "wh-cli")]
#[command(about = "Wellbore hydraulics CLI - velocity, Reynolds number and friction factor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the friction worksheet (velocity -> Reynolds number -> friction factor)
    Worksheet {
        #[command(flatten)]
        inputs: InputArgs,
        #[command(flatten)]
        solver: SolverArgs,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a worksheet case file (YAML or JSON)
    Case {
        /// Path to the case file
        case_path: PathBuf,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fluid velocity (ft/s) in a pipe or annulus
    Velocity {
        /// Flow rate (bbl/min)
        fluid_rate: f64,
        /// Outer diameter (in)
        diameter: f64,
        /// Concentric inner diameter (in)
        #[arg(long, default_value_t = 0.0)]
        inner_diameter: f64,
    },
    /// Newtonian Reynolds number
    Reynolds {
        /// Fluid velocity (ft/s)
        fluid_velocity: f64,
        /// Hydraulic diameter (in)
        hydraulic_diameter: f64,
        /// Fluid density (ppg)
        fluid_density: f64,
        /// Fluid viscosity (cP)
        fluid_viscosity: f64,
    },
    /// Fanning friction factor (Colebrook-White when turbulent)
    Friction {
        /// Hydraulic diameter (in)
        hydraulic_diameter: f64,
        /// Reynolds number
        reynolds_number: f64,
        /// Absolute roughness (in)
        roughness: f64,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Friction factor across a Reynolds number range, as CSV
    Sweep {
        /// First Reynolds number
        #[arg(long, default_value_t = 500.0)]
        start: f64,
        /// Last Reynolds number
        #[arg(long, default_value_t = 1.0e7)]
        end: f64,
        /// Number of points
        #[arg(long, default_value_t = 50)]
        points: usize,
        /// Use linear instead of logarithmic spacing
        #[arg(long)]
        linear: bool,
        /// Hydraulic diameter (in)
        #[arg(long, default_value_t = 3.0)]
        hydraulic_diameter: f64,
        /// Absolute roughness (in)
        #[arg(long, default_value_t = 0.005)]
        roughness: f64,
        #[command(flatten)]
        solver: SolverArgs,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Flow rate (bbl/min)
    #[arg(long, default_value_t = 3.0)]
    rate: f64,
    /// Outer diameter (in)
    #[arg(long, default_value_t = 3.0)]
    diameter: f64,
    /// Concentric inner diameter (in)
    #[arg(long, default_value_t = 0.0)]
    inner_diameter: f64,
    /// Fluid density (ppg)
    #[arg(long, default_value_t = 9.6)]
    density: f64,
    /// Fluid viscosity (cP)
    #[arg(long, default_value_t = 2.1)]
    viscosity: f64,
    /// Absolute roughness (in)
    #[arg(long, default_value_t = 0.005)]
    roughness: f64,
}

impl From<InputArgs> for WorksheetInputs {
    fn from(a: InputArgs) -> Self {
        WorksheetInputs {
            fluid_rate: a.rate,
            diameter: a.diameter,
            inner_diameter: a.inner_diameter,
            fluid_density: a.density,
            fluid_viscosity: a.viscosity,
            roughness: a.roughness,
        }
    }
}

#[derive(Args)]
struct SolverArgs {
    /// Colebrook solver iteration limit
    #[arg(long, default_value_t = 100)]
    max_iterations: usize,
}

impl SolverArgs {
    fn calculator(&self) -> Calculator {
        Calculator::new(CalculatorConfig {
            solver: ColebrookConfig {
                max_iterations: self.max_iterations,
                ..ColebrookConfig::default()
            },
            ..CalculatorConfig::default()
        })
    }
}

fn main() -> WorksheetResult<()> {
    // Initialize tracing; recovered failures are logged at warn
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Worksheet {
            inputs,
            solver,
            json,
        } => cmd_worksheet(inputs.into(), &solver.calculator(), json),
        Commands::Case { case_path, json } => cmd_case(&case_path, json),
        Commands::Velocity {
            fluid_rate,
            diameter,
            inner_diameter,
        } => {
            let v = wh_hydraulics::velocity(fluid_rate, diameter, inner_diameter)?;
            println!("Fluid Velocity {:.2} ft/s", v);
            Ok(())
        }
        Commands::Reynolds {
            fluid_velocity,
            hydraulic_diameter,
            fluid_density,
            fluid_viscosity,
        } => {
            let nre = wh_hydraulics::reynolds(
                fluid_velocity,
                hydraulic_diameter,
                fluid_density,
                fluid_viscosity,
            )?;
            println!("Reynold's Number {:.0}.", nre);
            if nre.is_finite() {
                println!("Flow is {}.", FlowRegime::from_reynolds(nre));
            }
            Ok(())
        }
        Commands::Friction {
            hydraulic_diameter,
            reynolds_number,
            roughness,
            solver,
        } => {
            let ff =
                solver
                    .calculator()
                    .friction_factor(hydraulic_diameter, reynolds_number, roughness)?;
            println!("FF {:.5}", ff);
            Ok(())
        }
        Commands::Sweep {
            start,
            end,
            points,
            linear,
            hydraulic_diameter,
            roughness,
            solver,
            output,
        } => {
            let spacing = if linear {
                SweepSpacing::Linear
            } else {
                SweepSpacing::Logarithmic
            };
            let sweep = ReynoldsSweep::new(start, end, points, spacing)?;
            let rows = friction_sweep(&solver.calculator(), &sweep, hydraulic_diameter, roughness)?;
            write_sweep_csv(&rows, output.as_deref())
        }
    }
}

fn cmd_worksheet(inputs: WorksheetInputs, calculator: &Calculator, json: bool) -> WorksheetResult<()> {
    let report = solve_worksheet(&inputs, calculator)?;
    print_report(&report, json)
}

fn cmd_case(case_path: &Path, json: bool) -> WorksheetResult<()> {
    let case = wh_worksheet::load_case(case_path)?;
    let outcome = run_case(&case)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("Case: {}", outcome.name);
    println!("{}", outcome.report);
    if let Some(rows) = &outcome.sweep {
        println!();
        write_sweep_csv(rows, None)?;
    }
    Ok(())
}

fn print_report(report: &WorksheetReport, json: bool) -> WorksheetResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn write_sweep_csv(rows: &[SweepPoint], output: Option<&Path>) -> WorksheetResult<()> {
    let mut csv = String::from("reynolds,regime,fanning,darcy\n");
    for row in rows {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            row.reynolds,
            row.regime,
            row.fanning,
            4.0 * row.fanning
        ));
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} sweep points to {}", rows.len(), path.display());
    } else {
        print!("{}", csv);
    }

    Ok(())
}
