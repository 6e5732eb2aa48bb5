use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use parabolic_viz::core::ballistics::{Launch, LaunchInput, Solution};
use parabolic_viz::core::config::VisualizerConfig;
use parabolic_viz::core::controls::parse_numeric;
use parabolic_viz::core::error::{InputField, LaunchError};
use parabolic_viz::core::plot::{default_plot_path, write_svg};
use parabolic_viz::{Error, Result};

/// Closed-form projectile solver.
///
/// With no positional arguments the values are read from stdin.
#[derive(Parser, Debug)]
#[command(name = "parabolic_viz", version)]
struct Cli {
    /// Launch speed in m/s (vx with --components)
    #[arg(allow_negative_numbers = true)]
    first: Option<String>,

    /// Launch angle in degrees (vy in m/s with --components)
    #[arg(allow_negative_numbers = true)]
    second: Option<String>,

    /// Launch height in metres
    #[arg(allow_negative_numbers = true)]
    height: Option<String>,

    /// Read the first two values as velocity components
    #[arg(short, long)]
    components: bool,

    /// Write an SVG chart of the trajectory with a timestamped name
    #[arg(long)]
    plot: bool,

    /// Write the SVG chart to PATH instead (implies --plot)
    #[arg(long, value_name = "PATH")]
    plot_path: Option<PathBuf>,

    /// TOML config file
    #[arg(long, value_name = "PATH", env = "PARABOLIC_VIZ_CONFIG")]
    config: Option<PathBuf>,
}

fn parse_value(value: &str, field: InputField) -> std::result::Result<f64, LaunchError> {
    parse_numeric(value).ok_or_else(|| LaunchError::NonNumeric {
        field,
        raw: value.to_string(),
    })
}

fn read_value(prompt: &str, field: InputField) -> Result<f64> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Err(Error::Usage("Input ended unexpectedly (EOF).".to_string()));
        }

        match parse_value(&line, field) {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn field_names(components: bool) -> (InputField, InputField) {
    if components {
        (InputField::Vx, InputField::Vy)
    } else {
        (InputField::Speed, InputField::Angle)
    }
}

fn build_input(components: bool, first: f64, second: f64) -> LaunchInput {
    if components {
        LaunchInput::Component {
            vx_mps: first,
            vy_mps: second,
        }
    } else {
        LaunchInput::Polar {
            speed_mps: first,
            angle_deg: second,
        }
    }
}

fn inputs_from_args(cli: &Cli) -> Result<Option<(LaunchInput, f64)>> {
    let (first_field, second_field) = field_names(cli.components);
    match (&cli.first, &cli.second, &cli.height) {
        (None, None, None) => Ok(None),
        (Some(first), Some(second), Some(height)) => {
            let first = parse_value(first, first_field)?;
            let second = parse_value(second, second_field)?;
            let height = parse_value(height, InputField::Height)?;
            Ok(Some((build_input(cli.components, first, second), height)))
        }
        _ => Err(Error::Usage(
            "Expected exactly 3 arguments: <speed|vx> <angle|vy> <height>.".to_string(),
        )),
    }
}

fn inputs_from_user(components: bool) -> Result<(LaunchInput, f64)> {
    let (first, second) = if components {
        (
            read_value("Vx (m/s): ", InputField::Vx)?,
            read_value("Vy (m/s): ", InputField::Vy)?,
        )
    } else {
        (
            read_value("Speed (m/s): ", InputField::Speed)?,
            read_value("Angle (degrees): ", InputField::Angle)?,
        )
    };
    let height = read_value("Height (m): ", InputField::Height)?;
    Ok((build_input(components, first, second), height))
}

fn print_solution(solution: &Solution) {
    println!();
    for line in solution.result_lines() {
        println!("{line}");
    }
    println!("Time of flight: {:.4} s", solution.flight_time_s);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = VisualizerConfig::discover(cli.config.as_deref())?;

    let (input, height) = match inputs_from_args(&cli)? {
        Some(inputs) => inputs,
        None => inputs_from_user(cli.components)?,
    };
    if height < 0.0 {
        warn!(height, "launch height is below ground");
    }

    let launch = Launch::new(input, height, config.gravity_mps2);
    let solution = launch.solve()?;
    debug!(?input, height, "solved");
    print_solution(&solution);

    if cli.plot || cli.plot_path.is_some() {
        let path = cli.plot_path.unwrap_or_else(default_plot_path);
        write_svg(&path, &launch, &solution, config.ledge_width_m())?;
        println!("Plot written to {}", path.display());
    }

    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("parabolic_viz").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn reads_polar_arguments() {
        let (input, height) = inputs_from_args(&cli(&["20", "45", "1.5"]))
            .expect("arguments are valid")
            .expect("arguments were given");

        assert_eq!(
            input,
            LaunchInput::Polar {
                speed_mps: 20.0,
                angle_deg: 45.0
            }
        );
        assert_eq!(height, 1.5);
    }

    #[test]
    fn reads_component_arguments() {
        let (input, _) = inputs_from_args(&cli(&["--components", "3", "4", "0"]))
            .expect("arguments are valid")
            .expect("arguments were given");

        assert_eq!(
            input,
            LaunchInput::Component {
                vx_mps: 3.0,
                vy_mps: 4.0
            }
        );
    }

    #[test]
    fn no_arguments_means_prompt() {
        assert!(inputs_from_args(&cli(&[])).expect("valid").is_none());
    }

    #[test]
    fn rejects_partial_arguments() {
        let err = inputs_from_args(&cli(&["20", "45"])).expect_err("height is missing");
        assert!(err.to_string().contains("Expected exactly 3 arguments"));
    }

    #[test]
    fn rejects_non_numeric_angle() {
        let err = inputs_from_args(&cli(&["20", "steep", "0"])).expect_err("angle is bad");
        assert!(err.to_string().contains("Invalid angle: 'steep'"));
    }

    #[test]
    fn accepts_negative_positionals() {
        let (input, height) = inputs_from_args(&cli(&["--components", "3", "-4", "10"]))
            .expect("arguments are valid")
            .expect("arguments were given");
        assert_eq!(
            input,
            LaunchInput::Component {
                vx_mps: 3.0,
                vy_mps: -4.0
            }
        );
        assert_eq!(height, 10.0);

        let (input, _) = inputs_from_args(&cli(&["20", "-30", "5"]))
            .expect("arguments are valid")
            .expect("arguments were given");
        assert_eq!(
            input,
            LaunchInput::Polar {
                speed_mps: 20.0,
                angle_deg: -30.0
            }
        );
    }

    #[test]
    fn plot_flag_does_not_consume_positionals() {
        let parsed = cli(&["--plot", "20", "45", "0"]);
        assert!(parsed.plot);
        assert_eq!(parsed.plot_path, None);
        assert!(inputs_from_args(&parsed).expect("valid").is_some());

        let parsed = cli(&["--plot-path", "out.svg", "20", "45", "0"]);
        assert_eq!(parsed.plot_path, Some(PathBuf::from("out.svg")));
        assert!(inputs_from_args(&parsed).expect("valid").is_some());

        assert!(!cli(&[]).plot);
    }
}
