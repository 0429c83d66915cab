use domsvg::{ConvertConfig, LineBoxPolicy, PipelineError, fixture_to_svg};
use std::env;
use std::fs;

fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let union_lines = args.iter().skip(1).any(|arg| arg == "--union-lines");
    let paths: Vec<&String> = args
        .iter()
        .skip(1)
        .filter(|arg| !arg.starts_with("--"))
        .collect();

    if paths.len() != 2 {
        eprintln!("Snapshot a laid-out document tree as a static SVG.");
        eprintln!();
        eprintln!(
            "Usage: {} [--union-lines] <path/to/fixture.json> <path/to/output.svg>",
            args.first().map(String::as_str).unwrap_or("domsvg")
        );
        std::process::exit(1);
    }

    let fixture_path = paths[0];
    let output_path = paths[1];

    let config = ConvertConfig {
        line_box_policy: if union_lines {
            LineBoxPolicy::Union
        } else {
            LineBoxPolicy::FirstWord
        },
        ..ConvertConfig::default()
    };

    log::info!("Loading fixture from {}", fixture_path);
    let json = fs::read_to_string(fixture_path)?;

    let svg = fixture_to_svg(&json, config)?;
    fs::write(output_path, svg)?;

    log::info!("Successfully generated {}", output_path);
    Ok(())
}
