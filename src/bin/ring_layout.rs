use layer_shift::layers::RingLayout;
use std::env;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let height = parse_dim(args.next(), "height")?;
    let width = parse_dim(args.next(), "width")?;

    let layout = RingLayout::new(height, width);
    let json = serde_json::to_string_pretty(&layout)
        .map_err(|e| format!("Failed to serialize layout: {e}"))?;
    println!("{json}");
    Ok(())
}

fn parse_dim(arg: Option<String>, name: &str) -> Result<usize, String> {
    let raw = arg.ok_or_else(usage)?;
    raw.parse()
        .map_err(|e| format!("Invalid {name} '{raw}': {e}\n{}", usage()))
}

fn usage() -> String {
    "Usage: ring_layout <height> <width>".to_string()
}
