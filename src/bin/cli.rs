use pixelgauge::config::PixelGaugeConfig;
use pixelgauge::loader;
use pixelgauge::metrics::ImageAnalyzer;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pixelgauge::init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: pixelgauge-cli <command> [args]");
        eprintln!("Commands: analyze <path> [--json], info <path>, formats");
        std::process::exit(1);
    }

    let command = &args[1];
    match command.as_str() {
        "analyze" => cmd_analyze(&args),
        "info" => cmd_info(&args),
        "formats" => cmd_formats(),
        _ => {
            eprintln!("Unknown command: {}", command);
            std::process::exit(1);
        }
    }
}

fn cmd_analyze(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    if args.len() < 3 {
        eprintln!("Usage: pixelgauge-cli analyze <path> [--json]");
        std::process::exit(1);
    }
    let path = &args[2];
    let json = args.contains(&"--json".to_string());

    let config = PixelGaugeConfig::load_or_default();
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let buffer = loader::load_from_path(path)?;
    let analyzer = ImageAnalyzer::new(config.analyzer_config());
    let report = analyzer.analyze(&buffer)?;

    if json {
        if config.output.json_pretty {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", serde_json::to_string(&report)?);
        }
    } else {
        println!("{} ({}x{})", path, report.width, report.height);
        print_metric(
            "Brightness",
            report.formatted.brightness.as_deref(),
            report.brightness_level.map(|l| l.description()),
        );
        print_metric(
            "Saturation",
            report.formatted.saturation.as_deref(),
            report.saturation_level.map(|l| l.description()),
        );
        print_metric(
            "Contrast",
            report.formatted.contrast.as_deref(),
            report.contrast_level.map(|l| l.description()),
        );
        println!(
            "Quality: {:.3} ({})",
            report.quality_score,
            if report.is_acceptable {
                "acceptable"
            } else {
                "below threshold"
            }
        );
    }
    Ok(())
}

fn print_metric(name: &str, value: Option<&str>, description: Option<&str>) {
    match (value, description) {
        (Some(v), Some(d)) => println!("{}: {} ({})", name, v, d),
        (Some(v), None) => println!("{}: {}", name, v),
        _ => println!("{}: -", name),
    }
}

fn cmd_info(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    if args.len() < 3 {
        eprintln!("Usage: pixelgauge-cli info <path>");
        std::process::exit(1);
    }
    let path = &args[2];
    let buffer = loader::load_from_path(path)?;
    println!(
        "{}: {}x{}, {} pixels",
        path,
        buffer.width(),
        buffer.height(),
        buffer.pixel_count()
    );
    Ok(())
}

fn cmd_formats() -> Result<(), Box<dyn std::error::Error>> {
    for ext in loader::SUPPORTED_EXTENSIONS {
        println!("{}", ext);
    }
    Ok(())
}
