use clap::Parser;
use fixed_resize::config::{self, Overrides};
use fixed_resize::imaging::{RustBackend, resize_image};
use fixed_resize::output;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fixed-resize")]
#[command(about = "Resize an image to fixed dimensions")]
#[command(long_about = "\
Resize an image to fixed dimensions

The image is stretched to exactly the target size (512x512 by default).
Transparent pixels are composited onto a white background first, so the
result is always opaque unless --keep-alpha is given.

Without an output path the result is written next to the input:

  emoji.png  ->  emoji_512x512.png

JPEG outputs are encoded at quality 95; other formats use encoder defaults.

Run 'fixed-resize --print-config' to see a documented config file.")]
#[command(version)]
struct Cli {
    /// Image to resize
    input: Option<PathBuf>,

    /// Where to write the result (default: <input>_<W>x<H>.<ext>)
    output: Option<PathBuf>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    ignored: Vec<String>,

    /// Target width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Target height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// JPEG quality (1-100)
    #[arg(long)]
    quality: Option<u32>,

    /// Keep the alpha channel when the output format supports it
    #[arg(long)]
    keep_alpha: bool,

    /// TOML config file layered over the stock defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(long)]
    log: bool,

    /// Print a stock config file with all options documented
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    if cli.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return ExitCode::SUCCESS;
    }

    let Some(input) = cli.input else {
        for line in output::usage_lines("fixed-resize") {
            println!("{}", line);
        }
        return ExitCode::FAILURE;
    };

    let overrides = Overrides {
        width: cli.width,
        height: cli.height,
        jpeg_quality: cli.quality,
        keep_alpha: cli.keep_alpha,
    };
    let config = match config::load_config(cli.config.as_deref(), &overrides) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", output::format_config_error(&e));
            return ExitCode::FAILURE;
        }
    };

    match resize_image(&RustBackend::new(), &input, cli.output.as_deref(), &config) {
        Ok(report) => {
            tracing::debug!(
                source = %report.outcome.source,
                color = ?report.outcome.source_color,
                flattened = report.outcome.flattened,
                "resize complete"
            );
            output::print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", output::format_resize_error(&e));
            ExitCode::FAILURE
        }
    }
}
