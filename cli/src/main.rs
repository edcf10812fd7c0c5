use clap::Parser;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "enumerate-glyphs")]
#[command(about = "List the glyphs of fonts grouped by Unicode block", long_about = None)]
struct Args {
    /// Directory containing the font files
    #[arg(value_name = "FONTDIR")]
    fontdir: PathBuf,

    /// Font base names, resolved as FONTDIR/NAME.EXTENSION
    #[arg(value_name = "FONT")]
    font: Vec<String>,

    /// Font file extension
    #[arg(short, long, default_value = "otf")]
    extension: String,

    /// Continue with the next font when one cannot be opened
    #[arg(short, long)]
    keep_going: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let reporter = glyph_report::GlyphReporter::builder()
        .font_dir(args.fontdir)
        .extension(args.extension)
        .keep_going(args.keep_going)
        .build();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = reporter.report_fonts(&args.font, &mut out);
    let flushed = out.flush();

    match result {
        Ok(0) => {}
        Ok(failed) => {
            eprintln!("{} font(s) could not be read", failed);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = flushed {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}
