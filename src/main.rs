use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use log::debug;

use termqr::{qr, ErrorCorrection, RenderConfig, RenderMode, SixelOptions, MAX_INPUT_BYTES};

/// Read up to 8 KiB from stdin and print it as a QR code.
#[derive(Parser, Debug)]
#[command(name = "termqr", version, about)]
struct Args {
    /// Render method ('text' or 'sixel')
    #[arg(long, default_value = "text")]
    render: String,

    /// Black character/color for text/sixel renderer
    #[arg(long)]
    black: Option<String>,

    /// White character/color for text/sixel renderer
    #[arg(long)]
    white: Option<String>,

    /// Error-correction level (l, m, q, h)
    #[arg(long, default_value = "l")]
    ec_level: String,

    /// Sixel pixels per module, in multiples of six
    #[arg(long, default_value_t = 2)]
    scale: usize,

    /// Sixel border width in modules
    #[arg(long, default_value_t = 1)]
    padding: usize,
}

impl Args {
    fn render_config(&self) -> termqr::Result<RenderConfig> {
        let mode: RenderMode = self.render.parse()?;
        let sixel = SixelOptions::new(self.scale, self.padding)?;
        Ok(RenderConfig::new(mode)
            .with_dark(self.black.as_deref())
            .with_light(self.white.as_deref())
            .with_sixel_options(sixel))
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.render_config()?;
    let level: ErrorCorrection = args.ec_level.parse()?;
    debug!("config: {:?}, ec level {:?}", config, level);

    let data = termqr::read_bounded(io::stdin().lock(), MAX_INPUT_BYTES)
        .context("reading standard input")?;
    let grid = qr::encode(&data, level)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    termqr::render(&mut out, &grid, &config).context("writing output")?;
    out.flush()
        .map_err(termqr::Error::from)
        .context("writing output")?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        let code = e
            .downcast_ref::<termqr::Error>()
            .map(termqr::Error::exit_code)
            .unwrap_or(1);
        eprintln!("termqr: {:#}", e);
        std::process::exit(code);
    }
}
