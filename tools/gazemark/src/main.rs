use clap::Parser;
use gazemark::args::Args;
use gazemark::pipeline::{PipelineConfig, run};
use gazemark_base::{log, log_fatal};
use gazemark_render::MarkerStyle;

fn main() {
    gazemark_base::init_stdout_logger();
    let args = Args::parse();

    if !(0.0..=1.0).contains(&args.alpha) {
        log_fatal!("alpha must be within 0.0..=1.0, got {}", args.alpha);
    }

    let config = PipelineConfig {
        csv: args.csv,
        left: args.left,
        right: args.right,
        output_prefix: args.output,
        alpha: args.alpha,
        style: MarkerStyle {
            radius: args.radius,
            ..MarkerStyle::default()
        },
    };

    if let Err(err) = run(&config) {
        log_fatal!("{err}");
    }
}
