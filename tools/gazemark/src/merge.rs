use clap::Parser;
use gazemark::args::MergeArgs;
use gazemark_base::{log, log_fatal};
use gazemark_video::combine_side_by_side;

fn main() {
    gazemark_base::init_stdout_logger();
    let args = MergeArgs::parse();

    if let Err(err) = combine_side_by_side(&args.left, &args.right, &args.output) {
        log_fatal!("{err}");
    }
    log::info!("merged video at {}", args.output.display());
}
