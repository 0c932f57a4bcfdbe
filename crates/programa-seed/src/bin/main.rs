use anyhow::Result;
use clap::Parser;

use fluvio_future::task::run_block_on;

use programa_seed::{SeedOpt, seed_programs};

fn main() -> Result<()> {
    fluvio_future::subscriber::init_tracer(None);

    let opt = SeedOpt::parse();
    let total = opt.values.len();
    let created = run_block_on(seed_programs(&opt))?;

    println!("{created} of {total} ProgramA instances created");
    Ok(())
}
