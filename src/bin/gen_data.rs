use std::io;

use log::info;
use pairgen::generator::Generator;
use pairgen::output::write_pairs;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let generator = Generator::default();
    let mut rng = StdRng::from_entropy();
    let pairs = generator.generate(&mut rng);
    info!("GEN_DATA: Writing {} trading pairs", pairs.len());

    write_pairs(io::stdout().lock(), &pairs)?;
    Ok(())
}
