use std::env;
use std::io::{
    self,
    BufWriter,
    Write
};
use std::process::ExitCode;

use log::{
    error,
    info
};

use polysampler::configuration::SamplerConfiguration;
use polysampler::sampler::curvesampler::CurveSampler;
use polysampler::sampler::samplererror::SamplerError;

fn run() -> Result<(), SamplerError> {
    let config = match env::args().nth(1) {
        Some(config_path) => {
            info!("loading configuration from {}", config_path);
            SamplerConfiguration::from_reader(config_path)?
        }
        None => SamplerConfiguration::default()
    };

    let mut sampler = CurveSampler::new(config)?;
    sampler.generate()?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    sampler.dataset().write_csv(&mut writer)?;
    writer.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("polysampler: {}", err);
            ExitCode::FAILURE
        }
    }
}
