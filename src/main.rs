use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use rscodec::{parse_args, CodecParams, ReedSolomon, RsError};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = parse_args();
    let params = codec_params(&matches)?;
    let rs = ReedSolomon::from_params(params)
        .with_context(|| format!("Failed to configure codec ({})", params))?;

    match matches.subcommand() {
        Some(("encode", sub)) => encode(&rs, sub),
        Some(("correct", sub)) => correct(&rs, sub),
        Some(("check", sub)) => check(&rs, sub),
        _ => bail!("No subcommand given"),
    }
}

fn codec_params(matches: &ArgMatches) -> Result<CodecParams> {
    let polynomial = *matches.get_one::<u32>("poly").context("Missing --poly")?;
    let root_offset = *matches.get_one::<u32>("offset").context("Missing --offset")?;
    let parity_len = *matches
        .get_one::<usize>("parity")
        .context("--parity is required")?;
    Ok(CodecParams::new(polynomial, parity_len, root_offset))
}

fn block(matches: &ArgMatches) -> Result<Vec<u8>> {
    matches
        .get_one::<Vec<u8>>("block")
        .cloned()
        .context("Missing block")
}

fn data_len(matches: &ArgMatches) -> Result<usize> {
    matches
        .get_one::<usize>("data_len")
        .copied()
        .context("Missing --data-len")
}

fn encode(rs: &ReedSolomon, matches: &ArgMatches) -> Result<ExitCode> {
    let data = block(matches)?;
    let mut parity = vec![0u8; rs.parity_len()];
    rs.encode_into(&data, &mut parity)
        .context("Failed to encode block")?;

    println!("{}{}", hex::encode(&data), hex::encode(&parity));
    Ok(ExitCode::SUCCESS)
}

fn correct(rs: &ReedSolomon, matches: &ArgMatches) -> Result<ExitCode> {
    let mut codeword = block(matches)?;
    let data_len = data_len(matches)?;

    match rs.correct(data_len, &mut codeword) {
        Ok(errors) => {
            println!("{}", hex::encode(&codeword));
            println!("Corrected {} symbol(s)", errors);
            Ok(ExitCode::SUCCESS)
        }
        Err(RsError::Uncorrectable(reason)) => {
            eprintln!("Uncorrectable: {}", reason);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).context("Failed to correct block"),
    }
}

fn check(rs: &ReedSolomon, matches: &ArgMatches) -> Result<ExitCode> {
    let codeword = block(matches)?;
    let data_len = data_len(matches)?;

    if rs
        .is_codeword(data_len, &codeword)
        .context("Failed to check block")?
    {
        println!("Valid codeword");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("Errors detected");
        Ok(ExitCode::FAILURE)
    }
}
