use clap::{Arg, ArgMatches, Command};

/// Parse an integer written in decimal or as `0x`-prefixed hex
pub fn parse_number(input: &str) -> Result<u32, String> {
    let parsed = match input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => input.parse(),
    };
    parsed.map_err(|_| format!("'{}' is not a decimal or 0x-prefixed hex number", input))
}

/// Parse a hex string of symbol bytes, ignoring whitespace
pub fn parse_hex_block(input: &str) -> Result<Vec<u8>, String> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(compact).map_err(|e| format!("invalid hex block: {}", e))
}

fn block_arg() -> Arg {
    Arg::new("block")
        .help("Symbols as hex bytes, e.g. 8ea4ba")
        .required(true)
        .value_parser(parse_hex_block)
}

fn data_len_arg() -> Arg {
    Arg::new("data_len")
        .short('d')
        .long("data-len")
        .help("Number of data symbols at the start of the block")
        .value_name("N")
        .required(true)
        .value_parser(clap::value_parser!(usize))
}

pub fn command() -> Command {
    Command::new("rscodec")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon encoder and corrector for GF(2^m) byte symbols")
        .arg_required_else_help(true)
        .arg(
            Arg::new("poly")
                .short('p')
                .long("poly")
                .help("Field characteristic polynomial")
                .value_name("POLY")
                .default_value("0x12d")
                .value_parser(parse_number)
                .global(true),
        )
        .arg(
            Arg::new("parity")
                .short('n')
                .long("parity")
                .help("Number of parity symbols per codeword")
                .value_name("COUNT")
                .value_parser(clap::value_parser!(usize))
                .global(true),
        )
        .arg(
            Arg::new("offset")
                .short('o')
                .long("offset")
                .help("Exponent of the first generator polynomial root")
                .value_name("EXP")
                .default_value("1")
                .value_parser(parse_number)
                .global(true),
        )
        .subcommand(
            Command::new("encode")
                .visible_alias("e")
                .about("Append parity to a data block and print the codeword")
                .arg(block_arg()),
        )
        .subcommand(
            Command::new("correct")
                .visible_alias("c")
                .about("Correct symbol errors in a received codeword")
                .arg(data_len_arg())
                .arg(block_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Report whether a block is a valid codeword")
                .arg(data_len_arg())
                .arg(block_arg()),
        )
}

pub fn parse_args() -> ArgMatches {
    command().get_matches()
}
