use anyhow::bail;
use anyhow::Context;
use charconv::*;
use clap::Parser;
use clap::Subcommand;
use clap_num::maybe_hex;
use clap_num::number_range;
use log::LevelFilter;

/// Inspect hex, BCD and byte-order conversions of device data
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// More output, repeat for more detail (RUST_LOG takes precedence)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Hex character to its nibble value
    Nibble { ch: char },
    /// Nibble value to its hex character
    Digit {
        #[arg(value_parser = maybe_hex::<u8>)]
        num: u8,
    },
    /// Swap the bytes of a 16-bit value
    Swap16 {
        #[arg(value_parser = maybe_hex::<u16>)]
        value: u16,
    },
    /// Swap the bytes of a 32-bit value
    Swap32 {
        #[arg(value_parser = maybe_hex::<u32>)]
        value: u32,
    },
    /// Packed BCD byte to decimal
    Bcd2dec {
        #[arg(value_parser = maybe_hex::<u8>)]
        value: u8,
    },
    /// Decimal 0-99 to a packed BCD byte
    Dec2bcd {
        #[arg(value_parser = decimal_digits)]
        value: u8,
    },
    /// Up to 8 hex digits to a 32-bit value
    U32 {
        text: String,
        /// Reject non-hex digits instead of absorbing them
        #[arg(long)]
        strict: bool,
    },
    /// Bytes to space separated hex text
    Encode {
        #[arg(required = true, value_parser = maybe_hex::<u8>)]
        bytes: Vec<u8>,
    },
    /// Space separated hex text to bytes
    Decode {
        text: String,
        /// Reject malformed text instead of decoding garbage
        #[arg(long)]
        strict: bool,
    },
}

fn decimal_digits(s: &str) -> Result<u8, String> {
    number_range(s, 0, 99)
}

/// First byte of `text` that the lenient conversion turns into garbage
fn first_non_hex(text: &[u8], spaces_allowed: bool) -> Option<u8> {
    text.iter()
        .copied()
        .find(|&ch| !ch.is_ascii_hexdigit() && !(spaces_allowed && ch == b' '))
}

fn warn_if_not_hex(text: &[u8], spaces_allowed: bool) -> bool {
    match first_non_hex(text, spaces_allowed) {
        Some(ch) => {
            log::warn!(
                "{:#04x} is not a hex digit, the result is garbage (use --strict to reject it)",
                ch
            );
            true
        }
        None => false,
    }
}

fn parse_u32(text: &str, strict: bool) -> anyhow::Result<u32> {
    if strict {
        return try_char_array_to_u32(text.as_bytes())
            .with_context(|| format!("cannot parse {:?}", text));
    }

    // Digits past the 8th are never read, spaces are not skipped
    let used = &text.as_bytes()[..text.len().min(U32_HEX_DIGITS)];
    warn_if_not_hex(used, false);
    if text.len() > U32_HEX_DIGITS {
        log::info!("only the first {} digits are used", U32_HEX_DIGITS);
    }

    let len = u8::try_from(text.len()).unwrap_or(u8::MAX);
    let mut value = 0;
    if !char_array_to_u32(&mut value, text.as_bytes(), len) {
        bail!("nothing to parse");
    }

    Ok(value)
}

fn encode(bytes: &[u8]) -> anyhow::Result<String> {
    let len = u32::try_from(bytes.len()).context("too many bytes")?;
    let mut text = vec![0; get_byte_array_to_str_len(len) as usize];
    log::debug!("encoding {} bytes into {} characters", len, text.len());

    if !byte_array_to_str(&mut text, bytes, len) {
        bail!("cannot encode {} bytes", len);
    }

    // Drop the terminator
    text.pop();
    Ok(String::from_utf8(text)?)
}

fn decode(text: &str, strict: bool) -> anyhow::Result<Vec<u8>> {
    let mut bytes = vec![0; (text.len() + 1) / 2];
    log::debug!("decoding {} characters", text.len());

    let count = if strict {
        try_str_to_byte_array(&mut bytes, text.as_bytes())
            .with_context(|| format!("cannot decode {:?}", text))?
    } else {
        warn_if_not_hex(text.as_bytes(), true);
        let len = u32::try_from(text.len()).context("text too long")?;
        str_to_byte_array(&mut bytes, text.as_bytes(), len) as usize
    };

    if count == 0 {
        bail!("no bytes in {:?}", text);
    }

    bytes.truncate(count);
    Ok(bytes)
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Nibble { ch } => {
            let num = u8::try_from(ch).map_or(INVALID_NIBBLE, char_to_num);
            if num == INVALID_NIBBLE {
                log::warn!("{:?} is not a hex digit", ch);
            }
            println!("{:#04x}", num);
        }
        Command::Digit { num } => {
            let ch = num_to_char(num);
            if ch == INVALID_CHAR {
                log::warn!("{} does not fit in a nibble", num);
            }
            println!("{}", ch as char);
        }
        Command::Swap16 { value } => println!("{:#06x}", byte_swap_16(value)),
        Command::Swap32 { value } => println!("{:#010x}", byte_swap_32(value)),
        Command::Bcd2dec { value } => {
            if value >> 4 > 9 || value & 0x0f > 9 {
                log::warn!("{:#04x} is not valid BCD", value);
            }
            println!("{}", bcd_to_dec(value));
        }
        Command::Dec2bcd { value } => println!("{:#04x}", dec_to_bcd(value)),
        Command::U32 { text, strict } => println!("{:#010x}", parse_u32(&text, strict)?),
        Command::Encode { bytes } => println!("{}", encode(&bytes)?),
        Command::Decode { text, strict } => {
            let bytes = decode(&text, strict)?;
            let hex: Vec<String> = bytes.iter().map(|b| format!("{:#04x}", b)).collect();
            println!("{}", hex.join(" "));
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    run(cli.command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_hex_and_decimal_numbers() {
        let cli = Cli::try_parse_from(["charconv", "swap16", "0x1234"]).unwrap();
        assert!(matches!(cli.command, Command::Swap16 { value: 0x1234 }));

        let cli = Cli::try_parse_from(["charconv", "-vv", "swap32", "305419896"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Swap32 { value: 0x1234_5678 }));
    }

    #[test]
    fn rejects_out_of_range_decimal() {
        assert!(Cli::try_parse_from(["charconv", "dec2bcd", "99"]).is_ok());
        assert!(Cli::try_parse_from(["charconv", "dec2bcd", "100"]).is_err());
        assert!(Cli::try_parse_from(["charconv", "encode"]).is_err());
        assert!(Cli::try_parse_from(["charconv", "encode", "0x100"]).is_err());
    }

    #[test]
    fn encode_bytes() {
        assert_eq!(encode(&[0x01, 0xAB, 0xFF]).unwrap(), "01 AB FF ");
    }

    #[test]
    fn decode_text() {
        assert_eq!(decode("01  AB", false).unwrap(), vec![0x01, 0xAB]);
        assert_eq!(decode("01 ab ff", true).unwrap(), vec![0x01, 0xAB, 0xFF]);
        assert!(decode("   ", false).is_err());
        assert!(decode("0G", true).is_err());
        assert!(decode("012", true).is_err());
    }

    #[test]
    fn parse_u32_text() {
        assert_eq!(parse_u32("1A2B3C4D", false).unwrap(), 0x1A2B_3C4D);
        assert_eq!(parse_u32("1a2b3c4d5e", false).unwrap(), 0x1A2B_3C4D);
        assert_eq!(parse_u32("G1", false).unwrap(), 0xFF1);
        assert!(parse_u32("G1", true).is_err());
        assert!(parse_u32("", false).is_err());
    }

    #[test]
    fn garbage_digits_in_u32_text() {
        // A space is not skipped when parsing a u32, it becomes 0xFF
        assert_eq!(parse_u32("12 4", false).unwrap(), 0x1FF4);
        assert!(warn_if_not_hex(b"12 4", false));
        assert_eq!(first_non_hex(b"12 4", false), Some(b' '));

        // Only the first 8 digits are read, junk after them is harmless
        assert_eq!(parse_u32("12345678zz", false).unwrap(), 0x1234_5678);
        assert!(!warn_if_not_hex(b"12345678", false));
    }

    #[test]
    fn spaces_are_separators_in_decode_text() {
        assert_eq!(first_non_hex(b"01 AB", true), None);
        assert_eq!(first_non_hex(b"01 AG", true), Some(b'G'));
        assert!(!warn_if_not_hex(b"01  AB", true));
    }
}
