use hrdc::SourceText;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(clap::Parser)]
enum Command {
    /// Compile a descriptor source file
    Build {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Write the raw descriptor bytes to a file instead of printing
        /// a hex listing
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Check a source file and report the first error, if any
    Check {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print the compiled descriptor size in bytes
    Size {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(clap::Parser)]
#[command(version, about = "USB HID report descriptor compiler")]
struct Args {
    #[clap(subcommand)]
    command: Command,

    /// Define a source parameter, e.g. `-D pad=4` or `-D mask=0x1F`
    #[arg(
        short = 'D',
        long = "define",
        value_name = "NAME=VALUE",
        global = true
    )]
    defines: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Args = clap::Parser::parse();
    match run(args) {
        Ok(code) => code,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, String> {
    let defines = args
        .defines
        .iter()
        .map(|spec| parse_define(spec))
        .collect::<Result<Vec<_>, String>>()?;
    let params: Vec<(&str, i64)> = defines
        .iter()
        .map(|(name, value)| (name.as_str(), *value))
        .collect();

    match args.command {
        Command::Build { input, output } => {
            let code = read(&input)?;
            let source = SourceText::with_params(&code, &params);
            let mut bytes = Vec::new();
            if let Err(diag) = hrdc::compile(&source, &mut bytes) {
                return Err(located(&input, diag));
            }
            log::info!("compiled {} bytes", bytes.len());
            match output {
                Some(path) => {
                    fs::write(&path, &bytes).map_err(|err| format!("{}: {err}", path.display()))?
                }
                None => print_hex(&bytes),
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Check { input } => {
            let code = read(&input)?;
            let source = SourceText::with_params(&code, &params);
            let diag = hrdc::compile_error(&source);
            if diag.is_error() {
                eprintln!("{}", located(&input, diag));
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Size { input } => {
            let code = read(&input)?;
            let source = SourceText::with_params(&code, &params);
            println!("{}", hrdc::compiled_size(&source));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("{}: {err}", path.display()))
}

fn located(path: &Path, diag: hrdc::Diagnostic) -> String {
    format!("{}:{diag}", path.display())
}

fn print_hex(bytes: &[u8]) {
    for chunk in bytes.chunks(16) {
        let line: Vec<String> = chunk.iter().map(|b| format!("{b:02X}")).collect();
        println!("{}", line.join(" "));
    }
}

fn parse_define(spec: &str) -> Result<(String, i64), String> {
    let Some((name, value)) = spec.split_once('=') else {
        return Err(format!(
            "invalid parameter definition `{spec}`, expected NAME=VALUE"
        ));
    };
    let value =
        parse_int(value).ok_or_else(|| format!("invalid parameter value in `{spec}`"))?;
    Ok((name.to_owned(), value))
}

fn parse_int(text: &str) -> Option<i64> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let value = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16).ok()?,
        None => rest.parse::<i64>().ok()?,
    };
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod test {
    use super::parse_define;
    use super::parse_int;

    #[test]
    fn integers() {
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("-42"), Some(-42));
        assert_eq!(parse_int("0x1F"), Some(0x1F));
        assert_eq!(parse_int("-0x1F"), Some(-0x1F));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("x"), None);
    }

    #[test]
    fn defines() {
        assert_eq!(parse_define("pad=4"), Ok(("pad".to_owned(), 4)));
        assert!(parse_define("pad").is_err());
        assert!(parse_define("pad=q").is_err());
    }
}
