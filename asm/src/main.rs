use std::path::{Path, PathBuf};

use color_print::cprintln;
use ndrasm::{image::Image, msg::Msg, Assembler, Error, OrgMode, Options};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    input: PathBuf,

    /// Output file
    #[clap(short, long, default_value = "output.mem")]
    output: PathBuf,

    /// Dump labels and cells
    #[clap(short, long)]
    dump: bool,

    /// What `ORG` does to the output position
    #[clap(long, value_enum, default_value_t = OrgMode::Address)]
    org: OrgMode,

    /// Log more (-v debug, -vv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    init_logger(args.verbose);
    println!("Neander Assembler");

    let file = args.input.display().to_string();
    let source = match read_source(&args.input) {
        Ok(source) => source,
        Err(err) => {
            err.print_diag(&file, "");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&args, &file, &source) {
        err.print_diag(&file, &source);
        std::process::exit(1);
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_source(path: &Path) -> Result<String, Error> {
    if !path.is_file() {
        return Err(Error::Argument(format!(
            "Input file not found: {}",
            path.display()
        )));
    }
    std::fs::read_to_string(path).map_err(|e| Error::FileOpen(path.display().to_string(), e))
}

fn run(args: &Args, file: &str, source: &str) -> Result<(), Error> {
    println!("1. Tokenize");
    println!("  < {}", file);
    let asm = Assembler::from_source(source, Options { org: args.org });

    println!("2. Collect Labels");
    let labels = asm.first_pass()?;
    for redef in labels.redefined() {
        Msg::Warn(format!("Re-defined label: `{}`", redef.name)).diag(file, redef.line, source);
        Msg::Note(format!(
            "Already defined here as 0x{:02X}. The value has been overridden with 0x{:02X}.",
            redef.previous, redef.current
        ))
        .diag(file, redef.first_line, source);
    }
    println!("  - found #{} labels", labels.len());

    println!("3. Generate Binary");
    let output = asm.second_pass(&labels)?;
    println!("  - {} cells", output.len() / 2);

    println!("4. Write Image");
    println!("  > {}", args.output.display());
    let image = Image::new(output.bytes())?;
    image.write(&args.output)?;

    if args.dump {
        ndrasm::util::print_dump(asm.tokens(), &labels, &output);
    }

    cprintln!("<g,s>Finished</> binary .mem file generated successfully");
    Ok(())
}
