use clap::{Parser, Subcommand};
use rhuff::{decode_file, encode_file};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    // Command to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path of the input file
    #[arg(short, long)]
    input: String,

    /// Path of the output file
    #[arg(short, long)]
    output: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Encode,
    Decode,
}

fn main() {
    let args = Args::parse();

    match args.command {
        Some(Commands::Encode) | None => {
            encode_file(&args.input, &args.output).expect("Error during encoding")
        }
        Some(Commands::Decode) => {
            decode_file(&args.input, &args.output).expect("Error during decoding")
        }
    };
}
