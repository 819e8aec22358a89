//! entrypoint for jwt-forge

#![cfg_attr(not(test), warn(clippy::dbg_macro))]

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use jwt_forge::{attacks, Error, Token};

#[derive(Debug, Parser)]
#[command(name = "jwt-forge")]
#[command(bin_name = "jwt-forge")]
#[command(version, about, long_about = None)]
struct Cli {
    /// The compact JWT (header.payload.signature) to operate on
    jwt: String,

    /// Print the decoded header, payload and signature
    #[arg(long)]
    print: bool,

    /// Replace the payload with the given JSON object and print the
    /// re-encoded (unsigned) token
    #[arg(long, short = 'p', value_name = "JSON")]
    payload: Option<String>,

    /// Forge an unsigned token using the "none" algorithm
    #[arg(long = "none-vulnerability", short = 'n', alias = "none")]
    none_vulnerability: bool,

    /// Re-sign as HS256 using the bytes of the key file as the HMAC secret
    /// (RS256 key-confusion attack)
    #[arg(long, value_name = "PATH")]
    hmac: Option<PathBuf>,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    #[allow(clippy::exit)]
    if let Err(err) = run(cli) {
        match err {
            // A missing key file is reported on stdout with this exact
            // phrase, but still exits non-zero.
            Error::KeyFileNotFound(_) => println!("{err}"),
            err => eprintln!("jwt-forge: {err}"),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> jwt_forge::Result<()> {
    let mut token = Token::parse(&cli.jwt)?;

    if let Some(payload) = &cli.payload {
        token.replace_payload(payload)?;
        println!("{}", token.signing_input()?);
    }

    if let Some(path) = &cli.hmac {
        let forged = attacks::hmac_confusion(token.clone(), path)?;
        println!("\nnew JWT: {forged}");
    }

    if cli.none_vulnerability {
        println!("{}", attacks::none_token(token.clone())?);
    }

    if cli.print {
        println!("Header: {}", serde_json::to_string(&token.header)?);
        println!("Payload: {}", serde_json::to_string(&token.payload)?);
        println!("Signature: {}", token.signature);
        println!("{}", token.signing_input()?);
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}
