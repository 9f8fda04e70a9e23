//! gf2n CLI - arithmetic in GF(2^n) from the command line
//!
//! Operands and custom moduli are hex byte strings, lowest-degree byte
//! first: `090002` is x^17 + x^3 + 1.
//!
//! # Examples
//!
//! ```bash
//! # Multiply in the AES field
//! gf2n mul 57 83
//! # a = x^7 + x^6 + 1 (c1)
//!
//! # Invert under x^17 + x^3 + 1
//! gf2n --field gf2-17 inv 7b
//!
//! # Long division with a custom modulus
//! gf2n --modulus 1b01 div 1500 03
//! ```

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gf2n_field::{full_divide, gcd, moduli, FieldElement, Modulus};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gf2n")]
#[command(about = "Binary extension field arithmetic over GF(2^n)", long_about = None)]
struct Cli {
    /// Named field polynomial
    #[arg(short, long, value_enum, default_value = "aes", conflicts_with = "modulus")]
    field: Preset,

    /// Custom modulus as hex bytes, lowest-degree byte first
    #[arg(short, long)]
    modulus: Option<String>,

    /// Trace every division and Euclid step
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an element as a polynomial
    Show { a: String },

    /// a + b
    Add { a: String, b: String },

    /// a * b reduced modulo the field polynomial
    Mul { a: String, b: String },

    /// Polynomial long division: quotient and remainder
    Div { a: String, b: String },

    /// Multiplicative inverse of a
    Inv { a: String },

    /// Extended gcd with Bézout coefficients
    Gcd { a: String, b: String },

    /// a raised to a decimal exponent
    Pow { a: String, exp: u64 },
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// x^2 + x + 1
    #[value(name = "gf2-2")]
    Gf2_2,
    /// x^3 + x + 1
    #[value(name = "gf2-3")]
    Gf2_3,
    /// x^7 + x + 1
    #[value(name = "gf2-7")]
    Gf2_7,
    /// x^8 + x^4 + x^3 + x + 1
    #[value(name = "aes")]
    Aes,
    /// x^13 + x^4 + x^3 + x + 1
    #[value(name = "gf2-13")]
    Gf2_13,
    /// x^16 + x^5 + x^3 + x^2 + 1
    #[value(name = "gf2-16")]
    Gf2_16,
    /// x^17 + x^3 + 1
    #[value(name = "gf2-17")]
    Gf2_17,
}

impl Preset {
    fn modulus(self) -> Modulus {
        match self {
            Self::Gf2_2 => Modulus::from(moduli::GF2_2),
            Self::Gf2_3 => Modulus::from(moduli::GF2_3),
            Self::Gf2_7 => Modulus::from(moduli::GF2_7),
            Self::Aes => Modulus::from(moduli::GF2_8),
            Self::Gf2_13 => Modulus::from(moduli::GF2_13),
            Self::Gf2_16 => Modulus::from(moduli::GF2_16),
            Self::Gf2_17 => Modulus::from(moduli::GF2_17),
        }
    }
}

fn parse_bytes(input: &str) -> Result<Vec<u8>> {
    let digits = input.trim().trim_start_matches("0x");
    let digits = if digits.len() % 2 == 1 {
        format!("0{}", digits)
    } else {
        digits.to_string()
    };
    let bytes = hex::decode(&digits).with_context(|| format!("invalid hex bytes: {}", input))?;
    ensure!(!bytes.is_empty(), "empty operand");
    Ok(bytes)
}

fn parse_element(input: &str, modulus: &Modulus) -> Result<FieldElement> {
    Ok(FieldElement::new(parse_bytes(input)?, modulus))
}

fn print_element(label: &str, e: &FieldElement) {
    let trimmed = e.trimmed();
    println!("{} = {} ({})", label, trimmed, hex::encode(trimmed.coefficients()));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "gf2n=debug,gf2n_field=trace"
    } else {
        "gf2n=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let modulus = match &cli.modulus {
        Some(bytes) => Modulus::new(parse_bytes(bytes).context("failed to parse --modulus")?),
        None => cli.field.modulus(),
    };
    ensure!(modulus.degree() > 0, "modulus must have positive degree");
    info!("field GF(2^{}) modulo {}", modulus.degree(), modulus);

    match cli.command {
        Commands::Show { a } => {
            let a = parse_element(&a, &modulus)?;
            print_element("a", &a);
            println!("degree = {}", a.degree());
        }
        Commands::Add { a, b } => {
            let a = parse_element(&a, &modulus)?;
            let b = parse_element(&b, &modulus)?;
            print_element("a", &(&a + &b)?);
        }
        Commands::Mul { a, b } => {
            let a = parse_element(&a, &modulus)?;
            let b = parse_element(&b, &modulus)?;
            print_element("a", &(&a * &b)?);
        }
        Commands::Div { a, b } => {
            let a = parse_element(&a, &modulus)?;
            let b = parse_element(&b, &modulus)?;
            let (q, r) = full_divide(&a, &b)?;
            print_element("q", &q);
            print_element("r", &r);
        }
        Commands::Inv { a } => {
            let a = parse_element(&a, &modulus)?;
            let inv = a.inverse().with_context(|| format!("cannot invert {}", a))?;
            let check = (&a * &inv)?;
            debug!(check = %check, "a * a^-1");
            print_element("a", &inv);
        }
        Commands::Gcd { a, b } => {
            let a = parse_element(&a, &modulus)?;
            let b = parse_element(&b, &modulus)?;
            let result = gcd(&a, &b)?;
            print_element("gcd", &result.gcd);
            print_element("p", &result.p);
            print_element("q", &result.q);
        }
        Commands::Pow { a, exp } => {
            let a = parse_element(&a, &modulus)?;
            print_element("a", &a.pow(exp)?);
        }
    }

    Ok(())
}
