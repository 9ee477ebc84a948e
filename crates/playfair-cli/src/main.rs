//! Command-line front end for the Playfair cipher.
//!
//! This binary is the presentation layer over `playfair-cipher`: it derives
//! the key matrix, runs the requested operation, and renders the matrix, the
//! prepared text, the per-digraph step table, and the output.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p playfair-cli -- encrypt --key MONARCHY "instruments"
//! ```
//!
//! Decrypt with a non-default pad letter:
//!
//! ```sh
//! cargo run -p playfair-cli -- decrypt --key MONARCHY --pad Q GATLMZCLRQXA
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use playfair_cipher::{Playfair, StepRecord};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Encrypt,
    Decrypt,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Operation to perform on the text.
    #[arg(value_enum)]
    mode: Mode,

    /// Cipher key used to derive the 5x5 matrix.
    #[arg(short, long, default_value = "")]
    key: String,

    /// Pad letter used to split duplicate letters and complete odd-length text.
    #[arg(long, default_value_t = Playfair::DEFAULT_PAD)]
    pad: char,

    /// Text to encrypt or decrypt. Case and punctuation are ignored.
    text: String,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let cipher = match Playfair::new(&args.key, args.pad) {
        Ok(cipher) => cipher,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    println!("Key matrix:");
    println!("{}", cipher.matrix());
    println!();

    match args.mode {
        Mode::Encrypt => run_encrypt(&cipher, &args.text),
        Mode::Decrypt => run_decrypt(&cipher, &args.text),
    }
}

fn run_encrypt(cipher: &Playfair, text: &str) {
    let encrypted = cipher.encrypt(text);
    println!("Prepared:   {}", encrypted.prepared_text);
    print_steps("Encryption", &encrypted.steps);
    println!("Ciphertext: {}", encrypted.cipher_text);

    // Feed the ciphertext straight back through decryption so the round
    // trip is visible next to the encryption.
    let verified = cipher.decrypt(&encrypted.cipher_text);
    print_steps("Verification (decrypt)", &verified.steps);
    println!("Recovered:  {}", verified.plain_text);
}

fn run_decrypt(cipher: &Playfair, text: &str) {
    let decrypted = cipher.decrypt(text);
    print_steps("Decryption", &decrypted.steps);
    println!("Raw:        {}", decrypted.raw_text);
    println!("Plaintext:  {}", decrypted.plain_text);

    // Re-encrypt the recovered plaintext to show the matching ciphertext.
    let reencrypted = cipher.encrypt(&decrypted.plain_text);
    println!("Re-encrypts to: {}", reencrypted.cipher_text);
}

fn print_steps(title: &str, steps: &[StepRecord]) {
    if steps.is_empty() {
        return;
    }
    println!("{title} steps:");
    for step in steps {
        log::debug!("{} {} {}", step.input, step.rule, step.output);
        println!("  {}  {:<11}  {}", step.input, step.rule.to_string(), step.output);
    }
}
