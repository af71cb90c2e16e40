// src/main.rs

use inferno_pad::consts::FLAG_PATH;
use inferno_pad::{Challenge, Result};
use rand_core::OsRng;
use std::fs;
use std::process::ExitCode;
use zeroize::Zeroize;

fn run() -> Result<Challenge> {
    let mut secret = fs::read(FLAG_PATH)?;
    let challenge = Challenge::generate(&mut OsRng, &secret);
    secret.zeroize();
    challenge
}

fn main() -> ExitCode {
    match run() {
        Ok(challenge) => {
            println!("{challenge}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("inferno-pad: {err}");
            ExitCode::FAILURE
        }
    }
}
